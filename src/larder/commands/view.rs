use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::ingredient_by_index;

pub fn run<S: DataStore>(store: &S, indexes: &[usize]) -> Result<CmdResult> {
    let listed = indexes
        .iter()
        .map(|&index| ingredient_by_index(store, index))
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed(listed))
}
