use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::queries::{expiring_soon, sort_by_expiration};
use crate::store::DataStore;
use chrono::NaiveDate;

use super::helpers::indexed_ingredients;

/// Items expiring within `threshold_days` (overdue included), soonest first.
pub fn run<S: DataStore>(store: &S, threshold_days: i64, today: NaiveDate) -> Result<CmdResult> {
    let all = indexed_ingredients(store)?;
    let mut listed = expiring_soon(&all, threshold_days, today);
    sort_by_expiration(&mut listed);

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing expires in the next {} days.",
            threshold_days
        )));
    }
    Ok(result.with_listed(listed))
}
