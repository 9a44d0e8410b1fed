use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::slot_of;
use crate::store::DataStore;
use tracing::info;

/// Removes the records at the given display indexes. Indexes refer to the
/// collection before any removal.
pub fn run<S: DataStore>(store: &mut S, indexes: &[usize]) -> Result<CmdResult> {
    let mut ingredients = store.load_all()?;

    let mut slots = indexes
        .iter()
        .map(|&index| slot_of(index, ingredients.len()))
        .collect::<Result<Vec<_>>>()?;
    slots.sort_unstable();
    slots.dedup();

    let mut removed = Vec::with_capacity(slots.len());
    for &slot in slots.iter().rev() {
        removed.push((slot + 1, ingredients.remove(slot)));
    }
    removed.reverse();

    store.save_all(&ingredients)?;

    let mut result = CmdResult::default();
    for (index, ingredient) in &removed {
        info!(index, name = %ingredient.name, "ingredient deleted");
        result.add_message(CmdMessage::success(format!(
            "Ingredient deleted ({}): {}",
            index, ingredient.name
        )));
    }
    Ok(result.with_affected(removed.into_iter().map(|(_, i)| i).collect()))
}
