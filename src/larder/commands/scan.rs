use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LarderError, Result};
use crate::lookup::{LookupOutcome, ProductLookup};
use crate::model::Ingredient;
use crate::store::DataStore;
use tracing::{info, warn};

/// Looks up a scanned code and stores a name-only record for it. Everything
/// else is left for the user to fill in later.
pub fn run<S, L>(store: &mut S, lookup: &L, code: &str) -> Result<CmdResult>
where
    S: DataStore,
    L: ProductLookup + ?Sized,
{
    let code = code.trim();
    if code.is_empty() {
        return Err(LarderError::Validation("No barcode given.".to_string()));
    }

    let mut result = CmdResult::default();
    let name = match lookup.lookup(code)? {
        LookupOutcome::Found(name) => name,
        LookupOutcome::NotFound => {
            warn!(code, "scanned product not found");
            result.add_message(CmdMessage::warning(format!(
                "Product not found for barcode {}",
                code
            )));
            return Ok(result);
        }
    };

    let ingredient = Ingredient::new(name);
    let mut ingredients = store.load_all()?;
    ingredients.push(ingredient.clone());
    store.save_all(&ingredients)?;

    info!(code, name = %ingredient.name, "scanned ingredient added");
    result.add_message(CmdMessage::success(format!(
        "Ingredient added ({}): {}",
        ingredients.len(),
        ingredient.name
    )));
    Ok(result.with_affected(vec![ingredient]))
}
