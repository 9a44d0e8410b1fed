use crate::error::{LarderError, Result};
use crate::index::{index_ingredients, slot_of, DisplayIngredient};
use crate::model::Ingredient;
use crate::store::DataStore;

pub fn indexed_ingredients<S: DataStore>(store: &S) -> Result<Vec<DisplayIngredient>> {
    Ok(index_ingredients(store.load_all()?))
}

pub fn ingredient_by_index<S: DataStore>(store: &S, index: usize) -> Result<DisplayIngredient> {
    let mut ingredients = store.load_all()?;
    let slot = slot_of(index, ingredients.len())?;
    Ok(DisplayIngredient {
        index,
        ingredient: ingredients.swap_remove(slot),
    })
}

/// Names are capped at 20 characters by the forms, not here; the core only
/// refuses blank names.
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(LarderError::Validation(
            "Please enter an item name.".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// One-line summary used in success messages.
pub fn summary(ingredient: &Ingredient) -> String {
    fn or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
        value
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    format!(
        "{} (category: {}, location: {}, type: {}, expires: {})",
        ingredient.name,
        or_dash(ingredient.category),
        or_dash(ingredient.location),
        or_dash(ingredient.confection),
        or_dash(ingredient.expiration_date),
    )
}
