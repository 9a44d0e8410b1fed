//! # Display Indexes
//!
//! Ingredients have no stored id, and names are not guaranteed unique. The
//! stable handle a user can type is the item's position in the stored
//! collection, shown 1-based. Filtering and sorting never renumber: an item
//! listed as `4.` is item 4 whichever view it appears in, so
//! `larder delete 4` always targets the same record.

use crate::error::{LarderError, Result};
use crate::model::Ingredient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayIngredient {
    pub index: usize,
    pub ingredient: Ingredient,
}

impl AsRef<Ingredient> for DisplayIngredient {
    fn as_ref(&self) -> &Ingredient {
        &self.ingredient
    }
}

/// Pairs each record with its 1-based position.
pub fn index_ingredients(ingredients: Vec<Ingredient>) -> Vec<DisplayIngredient> {
    ingredients
        .into_iter()
        .enumerate()
        .map(|(i, ingredient)| DisplayIngredient {
            index: i + 1,
            ingredient,
        })
        .collect()
}

/// Parses user input like `3` into a display index.
pub fn parse_index(input: &str) -> Result<usize> {
    match input.trim().trim_end_matches('.').parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(LarderError::Api(format!("Invalid index: {}", input))),
    }
}

/// Zero-based slot of a display index, checked against the collection length.
pub fn slot_of(index: usize, len: usize) -> Result<usize> {
    if index == 0 || index > len {
        return Err(LarderError::Api(format!(
            "Index {} not found ({} ingredients stored)",
            index, len
        )));
    }
    Ok(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_are_one_based_positions() {
        let indexed = index_ingredients(vec![Ingredient::new("a"), Ingredient::new("b")]);
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[1].index, 2);
        assert_eq!(indexed[1].ingredient.name, "b");
    }

    #[test]
    fn parses_plain_and_dotted_numbers() {
        assert_eq!(parse_index("3").unwrap(), 3);
        assert_eq!(parse_index("12.").unwrap(), 12);
        assert!(parse_index("0").is_err());
        assert!(parse_index("milk").is_err());
    }

    #[test]
    fn slot_checks_bounds() {
        assert_eq!(slot_of(1, 2).unwrap(), 0);
        assert!(slot_of(3, 2).is_err());
        assert!(slot_of(0, 2).is_err());
    }
}
