use crate::commands::{CmdMessage, CmdResult};
use crate::dates::Estimate;
use crate::error::Result;
use crate::model::{Category, ConfectionType, Ingredient, Location, Ripeness};
use crate::store::DataStore;
use chrono::NaiveDate;
use tracing::info;

use super::helpers::{summary, validate_name};

/// How the expiration of a new item was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpirationInput {
    Exact(NaiveDate),
    Estimate(Estimate),
    #[default]
    Unknown,
}

impl ExpirationInput {
    pub fn resolve(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            ExpirationInput::Exact(date) => Some(*date),
            ExpirationInput::Estimate(estimate) => Some(estimate.resolve(today)),
            ExpirationInput::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewIngredient {
    pub name: String,
    pub brand: Option<String>,
    pub category: Option<Category>,
    pub location: Option<Location>,
    pub confection: Option<ConfectionType>,
    pub ripeness: Option<Ripeness>,
    pub expiration: ExpirationInput,
}

impl NewIngredient {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

pub fn run<S: DataStore>(store: &mut S, new: NewIngredient, today: NaiveDate) -> Result<CmdResult> {
    let name = validate_name(&new.name)?;
    let mut result = CmdResult::default();

    let is_fresh = new.confection == Some(ConfectionType::Fresh);
    let ripeness = match new.ripeness {
        Some(r) if !is_fresh => {
            result.add_message(CmdMessage::warning(format!(
                "Ignoring ripeness '{}': only fresh items have one",
                r
            )));
            None
        }
        other => other,
    };

    let ingredient = Ingredient {
        name,
        brand: new.brand.filter(|b| !b.trim().is_empty()),
        category: new.category,
        location: new.location,
        confection: new.confection,
        ripeness,
        is_opened: false,
        expiration_date: new.expiration.resolve(today),
        last_checked_at: None,
    };

    let mut ingredients = store.load_all()?;
    ingredients.push(ingredient.clone());
    store.save_all(&ingredients)?;

    info!(name = %ingredient.name, "ingredient added");
    result.add_message(CmdMessage::success(format!(
        "Ingredient added ({}): {}",
        ingredients.len(),
        summary(&ingredient)
    )));
    Ok(result.with_affected(vec![ingredient]))
}
