use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Category, ConfectionType, Location};
use crate::queries::{by_category_or_type, by_location, missing_data, recently_added};
use crate::store::DataStore;

use super::helpers::indexed_ingredients;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListView {
    #[default]
    All,
    Missing,
    Recent,
}

#[derive(Debug, Clone, Default)]
pub struct IngredientFilter {
    pub view: ListView,
    pub category: Option<Category>,
    pub location: Option<Location>,
    pub confection: Option<ConfectionType>,
}

/// Applies the view first, then each selected criterion in turn: category,
/// location, type. Category and type each go through `by_category_or_type`
/// on their own, so selecting both narrows to items matching both.
pub fn run<S: DataStore>(store: &S, filter: &IngredientFilter, recent_limit: usize) -> Result<CmdResult> {
    let all = indexed_ingredients(store)?;

    let mut listed = match filter.view {
        ListView::All => all,
        ListView::Missing => missing_data(&all),
        ListView::Recent => recently_added(&all, recent_limit),
    };

    if filter.category.is_some() {
        listed = by_category_or_type(&listed, filter.category, None);
    }
    if let Some(location) = filter.location {
        listed = by_location(&listed, location);
    }
    if filter.confection.is_some() {
        listed = by_category_or_type(&listed, None, filter.confection);
    }

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No ingredients found."));
    }
    Ok(result.with_listed(listed))
}
