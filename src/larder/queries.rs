//! Read-only views over the ingredient collection.
//!
//! Every function takes a slice of anything that can be viewed as an
//! [`Ingredient`] (plain records or indexed [`DisplayIngredient`]s) and
//! returns the kept items in their original order, cloned. None of them
//! mutate their input.
//!
//! [`DisplayIngredient`]: crate::index::DisplayIngredient

use crate::dates::days_until;
use crate::model::{Category, ConfectionType, Ingredient, Location};
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Default look-ahead for the expiring-soon list.
pub const DEFAULT_EXPIRING_THRESHOLD_DAYS: i64 = 7;

/// Default size of the recently-added list.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Fresh items should have their ripeness confirmed at least this often.
pub const DEFAULT_CHECK_INTERVAL_DAYS: i64 = 3;

/// Items with an expiration date at most `threshold_days` away. Items that
/// have already expired are included. Callers sort with
/// [`sort_by_expiration`] for display.
pub fn expiring_soon<T>(records: &[T], threshold_days: i64, today: NaiveDate) -> Vec<T>
where
    T: AsRef<Ingredient> + Clone,
{
    keep(records, |i| {
        i.expiration_date
            .is_some_and(|date| days_until(date, today) <= threshold_days)
    })
}

/// Items missing a category, a location or an expiration date.
pub fn missing_data<T>(records: &[T]) -> Vec<T>
where
    T: AsRef<Ingredient> + Clone,
{
    keep(records, |i| {
        i.category.is_none() || i.location.is_none() || i.expiration_date.is_none()
    })
}

/// The last `limit` items in insertion order, most recent first.
pub fn recently_added<T>(records: &[T], limit: usize) -> Vec<T>
where
    T: Clone,
{
    let start = records.len().saturating_sub(limit);
    records[start..].iter().rev().cloned().collect()
}

pub fn by_location<T>(records: &[T], location: Location) -> Vec<T>
where
    T: AsRef<Ingredient> + Clone,
{
    keep(records, |i| i.location == Some(location))
}

/// Keeps an item if the category is given and matches, **or** the type is
/// given and matches. With neither criterion nothing is kept.
pub fn by_category_or_type<T>(
    records: &[T],
    category: Option<Category>,
    confection: Option<ConfectionType>,
) -> Vec<T>
where
    T: AsRef<Ingredient> + Clone,
{
    keep(records, |i| {
        (category.is_some() && i.category == category)
            || (confection.is_some() && i.confection == confection)
    })
}

/// A fresh item needs checking when its ripeness was never confirmed or was
/// last confirmed more than `interval_days` ago.
pub fn needs_checking(ingredient: &Ingredient, interval_days: i64, now: DateTime<Utc>) -> bool {
    if !ingredient.is_fresh() {
        return false;
    }
    match ingredient.last_checked_at {
        None => true,
        Some(checked) => now.signed_duration_since(checked) > Duration::days(interval_days),
    }
}

/// Ascending by expiration date; undated items go last. Stable.
pub fn sort_by_expiration<T>(records: &mut [T])
where
    T: AsRef<Ingredient>,
{
    records.sort_by_key(|r| {
        let date = r.as_ref().expiration_date;
        (date.is_none(), date)
    });
}

fn keep<T, F>(records: &[T], predicate: F) -> Vec<T>
where
    T: AsRef<Ingredient> + Clone,
    F: Fn(&Ingredient) -> bool,
{
    records
        .iter()
        .filter(|r| predicate(r.as_ref()))
        .cloned()
        .collect()
}
