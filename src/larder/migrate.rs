//! Upgrades persisted records written by older versions of the app.
//!
//! Older shapes may carry:
//! - `estimateDate`: the estimate label picked at creation time. When the
//!   record has no usable `expirationDate`, the label is resolved against
//!   the load day.
//! - `ripenessChangedAt`: the previous name of `lastCheckedAt`.
//! - a ripeness `status` on an item that is not fresh.
//!
//! - a vocabulary value this version does not know (`"category": "snacks"`).
//!   The value is dropped so the item shows up as missing data instead of
//!   making the whole collection unreadable.
//!
//! Migration works on raw JSON before typed deserialization and never
//! touches the store itself. [`Migration::upgraded`] tells the store whether
//! anything changed; `FileStore` writes the upgraded collection back right
//! away so a resolved estimate stays fixed from the first load on.

use crate::dates::Estimate;
use crate::error::{LarderError, Result};
use crate::model::{Category, ConfectionType, Ingredient, Location, Ripeness};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::str::FromStr;
use tracing::warn;

const LEGACY_ESTIMATE: &str = "estimateDate";
const LEGACY_CHECKED_AT: &str = "ripenessChangedAt";

/// A loaded collection and how many of its records needed upgrading.
#[derive(Debug, Default)]
pub struct Migration {
    pub ingredients: Vec<Ingredient>,
    pub upgraded: usize,
}

/// Parses a whole persisted collection. Anything other than a JSON array is
/// a store error.
pub fn migrate_collection(raw: Value, today: NaiveDate) -> Result<Migration> {
    match raw {
        Value::Array(items) => {
            let mut migration = Migration::default();
            for item in items {
                let (ingredient, changed) = upgrade_record(item, today)?;
                if changed {
                    migration.upgraded += 1;
                }
                migration.ingredients.push(ingredient);
            }
            Ok(migration)
        }
        Value::Null => Ok(Migration::default()),
        other => Err(LarderError::Store(format!(
            "expected a list of ingredients, found {}",
            json_kind(&other)
        ))),
    }
}

pub fn migrate_record(raw: Value, today: NaiveDate) -> Result<Ingredient> {
    upgrade_record(raw, today).map(|(ingredient, _)| ingredient)
}

fn upgrade_record(raw: Value, today: NaiveDate) -> Result<(Ingredient, bool)> {
    let mut fields = match raw {
        Value::Object(fields) => fields,
        other => {
            return Err(LarderError::Store(format!(
                "expected an ingredient object, found {}",
                json_kind(&other)
            )))
        }
    };
    let mut changed = false;

    if let Some(label) = fields.remove(LEGACY_ESTIMATE) {
        changed = true;
        if is_blank(fields.get("expirationDate")) {
            if let Some(estimate) = label.as_str().and_then(|l| l.parse::<Estimate>().ok()) {
                let resolved = estimate.resolve(today);
                warn!(
                    name = ?fields.get("name"),
                    estimate = %estimate,
                    %resolved,
                    "resolved legacy estimate into an expiration date"
                );
                fields.insert(
                    "expirationDate".to_string(),
                    Value::String(resolved.to_string()),
                );
            }
        }
    }

    if let Some(checked_at) = fields.remove(LEGACY_CHECKED_AT) {
        changed = true;
        if is_blank(fields.get("lastCheckedAt")) {
            fields.insert("lastCheckedAt".to_string(), checked_at);
        }
    }

    changed |= drop_unknown::<ConfectionType>(&mut fields, "type");
    changed |= drop_unknown::<Category>(&mut fields, "category");
    changed |= drop_unknown::<Location>(&mut fields, "location");
    changed |= drop_unknown::<Ripeness>(&mut fields, "status");

    if !is_fresh(&fields) {
        changed |= fields.remove("status").is_some();
        changed |= fields.remove("lastCheckedAt").is_some();
    }

    let ingredient = serde_json::from_value(Value::Object(fields))?;
    Ok((ingredient, changed))
}

/// Removes `key` when it holds a non-blank value that `T` cannot parse.
fn drop_unknown<T: FromStr>(fields: &mut Map<String, Value>, key: &str) -> bool {
    let known = match fields.get(key) {
        None | Some(Value::Null) => return false,
        Some(Value::String(s)) if s.trim().is_empty() => return false,
        Some(Value::String(s)) => s.parse::<T>().is_ok(),
        Some(_) => false,
    };
    if known {
        return false;
    }

    let dropped = fields.remove(key);
    warn!(
        name = ?fields.get("name"),
        field = key,
        value = ?dropped,
        "dropped unrecognised value"
    );
    true
}

fn is_fresh(fields: &Map<String, Value>) -> bool {
    fields
        .get("type")
        .and_then(Value::as_str)
        .and_then(|t| t.parse::<ConfectionType>().ok())
        == Some(ConfectionType::Fresh)
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
