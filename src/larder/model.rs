//! # Ingredient Record
//!
//! One [`Ingredient`] is one inventory entry. The persisted JSON shape uses the
//! camelCase field names of the stored collection (`expirationDate`, `isOpened`,
//! `lastCheckedAt`, `type` for the confection type, `status` for ripeness).
//!
//! Optional fields are `Option`s. On the way in, an empty string is read as
//! absent so that a placeholder like `"category": ""` counts as missing data;
//! on the way out, absent fields are simply not written.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error for a value outside one of the closed vocabularies below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

/// Generates a lowercase-on-the-wire vocabulary enum with `FromStr`,
/// `Display` (wire name) and a human label.
macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident, $kind:literal, { $($variant:ident => ($wire:literal, $label:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

vocabulary!(
    /// Food category.
    Category, "category", {
        Fruit => ("fruit", "Fruit"),
        Vegetable => ("vegetable", "Vegetable"),
        Bread => ("bread", "Bread"),
        Pasta => ("pasta", "Pasta"),
        Dairy => ("dairy", "Dairy"),
        Fish => ("fish", "Fish"),
        Meat => ("meat", "Meat"),
        Beverage => ("beverage", "Beverage"),
    }
);

vocabulary!(
    /// Where the item is kept.
    Location, "location", {
        Fridge => ("fridge", "Fridge"),
        Pantry => ("pantry", "Pantry"),
        Freezer => ("freezer", "Freezer"),
    }
);

vocabulary!(
    /// Preservation method. Only `Fresh` items carry a ripeness.
    ConfectionType, "confection type", {
        Fresh => ("fresh", "Fresh"),
        Canned => ("canned", "Canned"),
        Frozen => ("frozen", "Frozen"),
        Cured => ("cured", "Cured"),
    }
);

vocabulary!(
    /// Ripeness stage of a fresh item.
    Ripeness, "ripeness", {
        Unripe => ("unripe", "Unripe"),
        Ripe => ("ripe", "Ripe"),
        Overripe => ("overripe", "Overripe"),
        Rotten => ("rotten", "Rotten"),
    }
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,

    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub brand: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Category>,

    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<Location>,

    #[serde(
        rename = "type",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub confection: Option<ConfectionType>,

    #[serde(
        rename = "status",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub ripeness: Option<Ripeness>,

    #[serde(
        default,
        deserialize_with = "null_as_false",
        skip_serializing_if = "is_false"
    )]
    pub is_opened: bool,

    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration_date: Option<NaiveDate>,

    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_checked_at: Option<DateTime<Utc>>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brand: None,
            category: None,
            location: None,
            confection: None,
            ripeness: None,
            is_opened: false,
            expiration_date: None,
            last_checked_at: None,
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_confection(mut self, confection: ConfectionType) -> Self {
        self.confection = Some(confection);
        self
    }

    pub fn with_ripeness(mut self, ripeness: Ripeness) -> Self {
        self.ripeness = Some(ripeness);
        self
    }

    pub fn with_expiration(mut self, date: NaiveDate) -> Self {
        self.expiration_date = Some(date);
        self
    }

    pub fn is_fresh(&self) -> bool {
        self.confection == Some(ConfectionType::Fresh)
    }
}

impl AsRef<Ingredient> for Ingredient {
    fn as_ref(&self) -> &Ingredient {
        self
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Reads a string field, treating `null` and blank strings as absent and
/// parsing anything else with `FromStr`.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
