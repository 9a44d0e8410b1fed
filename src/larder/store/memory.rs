use super::DataStore;
use crate::error::{LarderError, Result};
use crate::model::Ingredient;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    ingredients: Vec<Ingredient>,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ingredients(ingredients: Vec<Ingredient>) -> Self {
        Self {
            ingredients,
            ..Self::default()
        }
    }

    /// Every subsequent `load_all` fails.
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Every subsequent `save_all` fails without touching the collection.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }
}

impl DataStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<Ingredient>> {
        if self.fail_reads {
            return Err(LarderError::Store("simulated read failure".to_string()));
        }
        Ok(self.ingredients.clone())
    }

    fn save_all(&mut self, ingredients: &[Ingredient]) -> Result<()> {
        if self.fail_writes {
            return Err(LarderError::Store("simulated write failure".to_string()));
        }
        self.ingredients = ingredients.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::dates::add_days;
    use crate::model::{Category, ConfectionType, Location, Ripeness};
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        today: NaiveDate,
    }

    impl StoreFixture {
        pub fn new(today: NaiveDate) -> Self {
            Self {
                store: InMemoryStore::new(),
                today,
            }
        }

        fn push(mut self, ingredient: Ingredient) -> Self {
            self.store.ingredients.push(ingredient);
            self
        }

        /// A fully described fridge item expiring `days` from today.
        pub fn with_complete(self, name: &str, days: i64) -> Self {
            let item = Ingredient::new(name)
                .with_category(Category::Dairy)
                .with_location(Location::Fridge)
                .with_confection(ConfectionType::Canned)
                .with_expiration(add_days(self.today, days));
            self.push(item)
        }

        /// An unripe fresh fruit on the counter expiring `days` from today.
        pub fn with_unripe(self, name: &str, days: i64) -> Self {
            let item = Ingredient::new(name)
                .with_category(Category::Fruit)
                .with_location(Location::Pantry)
                .with_confection(ConfectionType::Fresh)
                .with_ripeness(Ripeness::Unripe)
                .with_expiration(add_days(self.today, days));
            self.push(item)
        }

        /// A name-only record, as left behind by a barcode scan.
        pub fn with_scanned(self, name: &str) -> Self {
            self.push(Ingredient::new(name))
        }

        pub fn with(self, ingredient: Ingredient) -> Self {
            self.push(ingredient)
        }
    }
}
