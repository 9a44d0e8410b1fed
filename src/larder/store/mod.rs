//! # Storage Layer
//!
//! The ingredient collection is persisted as a whole: every write replaces
//! the full list, and every read returns the full list in insertion order.
//! The [`DataStore`] trait keeps the command layer independent of where that
//! list lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - The collection is one JSON array in `ingredients.json`
//!   - Writes go to a temporary file that is renamed over the old one, so a
//!     failed write leaves the previous collection intact
//!   - Records in older shapes are upgraded on read and written straight back
//!     (see [`crate::migrate`])
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Can be told to fail reads or writes to exercise error paths
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── ingredients.json    # The collection (JSON array)
//! └── config.json         # Settings
//! ```
//!
//! There is no locking: the read-modify-write cycle assumes one editor at a
//! time.

use crate::error::Result;
use crate::model::Ingredient;

pub mod fs;
pub mod memory;

/// Abstract interface for the ingredient collection.
pub trait DataStore {
    /// Load the full collection. A store that was never written is empty.
    fn load_all(&self) -> Result<Vec<Ingredient>>;

    /// Replace the full collection.
    fn save_all(&mut self, ingredients: &[Ingredient]) -> Result<()>;
}
