//! # API Facade
//!
//! The single entry point for larder operations, whatever the UI. It
//! dispatches to the command layer, parses user-typed indexes, and returns
//! `Result<CmdResult>`. No printing, no business logic.
//!
//! `LarderApi<S: DataStore>` is generic over the storage backend:
//! `LarderApi<FileStore>` in the binary, `LarderApi<InMemoryStore>` in tests.
//!
//! Editing goes through two calls: [`LarderApi::begin_edit`] hands back an
//! [`EditSession`] for the UI to drive (prompts included), and
//! [`LarderApi::save_edit`] writes it back.

use crate::commands;
use crate::error::Result;
use crate::index::parse_index;
use crate::lifecycle::EditSession;
use crate::lookup::ProductLookup;
use crate::store::DataStore;
use chrono::{DateTime, Utc};

pub struct LarderApi<S: DataStore> {
    store: S,
    paths: commands::LarderPaths,
    config: LarderConfig,
}

impl<S: DataStore> LarderApi<S> {
    pub fn new(store: S, paths: commands::LarderPaths, config: LarderConfig) -> Self {
        Self {
            store,
            paths,
            config,
        }
    }

    pub fn add_ingredient(&mut self, new: NewIngredient, now: DateTime<Utc>) -> Result<CmdResult> {
        commands::add::run(&mut self.store, new, now.date_naive())
    }

    pub fn list_ingredients(&self, filter: &IngredientFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter, self.config.recent_limit)
    }

    pub fn expiring(&self, now: DateTime<Utc>) -> Result<CmdResult> {
        commands::expiring::run(
            &self.store,
            self.config.expiring_threshold_days,
            now.date_naive(),
        )
    }

    pub fn view_ingredients<I: AsRef<str>>(&self, indexes: &[I]) -> Result<CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::view::run(&self.store, &indexes)
    }

    pub fn delete_ingredients<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::delete::run(&mut self.store, &indexes)
    }

    pub fn begin_edit(&self, index: &str, now: DateTime<Utc>) -> Result<EditSession> {
        let index = parse_index(index)?;
        commands::modify::begin(&self.store, index, now, self.config.relative_to)
    }

    pub fn save_edit(&mut self, session: &EditSession) -> Result<CmdResult> {
        commands::modify::run(&mut self.store, session)
    }

    pub fn scan<L: ProductLookup + ?Sized>(&mut self, lookup: &L, code: &str) -> Result<CmdResult> {
        commands::scan::run(&mut self.store, lookup, code)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn settings(&self) -> &LarderConfig {
        &self.config
    }

    pub fn paths(&self) -> &commands::LarderPaths {
        &self.paths
    }
}

fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<usize>> {
    inputs.iter().map(|s| parse_index(s.as_ref())).collect()
}

pub use crate::commands::add::{ExpirationInput, NewIngredient};
pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::{IngredientFilter, ListView};
pub use crate::commands::{CmdMessage, CmdResult, LarderPaths, MessageLevel};
pub use crate::config::LarderConfig;
