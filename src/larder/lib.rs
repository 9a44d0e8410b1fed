//! # Larder Architecture
//!
//! Larder is a **UI-agnostic food-inventory library**: it tracks what is in
//! the fridge, pantry and freezer, and when each item goes off. The `larder`
//! binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, parses display indexes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user operation, returns CmdResult         │
//! │  - Built on lifecycle, queries and dates                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load_all / save_all                     │
//! │  - FileStore (ingredients.json), InMemoryStore (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Lifecycle Engine
//!
//! Freezing, ripening and opening each move the expiration date once per
//! edit and move it back when undone. [`lifecycle`] models an edit as an
//! [`lifecycle::EditSession`] whose operations propose a
//! [`lifecycle::Transition`]; the UI shows the attached prompt and either
//! commits or cancels it.
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code never prints, never exits and never reads the
//! clock on its own: "now" is always a parameter. The only I/O is the
//! `FileStore`, which sits behind the `DataStore` trait.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for each operation
//! - [`lifecycle`]: edit sessions and expiration adjustments
//! - [`queries`]: expiring-soon, missing-data, recent and filter views
//! - [`dates`]: estimate labels and calendar arithmetic
//! - [`model`]: `Ingredient` and its vocabularies
//! - [`migrate`]: upgrades of older persisted records
//! - [`store`]: storage abstraction and implementations
//! - [`lookup`]: barcode product lookup
//! - [`index`]: 1-based display indexes
//! - [`config`]: configuration
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dates;
pub mod error;
pub mod index;
pub mod init;
pub mod lifecycle;
pub mod lookup;
pub mod migrate;
pub mod model;
pub mod queries;
pub mod store;
