//! # Abook Architecture
//!
//! Abook is a **UI-agnostic record library**: contacts and notes with validated
//! fields, birthday arithmetic, search and plain JSON persistence. The console
//! client in `crates/abook` is one possible UI on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/abook)                                   │
//! │  - Parses arguments, runs the interactive shell, renders    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the address book and the notes                      │
//! │  - Loads on open, flushes on save                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Takes raw strings, validates, mutates, queries           │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (field.rs, model.rs, collection.rs, query.rs)       │
//! │  Storage (store/)                                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing reads interactive input or writes to a
//! terminal. Retry-until-valid prompting belongs to the caller: every field
//! setter here is a pure validate-or-fail operation.
//!
//! ## Module Overview
//!
//! - [`field`]: Format rules and the validated [`field::Field`] value
//! - [`model`]: [`model::Record`] and [`model::Note`]
//! - [`collection`]: Keyed, insertion-ordered [`collection::Collection`]
//! - [`query`]: Substring search and birthday windows
//! - [`store`]: Snapshot persistence and the [`store::DataStore`] trait
//! - [`commands`]: Business operations
//! - [`api`]: The facade used by clients
//! - [`config`]: Configuration
//! - [`init`]: Path resolution and context bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod field;
pub mod init;
pub mod model;
pub mod query;
pub mod store;
