//! # Storage Layer
//!
//! The [`DataStore`] trait lets the API facade load and flush its two
//! collections without knowing where they live.
//!
//! Persistence is snapshot based: the whole collection is written on save
//! and read back on start. There is no journal, so mutations made after the
//! last save are lost if the process dies.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON files in one data directory.
//! - [`memory::InMemoryStore`]: keeps snapshots in memory, for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── contacts.json   # AddressBook, array of records
//! ├── notes.json      # NoteStore, array of notes
//! └── abook.toml      # optional config
//! ```
//!
//! Files carry no format version. A change to the record layout makes older
//! files fail to parse rather than silently migrate.

use crate::collection::{AddressBook, NoteStore};
use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod snapshot;

pub trait DataStore {
    fn load_contacts(&self) -> Result<AddressBook>;
    fn save_contacts(&mut self, book: &AddressBook) -> Result<()>;
    fn load_notes(&self) -> Result<NoteStore>;
    fn save_notes(&mut self, notes: &NoteStore) -> Result<()>;
}
