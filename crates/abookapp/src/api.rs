//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UIs. It owns the loaded collections and the store they
//! came from.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns state**: the [`AddressBook`] and [`NoteStore`] loaded on [`AbookApi::open`]
//! - **Dispatches** to the matching function in [`commands`]
//! - **Tracks changes**: every successful mutating call marks the API dirty
//! - **Flushes** both collections through the [`DataStore`] on [`AbookApi::save`]
//!
//! Business logic belongs in `commands/*.rs`, presentation in the UI.
//!
//! ## Generic Over DataStore
//!
//! `AbookApi<S: DataStore>` is generic over the storage backend:
//! - Production: `AbookApi<FileStore>`
//! - Testing: `AbookApi<InMemoryStore>`

use crate::collection::{AddressBook, Keyed, NoteStore};
use crate::commands::contacts::{self, ContactField, NewContact};
use crate::commands::notes::{self, NoteSelector};
use crate::commands::CmdResult;
use crate::error::{AbookError, Result};
use crate::field::{Schema, ValidationError};
use crate::store::DataStore;
use chrono::NaiveDate;

pub struct AbookApi<S: DataStore> {
    store: S,
    schema: Schema,
    contacts: AddressBook,
    notes: NoteStore,
    dirty: bool,
}

impl<S: DataStore> AbookApi<S> {
    /// Loads both collections from `store` and re-checks every entry
    /// against `schema`.
    pub fn open(store: S, schema: Schema) -> Result<Self> {
        let contacts = store.load_contacts()?;
        let notes = store.load_notes()?;
        for record in &contacts {
            record.revalidate(&schema).map_err(|source| invalid(record, source))?;
        }
        for note in &notes {
            note.revalidate(&schema).map_err(|source| invalid(note, source))?;
        }
        tracing::debug!(
            contacts = contacts.len(),
            notes = notes.len(),
            "address book opened"
        );
        Ok(Self {
            store,
            schema,
            contacts,
            notes,
            dirty: false,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn contacts(&self) -> &AddressBook {
        &self.contacts
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes both collections and clears the dirty flag.
    pub fn save(&mut self) -> Result<()> {
        self.store.save_contacts(&self.contacts)?;
        self.store.save_notes(&self.notes)?;
        self.dirty = false;
        Ok(())
    }

    /// Saves only when something changed. Returns whether a write happened.
    pub fn save_if_dirty(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    fn edit_contacts<F>(&mut self, op: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut AddressBook, &Schema) -> Result<CmdResult>,
    {
        let result = op(&mut self.contacts, &self.schema)?;
        self.dirty = true;
        Ok(result)
    }

    fn edit_notes<F>(&mut self, op: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut NoteStore, &Schema) -> Result<CmdResult>,
    {
        let result = op(&mut self.notes, &self.schema)?;
        self.dirty = true;
        Ok(result)
    }

    // --- Contacts ---

    pub fn create_contact(&mut self, input: NewContact) -> Result<CmdResult> {
        self.edit_contacts(|book, schema| contacts::create(book, schema, input))
    }

    pub fn add_field(&mut self, name: &str, field: ContactField, value: &str) -> Result<CmdResult> {
        self.edit_contacts(|book, schema| contacts::add_field(book, schema, name, field, value))
    }

    pub fn clear_field(&mut self, name: &str, field: ContactField) -> Result<CmdResult> {
        self.edit_contacts(|book, _| contacts::clear_field(book, name, field))
    }

    pub fn change_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        self.edit_contacts(|book, schema| contacts::change_phone(book, schema, name, phone))
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        self.edit_contacts(|book, schema| contacts::edit_phone(book, schema, name, old, new))
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        self.edit_contacts(|book, _| contacts::remove_phone(book, name, phone))
    }

    pub fn phones(&self, name: &str) -> Result<CmdResult> {
        contacts::phones(&self.contacts, name)
    }

    pub fn view_contact(&self, name: &str) -> Result<CmdResult> {
        contacts::view(&self.contacts, name)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        self.edit_contacts(|book, _| contacts::delete(book, name))
    }

    pub fn rename_contact(&mut self, old: &str, new: &str) -> Result<CmdResult> {
        self.edit_contacts(|book, schema| contacts::rename(book, schema, old, new))
    }

    pub fn list_contacts(&self, page: usize, page_size: usize) -> Result<CmdResult> {
        contacts::list(&self.contacts, page, page_size)
    }

    pub fn search_contacts(&self, query: &str) -> Result<CmdResult> {
        contacts::search(&self.contacts, query)
    }

    pub fn birthday(&self, name: &str, today: NaiveDate) -> Result<CmdResult> {
        contacts::birthday(&self.contacts, name, today)
    }

    pub fn birthdays(&self, days: i64, today: NaiveDate) -> Result<CmdResult> {
        contacts::birthdays(&self.contacts, days, today)
    }

    // --- Notes ---

    pub fn add_note<T: AsRef<str>>(&mut self, title: &str, body: &str, tags: &[T]) -> Result<CmdResult> {
        self.edit_notes(|store, schema| notes::add(store, schema, title, body, tags))
    }

    pub fn list_notes(&self, tag: Option<&str>) -> Result<CmdResult> {
        notes::list(&self.notes, tag)
    }

    pub fn view_note(&self, selector: &str) -> Result<CmdResult> {
        notes::view(&self.notes, &NoteSelector::from(selector))
    }

    pub fn edit_note(&mut self, selector: &str, body: &str) -> Result<CmdResult> {
        let selector = NoteSelector::from(selector);
        self.edit_notes(|store, _| notes::edit(store, &selector, body))
    }

    pub fn delete_note(&mut self, selector: &str) -> Result<CmdResult> {
        let selector = NoteSelector::from(selector);
        self.edit_notes(|store, _| notes::delete(store, &selector))
    }

    pub fn tag_note<T: AsRef<str>>(&mut self, selector: &str, tags: &[T]) -> Result<CmdResult> {
        let selector = NoteSelector::from(selector);
        self.edit_notes(|store, schema| notes::tag(store, schema, &selector, tags))
    }

    pub fn search_notes(&self, query: &str) -> Result<CmdResult> {
        notes::search(&self.notes, query)
    }
}

fn invalid<T: Keyed>(entry: &T, source: ValidationError) -> AbookError {
    AbookError::InvalidEntry {
        key: entry.key().to_string(),
        source,
    }
}
