use super::{snapshot, DataStore};
use crate::collection::{AddressBook, NoteStore};
use crate::error::Result;
use std::path::{Path, PathBuf};

pub const CONTACTS_FILE: &str = "contacts.json";
pub const NOTES_FILE: &str = "notes.json";

/// Snapshot files under a single data directory.
///
/// The directory is created lazily on the first save; loading from a
/// directory that does not exist yet yields empty collections.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.root.join(CONTACTS_FILE)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.root.join(NOTES_FILE)
    }
}

impl DataStore for FileStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        let book: AddressBook = snapshot::load(&self.contacts_path())?;
        tracing::debug!(count = book.len(), "contacts loaded");
        Ok(book)
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        snapshot::save(book, &self.contacts_path())?;
        tracing::debug!(count = book.len(), "contacts saved");
        Ok(())
    }

    fn load_notes(&self) -> Result<NoteStore> {
        let notes: NoteStore = snapshot::load(&self.notes_path())?;
        tracing::debug!(count = notes.len(), "notes loaded");
        Ok(notes)
    }

    fn save_notes(&mut self, notes: &NoteStore) -> Result<()> {
        snapshot::save(notes, &self.notes_path())?;
        tracing::debug!(count = notes.len(), "notes saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Schema;
    use crate::model::{Note, Record};
    use tempfile::tempdir;

    #[test]
    fn fresh_directory_loads_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("not-yet"));
        assert!(store.load_contacts().unwrap().is_empty());
        assert!(store.load_notes().unwrap().is_empty());
    }

    #[test]
    fn contacts_and_notes_live_in_separate_files() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        let schema = Schema::default();

        let mut book = AddressBook::new();
        book.add(Record::new(&schema, "Anna").unwrap());
        store.save_contacts(&book).unwrap();
        assert!(store.contacts_path().exists());
        assert!(!store.notes_path().exists());

        let mut notes = NoteStore::new();
        notes.add(Note::new(&schema, "Todo", "call Anna").unwrap());
        store.save_notes(&notes).unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(reopened.load_contacts().unwrap(), book);
        assert_eq!(reopened.load_notes().unwrap(), notes);
    }
}
