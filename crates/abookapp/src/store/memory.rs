use super::DataStore;
use crate::collection::{AddressBook, NoteStore};
use crate::error::Result;

/// Keeps the last saved snapshots in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    contacts: AddressBook,
    notes: NoteStore,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful save calls, contacts and notes counted apart.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        Ok(self.contacts.clone())
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        self.contacts = book.clone();
        self.saves += 1;
        Ok(())
    }

    fn load_notes(&self) -> Result<NoteStore> {
        Ok(self.notes.clone())
    }

    fn save_notes(&mut self, notes: &NoteStore) -> Result<()> {
        self.notes = notes.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::field::Schema;
    use crate::model::{Note, Record};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        schema: Schema,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                schema: Schema::default(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let record = Record::new(&self.schema, &format!("Contact {}", i + 1)).unwrap();
                self.store.contacts.add(record);
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phone: &str, birthday: Option<&str>) -> Self {
            let mut record = Record::new(&self.schema, name).unwrap();
            record.add_phone(&self.schema, phone).unwrap();
            if let Some(birthday) = birthday {
                record.set_birthday(&self.schema, birthday).unwrap();
            }
            self.store.contacts.add(record);
            self
        }

        pub fn with_note(mut self, title: &str, body: &str, tags: &[&str]) -> Self {
            let mut note = Note::new(&self.schema, title, body).unwrap();
            note.add_tags(&self.schema, tags.iter().copied()).unwrap();
            self.store.notes.add(note);
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
