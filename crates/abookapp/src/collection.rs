//! # Collections
//!
//! A [`Collection`] is a keyed, insertion-ordered aggregate that owns its
//! items exclusively. The key is derived from the item itself through
//! [`Keyed`], so an entry can never be filed under a name that differs from
//! its own.
//!
//! - [`AddressBook`]: records keyed by name.
//! - [`NoteStore`]: notes keyed by title, also addressable by 1-based position.
//!
//! ## Ordering
//!
//! Items keep the order they were first added in. Overwriting an existing key
//! replaces the item in place, removing an item shifts the later ones up.
//! Search results and pages follow this order, which makes pagination
//! deterministic.
//!
//! ## Duplicate Keys
//!
//! [`Collection::add`] overwrites and hands back the previous item.
//! [`Collection::try_add`] refuses an existing key instead. Callers that take
//! user input should use `try_add` unless the user asked to overwrite.
//!
//! ## Pagination
//!
//! [`Collection::paginate`] yields `ceil(len / page_size)` pages and never a
//! trailing empty one. It borrows the collection, so calling it again always
//! starts over from the current state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::slice;
use thiserror::Error;

use crate::error::{AbookError, Result};
use crate::field::Schema;
use crate::model::{Note, Record};

/// Items that carry their own collection key.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Record {
    fn key(&self) -> &str {
        self.name()
    }
}

impl Keyed for Note {
    fn key(&self) -> &str {
        self.title()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("duplicate key: {0}")]
pub struct DuplicateKey(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    items: Vec<T>,
}

pub type AddressBook = Collection<Record>;
pub type NoteStore = Collection<Note>;

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Keyed::key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Zero-based position of `key`.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Mutable access for in-place edits. Re-keying goes through
    /// [`Collection::rename`] instead.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.key() == key)
    }

    /// Inserts `item`, overwriting any item with the same key in place.
    pub fn add(&mut self, item: T) -> Option<T> {
        match self.position(item.key()) {
            Some(pos) => {
                tracing::warn!(key = item.key(), "overwriting existing entry");
                Some(std::mem::replace(&mut self.items[pos], item))
            }
            None => {
                self.items.push(item);
                None
            }
        }
    }

    /// Inserts `item` only if its key is not taken yet.
    pub fn try_add(&mut self, item: T) -> std::result::Result<(), DuplicateKey> {
        if self.contains(item.key()) {
            return Err(DuplicateKey(item.key().to_string()));
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the item under `key`. An absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let pos = self.position(key)?;
        Some(self.items.remove(pos))
    }

    /// 1-based position of `key`, as shown to users.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.position(key).map(|pos| pos + 1)
    }

    /// Item at the 1-based `index`.
    pub fn get_index(&self, index: usize) -> Option<&T> {
        index.checked_sub(1).and_then(|pos| self.items.get(pos))
    }

    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut T> {
        index.checked_sub(1).and_then(|pos| self.items.get_mut(pos))
    }

    pub fn remove_index(&mut self, index: usize) -> Option<T> {
        let pos = index.checked_sub(1)?;
        if pos < self.items.len() {
            Some(self.items.remove(pos))
        } else {
            None
        }
    }

    /// Lazily splits the collection into pages of `page_size` items.
    ///
    /// A `page_size` of 0 puts everything on one page.
    pub fn paginate(&self, page_size: usize) -> Pages<'_, T> {
        let size = effective_page_size(page_size, self.items.len());
        Pages {
            chunks: self.items.chunks(size),
        }
    }

    pub fn page_count(&self, page_size: usize) -> usize {
        self.paginate(page_size).len()
    }

    /// The 1-based page `number`, empty if out of range.
    pub fn page(&self, number: usize, page_size: usize) -> &[T] {
        number
            .checked_sub(1)
            .and_then(|n| self.paginate(page_size).nth(n))
            .unwrap_or(&[])
    }
}

impl Collection<Record> {
    /// Re-keys the record `old` as `new`, keeping its position.
    pub fn rename(&mut self, schema: &Schema, old: &str, new: &str) -> Result<()> {
        let name = schema.name.check(new)?;
        if !self.contains(old) {
            return Err(AbookError::ContactNotFound(old.to_string()));
        }
        if name.value() != old && self.contains(name.value()) {
            return Err(AbookError::DuplicateContact(name.value().clone()));
        }
        let record = self
            .get_mut(old)
            .ok_or_else(|| AbookError::ContactNotFound(old.to_string()))?;
        record.set_name(name);
        Ok(())
    }
}

fn effective_page_size(page_size: usize, len: usize) -> usize {
    if page_size == 0 {
        len.max(1)
    } else {
        page_size
    }
}

/// Iterator over the pages of a collection.
#[derive(Debug, Clone)]
pub struct Pages<'a, T> {
    chunks: slice::Chunks<'a, T>,
}

impl<'a, T> Iterator for Pages<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<T> ExactSizeIterator for Pages<'_, T> {}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Keyed> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        for item in iter {
            collection.add(item);
        }
        collection
    }
}

// Persisted as a plain array in collection order.
impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(serializer)
    }
}

// Rebuilt through `add` so a file with repeated keys still yields unique keys.
impl<'de, T: Deserialize<'de> + Keyed> Deserialize<'de> for Collection<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
