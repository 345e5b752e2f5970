//! # Command Layer
//!
//! The business logic of abook. Each function takes the collection it works
//! on plus its arguments and returns a [`CmdResult`].
//!
//! Commands never print, prompt or decide exit codes. They operate on
//! [`Record`]s and [`Note`]s held by the caller (the API facade) and describe
//! the outcome with structured data and leveled messages. A lookup miss is an
//! `Err(ContactNotFound | NoteNotFound)`, bad input is an
//! `Err(Validation(..))`, and in both cases the collection is left as it was.
//!
//! ## Command Modules
//!
//! - [`contacts`]: create, edit and query address book records
//! - [`notes`]: create, edit, tag and query notes
//!
//! ## Testing Strategy
//!
//! Command tests build collections directly and check both the returned
//! `CmdResult` and the collection state afterwards.

use crate::model::{Note, Record};
use chrono::NaiveDate;
use serde::Serialize;

pub mod contacts;
pub mod notes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A note paired with its 1-based position in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedNote {
    pub index: usize,
    pub note: Note,
}

/// One line of a birthday listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayLine {
    pub name: String,
    pub date: NaiveDate,
    pub days: i64,
    /// Age the contact turns on `date`.
    pub turns: Option<u32>,
}

/// Position of a listed page within the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub number: usize,
    pub count: usize,
    pub total: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub records: Vec<Record>,
    pub notes: Vec<IndexedNote>,
    pub days: Vec<BirthdayLine>,
    pub page: Option<PageInfo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn with_notes(mut self, notes: Vec<IndexedNote>) -> Self {
        self.notes = notes;
        self
    }
}
