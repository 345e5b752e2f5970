//! Note commands.
//!
//! Notes are addressed by a [`NoteSelector`]: a 1-based position as shown by
//! `list`, or the exact title. Input written as a positive integer is a
//! position, anything else a title. A note whose title is a number stays
//! reachable: an exact title match wins over the position.

use crate::collection::{DuplicateKey, NoteStore};
use crate::commands::{CmdMessage, CmdResult, IndexedNote};
use crate::error::{AbookError, Result};
use crate::field::Schema;
use crate::model::Note;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSelector {
    Index(usize),
    Title(String),
}

impl From<&str> for NoteSelector {
    fn from(s: &str) -> Self {
        let s = s.trim();
        match s.parse::<usize>() {
            Ok(index) if index > 0 && index.to_string() == s => NoteSelector::Index(index),
            _ => NoteSelector::Title(s.to_string()),
        }
    }
}

impl FromStr for NoteSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(NoteSelector::from(s))
    }
}

impl fmt::Display for NoteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteSelector::Index(index) => write!(f, "#{}", index),
            NoteSelector::Title(title) => f.write_str(title),
        }
    }
}

fn resolve(notes: &NoteStore, selector: &NoteSelector) -> Result<usize> {
    let index = match selector {
        NoteSelector::Index(index) => notes
            .index_of(&index.to_string())
            .or_else(|| notes.get_index(*index).map(|_| *index)),
        NoteSelector::Title(title) => notes.index_of(title),
    };
    index.ok_or_else(|| AbookError::NoteNotFound(selector.to_string()))
}

fn indexed(notes: &NoteStore, index: usize) -> Option<IndexedNote> {
    notes.get_index(index).map(|note| IndexedNote {
        index,
        note: note.clone(),
    })
}

pub fn add<T: AsRef<str>>(
    notes: &mut NoteStore,
    schema: &Schema,
    title: &str,
    body: &str,
    tags: &[T],
) -> Result<CmdResult> {
    let mut note = Note::new(schema, title, body)?;
    note.add_tags(schema, tags)?;
    let title = note.title().to_string();
    notes
        .try_add(note)
        .map_err(|DuplicateKey(key)| AbookError::DuplicateNote(key))?;

    let mut result = CmdResult::default();
    if let Some(entry) = notes.index_of(&title).and_then(|i| indexed(notes, i)) {
        result.notes.push(entry);
    }
    Ok(result.with_message(CmdMessage::success(format!("Note added: {}", title))))
}

/// All notes, or only those carrying `tag`.
pub fn list(notes: &NoteStore, tag: Option<&str>) -> Result<CmdResult> {
    let listed: Vec<IndexedNote> = notes
        .iter()
        .enumerate()
        .filter(|(_, note)| tag.map_or(true, |tag| note.has_tag(tag)))
        .map(|(i, note)| IndexedNote {
            index: i + 1,
            note: note.clone(),
        })
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        let message = match tag {
            Some(tag) => format!("No notes tagged '{}'", tag.trim()),
            None => "No notes yet".to_string(),
        };
        result.add_message(CmdMessage::info(message));
    }
    Ok(result.with_notes(listed))
}

pub fn view(notes: &NoteStore, selector: &NoteSelector) -> Result<CmdResult> {
    let index = resolve(notes, selector)?;
    Ok(CmdResult::default().with_notes(indexed(notes, index).into_iter().collect()))
}

/// Replaces the body of a note.
pub fn edit(notes: &mut NoteStore, selector: &NoteSelector, body: &str) -> Result<CmdResult> {
    let index = resolve(notes, selector)?;
    let note = notes
        .get_index_mut(index)
        .ok_or_else(|| AbookError::NoteNotFound(selector.to_string()))?;
    note.set_body(body);
    let message = CmdMessage::success(format!("Note updated: {}", note.title()));
    Ok(CmdResult::default()
        .with_notes(indexed(notes, index).into_iter().collect())
        .with_message(message))
}

pub fn delete(notes: &mut NoteStore, selector: &NoteSelector) -> Result<CmdResult> {
    let index = resolve(notes, selector)?;
    let note = notes
        .remove_index(index)
        .ok_or_else(|| AbookError::NoteNotFound(selector.to_string()))?;
    let message = CmdMessage::success(format!("Note deleted: {}", note.title()));
    Ok(CmdResult::default()
        .with_notes(vec![IndexedNote { index, note }])
        .with_message(message))
}

/// Appends tags. Either all tags are valid and added, or none is.
pub fn tag<T: AsRef<str>>(
    notes: &mut NoteStore,
    schema: &Schema,
    selector: &NoteSelector,
    tags: &[T],
) -> Result<CmdResult> {
    let index = resolve(notes, selector)?;
    let note = notes
        .get_index_mut(index)
        .ok_or_else(|| AbookError::NoteNotFound(selector.to_string()))?;
    let added = note.add_tags(schema, tags)?;
    let message = match added {
        0 => CmdMessage::warning("No tags given"),
        1 => CmdMessage::success(format!("1 tag added to {}", note.title())),
        n => CmdMessage::success(format!("{} tags added to {}", n, note.title())),
    };
    Ok(CmdResult::default()
        .with_notes(indexed(notes, index).into_iter().collect())
        .with_message(message))
}

pub fn search(notes: &NoteStore, query: &str) -> Result<CmdResult> {
    let matches: Vec<IndexedNote> = notes
        .search(query)
        .into_iter()
        .filter_map(|note| notes.index_of(note.title()).and_then(|i| indexed(notes, i)))
        .collect();
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No notes match '{}'",
            query.trim()
        )));
    }
    Ok(result.with_notes(matches))
}
