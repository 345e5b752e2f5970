//! # Queries
//!
//! Read-only views over a [`Collection`]: free-text search and the birthday
//! window. Neither ever fails; no match is an empty result.
//!
//! ## Search
//!
//! Matching is substring based and case-insensitive on text:
//!
//! - A [`Record`] matches when the query is part of its name (case-folded) or
//!   part of any phone's raw value as typed. Phones are compared without
//!   case folding, the query is only trimmed.
//! - A [`Note`] matches on its title, body or any tag (all case-folded).
//!
//! Leading and trailing whitespace in the query is dropped before matching,
//! so a blank query behaves like an empty one. An empty query is a substring
//! of everything and returns the whole collection. Results keep collection
//! order.
//!
//! ## Birthday Window
//!
//! [`Collection::birthday_window`] returns records whose next birthday is in
//! `[0, days)` days from `today`. Records without a birthday are skipped.

use chrono::NaiveDate;

use crate::collection::{Collection, Keyed};
use crate::model::{Note, Record};

/// Items that can be matched against a search query.
pub trait Searchable {
    /// `query` is trimmed, `folded` is the same query lowercased.
    fn matches(&self, query: &str, folded: &str) -> bool;
}

impl Searchable for Record {
    fn matches(&self, query: &str, folded: &str) -> bool {
        self.name().to_lowercase().contains(folded)
            || self.phones().iter().any(|phone| phone.raw().contains(query))
    }
}

impl Searchable for Note {
    fn matches(&self, _query: &str, folded: &str) -> bool {
        self.title().to_lowercase().contains(folded)
            || self.body().to_lowercase().contains(folded)
            || self.tags().any(|tag| tag.to_lowercase().contains(folded))
    }
}

impl<T: Keyed + Searchable> Collection<T> {
    pub fn search(&self, query: &str) -> Vec<&T> {
        let query = query.trim();
        let folded = query.to_lowercase();
        self.iter()
            .filter(|item| item.matches(query, &folded))
            .collect()
    }
}

impl Collection<Record> {
    pub fn birthday_window(&self, days: i64, today: NaiveDate) -> Vec<&Record> {
        self.iter()
            .filter(|record| in_window(record.days_to_birthday(today), days))
            .collect()
    }

    /// Records in the window paired with their distance, nearest first.
    /// Ties keep collection order.
    pub fn upcoming_birthdays(&self, days: i64, today: NaiveDate) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .iter()
            .filter_map(|record| {
                let left = record.days_to_birthday(today)?;
                in_window(Some(left), days).then_some((record, left))
            })
            .collect();
        upcoming.sort_by_key(|(_, left)| *left);
        upcoming
    }
}

impl Collection<Note> {
    pub fn with_tag(&self, tag: &str) -> Vec<&Note> {
        self.iter().filter(|note| note.has_tag(tag)).collect()
    }
}

fn in_window(left: Option<i64>, days: i64) -> bool {
    matches!(left, Some(left) if (0..days).contains(&left))
}
