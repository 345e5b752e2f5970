//! # Domain Model: Records and Notes
//!
//! A [`Record`] is one person: exactly one name, any number of phones and at
//! most one address, birthday and email. A [`Note`] is a titled body of text
//! with an append-only list of tags.
//!
//! Both are plain owned values. They live inside a
//! [`Collection`](crate::collection::Collection), which owns them exclusively
//! and keys them by name (records) or title (notes).
//!
//! ## Mutation
//!
//! Every setter that takes raw input validates it against the [`Schema`]
//! first and only mutates on success. Phones keep their insertion order and
//! duplicates are allowed.
//!
//! ## Birthday Distance
//!
//! [`Record::days_to_birthday`] returns the number of days from `today` to the
//! next occurrence of the birthday's month and day, counting `today` itself:
//!
//! - Birthday today → `Some(0)`. Zero is a real answer, not "no birthday".
//! - Birthday already passed this year → next year's occurrence.
//! - Feb 29 birthdays are celebrated on **Feb 28** in non-leap years.
//! - No birthday set → `None`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::field::{
    Address, Birthday, Email, Field, FieldRule, Name, Phone, Schema, Tag, ValidationError,
    BIRTHDAY, BIRTHDAY_DMY, PHONE, PHONE_UA,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    address: Option<Address>,
    #[serde(default)]
    birthday: Option<Birthday>,
    #[serde(default)]
    email: Option<Email>,
}

impl Record {
    pub fn new(schema: &Schema, name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: schema.name.check(name)?,
            phones: Vec::new(),
            address: None,
            birthday: None,
            email: None,
        })
    }

    pub fn name(&self) -> &str {
        self.name.value()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// Re-key the record. Only the owning collection should call this, see
    /// [`Collection::rename`](crate::collection::Collection::rename).
    pub(crate) fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    pub fn add_phone(&mut self, schema: &Schema, raw: &str) -> Result<(), ValidationError> {
        let phone = schema.phone.check(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes every phone whose raw or normalized form equals `raw`.
    /// Returns how many were removed.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|phone| !phone_matches(phone, raw));
        before - self.phones.len()
    }

    /// Replaces the first phone matching `old` with a validated `new`.
    ///
    /// `new` is validated before anything else. Returns `Ok(false)` and leaves
    /// the record unchanged when no phone matches `old`.
    pub fn edit_phone(
        &mut self,
        schema: &Schema,
        old: &str,
        new: &str,
    ) -> Result<bool, ValidationError> {
        let replacement = schema.phone.check(new)?;
        match self.phones.iter_mut().find(|phone| phone_matches(phone, old)) {
            Some(slot) => {
                *slot = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Drops all phones and keeps a single validated one.
    pub fn replace_phones(&mut self, schema: &Schema, raw: &str) -> Result<(), ValidationError> {
        let phone = schema.phone.check(raw)?;
        self.phones = vec![phone];
        Ok(())
    }

    pub fn has_phone(&self, raw: &str) -> bool {
        self.phones.iter().any(|phone| phone_matches(phone, raw))
    }

    pub fn clear_phones(&mut self) -> usize {
        std::mem::take(&mut self.phones).len()
    }

    pub fn set_birthday(&mut self, schema: &Schema, raw: &str) -> Result<(), ValidationError> {
        schema.birthday.assign(&mut self.birthday, raw)?;
        Ok(())
    }

    pub fn set_email(&mut self, schema: &Schema, raw: &str) -> Result<(), ValidationError> {
        schema.email.assign(&mut self.email, raw)?;
        Ok(())
    }

    pub fn set_address(&mut self, schema: &Schema, raw: &str) -> Result<(), ValidationError> {
        schema.address.assign(&mut self.address, raw)?;
        Ok(())
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    pub fn clear_email(&mut self) {
        self.email = None;
    }

    pub fn clear_address(&mut self) {
        self.address = None;
    }

    /// Date of the next birthday on or after `today`.
    pub fn next_birthday(&self, today: NaiveDate) -> Option<NaiveDate> {
        let born = *self.birthday.as_ref()?.value();
        let this_year = occurrence_in(today.year(), born)?;
        if this_year >= today {
            Some(this_year)
        } else {
            occurrence_in(today.year() + 1, born)
        }
    }

    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.next_birthday(today)
            .map(|next| (next - today).num_days())
    }

    /// Re-checks every field of a record read back from a snapshot.
    ///
    /// Phones and birthdays pass under any of their formats, so a contact
    /// saved before the format setting changed still loads.
    pub fn revalidate(&self, schema: &Schema) -> Result<(), ValidationError> {
        schema.name.recheck(&self.name)?;
        for phone in &self.phones {
            recheck_any(&[schema.phone, PHONE, PHONE_UA], phone)?;
        }
        if let Some(birthday) = &self.birthday {
            recheck_any(&[schema.birthday, BIRTHDAY, BIRTHDAY_DMY], birthday)?;
        }
        if let Some(email) = &self.email {
            schema.email.recheck(email)?;
        }
        if let Some(address) = &self.address {
            schema.address.recheck(address)?;
        }
        Ok(())
    }

    /// Age in full years on `today`, `None` without a birthday or for
    /// birthdays in the future.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let born = *self.birthday.as_ref()?.value();
        today.years_since(born)
    }
}

/// Passes if any rule accepts `field`, otherwise reports the first rule's error.
fn recheck_any<T: PartialEq>(rules: &[FieldRule<T>], field: &Field<T>) -> Result<(), ValidationError> {
    let mut first = None;
    for rule in rules {
        match rule.recheck(field) {
            Ok(()) => return Ok(()),
            Err(err) => {
                first.get_or_insert(err);
            }
        }
    }
    first.map_or(Ok(()), Err)
}

fn phone_matches(phone: &Phone, raw: &str) -> bool {
    let raw = raw.trim();
    phone.raw() == raw || phone.value() == raw
}

/// The birthday's month and day in `year`, with Feb 29 moved to Feb 28 when
/// `year` is not a leap year.
fn occurrence_in(year: i32, born: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, born.month(), 28))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: Name,
    #[serde(default)]
    body: String,
    /// Append-only, duplicates kept.
    #[serde(default)]
    tags: Vec<Tag>,
}

impl Note {
    pub fn new(schema: &Schema, title: &str, body: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            title: schema.name.check(title)?,
            body: body.into(),
            tags: Vec::new(),
        })
    }

    pub fn title(&self) -> &str {
        self.title.value()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|tag| tag.value().as_str())
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Validates every tag first, then appends them all. On error no tag is
    /// added.
    pub fn add_tags<I, T>(&mut self, schema: &Schema, tags: I) -> Result<usize, ValidationError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let checked = tags
            .into_iter()
            .map(|tag| schema.tag.check(tag.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let added = checked.len();
        self.tags.extend(checked);
        Ok(added)
    }

    /// Re-checks the title and tags of a note read back from a snapshot.
    pub fn revalidate(&self, schema: &Schema) -> Result<(), ValidationError> {
        schema.name.recheck(&self.title)?;
        for tag in &self.tags {
            schema.tag.recheck(tag)?;
        }
        Ok(())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().trim_start_matches('#');
        self.tags().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
