//! # Validated Fields
//!
//! Every scalar attached to a record (name, phone, birthday, email, address,
//! note tag) goes through the same pipeline:
//!
//! ```text
//! raw input ──trim──▶ predicate ──▶ parser ──▶ Field { raw, value }
//!                        │             │
//!                        └─────┬───────┘
//!                              ▼
//!                       ValidationError
//! ```
//!
//! A [`FieldRule`] is a plain value, a `(predicate, parser)` pair plus a label
//! and the error kind it reports. There is no type per field: a phone and an
//! email are both `Field<String>`, they just went through different rules.
//! Rules with more than one accepted format (phones, birthdays) are picked at
//! runtime from configuration through [`Schema`].
//!
//! ## Invariant
//!
//! A [`Field`] can only be built by [`FieldRule::check`], so its value always
//! satisfies the rule it was checked against. Assigning into an existing slot
//! with [`FieldRule::assign`] validates first and only writes on success: a
//! rejected value never replaces, clears or partially updates the old one.
//! Fields read back from disk skip `check`, so loading runs them through
//! [`FieldRule::recheck`].
//!
//! ## Formats
//!
//! | Rule | Accepts | Normalized value |
//! |------|---------|------------------|
//! | [`NAME`] | any non-empty text | trimmed text |
//! | [`ADDRESS`] | any non-empty text | trimmed text |
//! | [`PHONE`] | `+CC(AAA)NNN-NN-NN`, 10+ digits, optional separators | `+` and digits |
//! | [`PHONE_UA`] | `+380XXXXXXXXX` | `+380XXXXXXXXX` |
//! | [`BIRTHDAY`] | `YYYY-MM-DD` | calendar date |
//! | [`BIRTHDAY_DMY`] | `DD-MM-YYYY` | calendar date |
//! | [`EMAIL`] | `local@domain.tld`, TLD of 2+ letters | domain lowercased |
//! | [`TAG`] | a single word, optional leading `#` | word without `#` |

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// What kind of format rule was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationKind {
    InvalidPhone,
    InvalidDate,
    InvalidEmail,
    InvalidFormat,
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationKind::InvalidPhone => write!(f, "invalid phone"),
            ValidationKind::InvalidDate => write!(f, "invalid date"),
            ValidationKind::InvalidEmail => write!(f, "invalid email"),
            ValidationKind::InvalidFormat => write!(f, "invalid format"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {detail}")]
pub struct ValidationError {
    pub kind: ValidationKind,
    pub detail: String,
}

impl ValidationError {
    pub fn new(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

/// A value that passed its rule, together with the input it came from.
///
/// `raw` is the trimmed input as typed (used for display and phone search),
/// `value` is the parsed, normalized form (used for equality and arithmetic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field<T> {
    raw: String,
    value: T,
}

impl<T> Field<T> {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

pub type Name = Field<String>;
pub type Phone = Field<String>;
pub type Email = Field<String>;
pub type Address = Field<String>;
pub type Birthday = Field<NaiveDate>;
pub type Tag = Field<String>;

/// A format rule: predicate, parser and how to report a rejection.
pub struct FieldRule<T> {
    pub label: &'static str,
    pub kind: ValidationKind,
    /// Human-readable description of the expected format.
    pub hint: &'static str,
    accepts: fn(&str) -> bool,
    parse: fn(&str) -> Option<T>,
}

// Manual impls: fn pointers are Copy regardless of T.
impl<T> Clone for FieldRule<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldRule<T> {}

impl<T> fmt::Debug for FieldRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("hint", &self.hint)
            .finish()
    }
}

impl<T> FieldRule<T> {
    /// Validate and parse `raw` into a [`Field`].
    pub fn check(&self, raw: &str) -> Result<Field<T>, ValidationError> {
        let raw = raw.trim();
        if !(self.accepts)(raw) {
            return Err(self.reject(raw));
        }
        let value = (self.parse)(raw).ok_or_else(|| self.reject(raw))?;
        Ok(Field {
            raw: raw.to_string(),
            value,
        })
    }

    pub fn is_valid(&self, raw: &str) -> bool {
        self.check(raw).is_ok()
    }

    /// Validate `raw` and store it in `slot`, replacing any prior value.
    ///
    /// On error `slot` is left exactly as it was.
    pub fn assign<'a>(
        &self,
        slot: &'a mut Option<Field<T>>,
        raw: &str,
    ) -> Result<&'a T, ValidationError> {
        let field = self.check(raw)?;
        Ok(&slot.insert(field).value)
    }

    fn reject(&self, raw: &str) -> ValidationError {
        ValidationError::new(
            self.kind,
            format!("{} '{}' is not valid, expected {}", self.label, raw, self.hint),
        )
    }
}

impl<T: PartialEq> FieldRule<T> {
    /// Re-checks a field that did not come from [`check`](Self::check), such
    /// as one read back from a snapshot. The raw text must pass the rule and
    /// parse to the stored value.
    pub fn recheck(&self, field: &Field<T>) -> Result<(), ValidationError> {
        let fresh = self.check(&field.raw)?;
        if fresh.raw != field.raw || fresh.value != field.value {
            return Err(ValidationError::new(
                self.kind,
                format!("{} '{}' does not match its stored value", self.label, field.raw),
            ));
        }
        Ok(())
    }
}

// --- Predicates and parsers ---

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?(\d{2})?\(?\d{3}\)?[\d\-\s]{7,10}$").expect("phone regex"));
static PHONE_UA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?380\d{9}$").expect("ukrainian phone regex"));
static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("iso date regex"));
static DMY_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("dmy date regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9]+[._+-])*[A-Za-z0-9]+@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}$")
        .expect("email regex")
});

const MIN_PHONE_DIGITS: usize = 10;

fn non_empty(raw: &str) -> bool {
    !raw.is_empty()
}

fn passthrough(raw: &str) -> Option<String> {
    Some(raw.to_string())
}

fn digit_count(raw: &str) -> usize {
    raw.chars().filter(|c| c.is_ascii_digit()).count()
}

fn is_international_phone(raw: &str) -> bool {
    PHONE_RE.is_match(raw) && digit_count(raw) >= MIN_PHONE_DIGITS
}

fn is_ukrainian_phone(raw: &str) -> bool {
    PHONE_UA_RE.is_match(raw)
}

fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if raw.starts_with('+') {
        Some(format!("+{}", digits))
    } else {
        Some(digits)
    }
}

fn normalize_ukrainian_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    Some(format!("+{}", digits))
}

fn is_iso_date(raw: &str) -> bool {
    ISO_DATE_RE.is_match(raw)
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn is_dmy_date(raw: &str) -> bool {
    DMY_DATE_RE.is_match(raw)
}

fn parse_dmy_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%d-%m-%Y").ok()
}

fn is_email(raw: &str) -> bool {
    EMAIL_RE.is_match(raw)
}

fn normalize_email(raw: &str) -> Option<String> {
    let (local, domain) = raw.split_once('@')?;
    Some(format!("{}@{}", local, domain.to_lowercase()))
}

fn is_tag(raw: &str) -> bool {
    let word = raw.strip_prefix('#').unwrap_or(raw);
    !word.is_empty() && !word.chars().any(char::is_whitespace)
}

fn strip_hash(raw: &str) -> Option<String> {
    Some(raw.strip_prefix('#').unwrap_or(raw).to_string())
}

// --- Rules ---

pub const NAME: FieldRule<String> = FieldRule {
    label: "name",
    kind: ValidationKind::InvalidFormat,
    hint: "a non-empty name",
    accepts: non_empty,
    parse: passthrough,
};

pub const ADDRESS: FieldRule<String> = FieldRule {
    label: "address",
    kind: ValidationKind::InvalidFormat,
    hint: "a non-empty address",
    accepts: non_empty,
    parse: passthrough,
};

pub const PHONE: FieldRule<String> = FieldRule {
    label: "phone number",
    kind: ValidationKind::InvalidPhone,
    hint: "digits with optional +country code and separators, e.g. +38(050)123-45-67",
    accepts: is_international_phone,
    parse: normalize_phone,
};

pub const PHONE_UA: FieldRule<String> = FieldRule {
    label: "phone number",
    kind: ValidationKind::InvalidPhone,
    hint: "a Ukrainian mobile number, e.g. +380501234567",
    accepts: is_ukrainian_phone,
    parse: normalize_ukrainian_phone,
};

pub const BIRTHDAY: FieldRule<NaiveDate> = FieldRule {
    label: "birthday",
    kind: ValidationKind::InvalidDate,
    hint: "a date as YYYY-MM-DD",
    accepts: is_iso_date,
    parse: parse_iso_date,
};

pub const BIRTHDAY_DMY: FieldRule<NaiveDate> = FieldRule {
    label: "birthday",
    kind: ValidationKind::InvalidDate,
    hint: "a date as DD-MM-YYYY",
    accepts: is_dmy_date,
    parse: parse_dmy_date,
};

pub const EMAIL: FieldRule<String> = FieldRule {
    label: "email",
    kind: ValidationKind::InvalidEmail,
    hint: "an address like user@example.com",
    accepts: is_email,
    parse: normalize_email,
};

pub const TAG: FieldRule<String> = FieldRule {
    label: "tag",
    kind: ValidationKind::InvalidFormat,
    hint: "a single word, optionally starting with #",
    accepts: is_tag,
    parse: strip_hash,
};

/// Accepted phone number format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneFormat {
    #[default]
    International,
    Ukrainian,
}

/// Accepted birthday date format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    #[default]
    Iso,
    Dmy,
}

impl fmt::Display for PhoneFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneFormat::International => write!(f, "international"),
            PhoneFormat::Ukrainian => write!(f, "ukrainian"),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Iso => write!(f, "iso"),
            DateFormat::Dmy => write!(f, "dmy"),
        }
    }
}

/// The set of rules a record is validated against.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub name: FieldRule<String>,
    pub phone: FieldRule<String>,
    pub birthday: FieldRule<NaiveDate>,
    pub email: FieldRule<String>,
    pub address: FieldRule<String>,
    pub tag: FieldRule<String>,
}

impl Schema {
    pub fn new(phone: PhoneFormat, birthday: DateFormat) -> Self {
        Self {
            name: NAME,
            phone: match phone {
                PhoneFormat::International => PHONE,
                PhoneFormat::Ukrainian => PHONE_UA,
            },
            birthday: match birthday {
                DateFormat::Iso => BIRTHDAY,
                DateFormat::Dmy => BIRTHDAY_DMY,
            },
            email: EMAIL,
            address: ADDRESS,
            tag: TAG,
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(PhoneFormat::default(), DateFormat::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recheck_rejects_tampered_fields() {
        let phone = PHONE.check("+38(050)123-45-67").unwrap();
        assert!(PHONE.recheck(&phone).is_ok());

        let not_a_phone = Field {
            raw: "abc".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(
            PHONE.recheck(&not_a_phone).unwrap_err().kind,
            ValidationKind::InvalidPhone
        );

        let mismatched = Field {
            raw: "1990-03-15".to_string(),
            value: NaiveDate::from_ymd_opt(2001, 1, 1).unwrap(),
        };
        let err = BIRTHDAY.recheck(&mismatched).unwrap_err();
        assert!(err.detail.contains("does not match its stored value"));
    }

    #[test]
    fn name_accepts_free_text() {
        let name = NAME.check("  Anna Maria  ").unwrap();
        assert_eq!(name.raw(), "Anna Maria");
        assert_eq!(name.value(), "Anna Maria");
    }

    #[test]
    fn name_rejects_blank() {
        let err = NAME.check("   ").unwrap_err();
        assert_eq!(err.kind, ValidationKind::InvalidFormat);
    }

    #[test]
    fn international_phone_formats() {
        assert!(PHONE.is_valid("0501234567"));
        assert!(PHONE.is_valid("+380501234567"));
        assert!(PHONE.is_valid("+38(050)123-45-67"));
        assert!(PHONE.is_valid("050 123 45 67"));

        assert!(!PHONE.is_valid(""));
        assert!(!PHONE.is_valid("12345"));
        assert!(!PHONE.is_valid("phone"));
        assert!(!PHONE.is_valid("050-123-45-67-89-00"));
        assert!(!PHONE.is_valid("(050) 123 45"));
    }

    #[test]
    fn phone_is_normalized_to_digits() {
        let phone = PHONE.check("+38(050)123-45-67").unwrap();
        assert_eq!(phone.raw(), "+38(050)123-45-67");
        assert_eq!(phone.value(), "+380501234567");

        let local = PHONE.check("050 123 45 67").unwrap();
        assert_eq!(local.value(), "0501234567");
    }

    #[test]
    fn ukrainian_phone_is_strict() {
        assert!(PHONE_UA.is_valid("+380501234567"));
        assert!(PHONE_UA.is_valid("380501234567"));
        assert!(!PHONE_UA.is_valid("0501234567"));
        assert!(!PHONE_UA.is_valid("+38050123456"));
        assert!(!PHONE_UA.is_valid("+38(050)123-45-67"));

        let phone = PHONE_UA.check("380501234567").unwrap();
        assert_eq!(phone.value(), "+380501234567");
    }

    #[test]
    fn phone_error_kind() {
        let err = PHONE.check("abc").unwrap_err();
        assert_eq!(err.kind, ValidationKind::InvalidPhone);
        assert!(err.detail.contains("abc"));
    }

    #[test]
    fn iso_birthday_parses_to_date() {
        let bday = BIRTHDAY.check("1990-03-15").unwrap();
        assert_eq!(*bday.value(), NaiveDate::from_ymd_opt(1990, 3, 15).unwrap());
    }

    #[test]
    fn birthday_rejects_impossible_dates() {
        assert_eq!(
            BIRTHDAY.check("1990-13-01").unwrap_err().kind,
            ValidationKind::InvalidDate
        );
        assert!(!BIRTHDAY.is_valid("1990-02-30"));
        assert!(!BIRTHDAY.is_valid("1990-00-10"));
        assert!(!BIRTHDAY.is_valid("1990-1-5"));
        assert!(!BIRTHDAY.is_valid("15-03-1990"));
        assert!(BIRTHDAY.is_valid("2000-02-29"));
        assert!(!BIRTHDAY.is_valid("2001-02-29"));
    }

    #[test]
    fn dmy_birthday_variant() {
        let bday = BIRTHDAY_DMY.check("15-03-1990").unwrap();
        assert_eq!(*bday.value(), NaiveDate::from_ymd_opt(1990, 3, 15).unwrap());
        assert!(!BIRTHDAY_DMY.is_valid("1990-03-15"));
    }

    #[test]
    fn email_formats() {
        assert!(EMAIL.is_valid("user@example.com"));
        assert!(EMAIL.is_valid("first.last@mail.example.co.uk"));
        assert!(EMAIL.is_valid("a_b-c@domain-name.io"));

        assert!(!EMAIL.is_valid("user@example"));
        assert!(!EMAIL.is_valid("user@example.c"));
        assert!(!EMAIL.is_valid("@example.com"));
        assert!(!EMAIL.is_valid("user@@example.com"));
        assert!(!EMAIL.is_valid("user example@example.com"));
    }

    #[test]
    fn email_domain_is_case_insensitive() {
        let email = EMAIL.check("John.Doe@Example.COM").unwrap();
        assert_eq!(email.raw(), "John.Doe@Example.COM");
        assert_eq!(email.value(), "John.Doe@example.com");
        assert_eq!(
            EMAIL.check("John.Doe@example.com").unwrap().value(),
            email.value()
        );
    }

    #[test]
    fn tag_strips_hash() {
        assert_eq!(TAG.check("#work").unwrap().value(), "work");
        assert_eq!(TAG.check("work").unwrap().value(), "work");
        assert!(!TAG.is_valid("#"));
        assert!(!TAG.is_valid("two words"));
    }

    #[test]
    fn assign_replaces_on_success() {
        let mut slot = None;
        EMAIL.assign(&mut slot, "a@example.com").unwrap();
        EMAIL.assign(&mut slot, "b@example.com").unwrap();
        assert_eq!(slot.unwrap().value(), "b@example.com");
    }

    #[test]
    fn assign_leaves_slot_untouched_on_error() {
        let mut slot = Some(BIRTHDAY.check("1990-03-15").unwrap());
        let before = slot.clone();
        assert!(BIRTHDAY.assign(&mut slot, "not a date").is_err());
        assert_eq!(slot, before);

        let mut empty: Option<Phone> = None;
        assert!(PHONE.assign(&mut empty, "123").is_err());
        assert!(empty.is_none());
    }

    #[test]
    fn schema_picks_configured_rules() {
        let schema = Schema::new(PhoneFormat::Ukrainian, DateFormat::Dmy);
        assert!(!schema.phone.is_valid("0501234567"));
        assert!(schema.birthday.is_valid("15-03-1990"));

        let default = Schema::default();
        assert!(default.phone.is_valid("0501234567"));
        assert!(default.birthday.is_valid("1990-03-15"));
    }

    #[test]
    fn error_display() {
        let err = ValidationError::new(ValidationKind::InvalidEmail, "bad");
        assert_eq!(err.to_string(), "invalid email: bad");
    }
}
