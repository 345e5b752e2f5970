use crate::collection::{AddressBook, DuplicateKey};
use crate::commands::{BirthdayLine, CmdMessage, CmdResult, PageInfo};
use crate::error::{AbookError, Result};
use crate::field::{Schema, ValidationError};
use crate::model::Record;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Input for [`create`]. Every present value is validated before the record
/// is inserted, so a bad email never leaves a half-built contact behind.
#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub name: String,
    pub phones: Vec<String>,
    pub address: Option<String>,
    pub birthday: Option<String>,
    pub email: Option<String>,
    /// Replace an existing contact with the same name instead of failing.
    pub overwrite: bool,
}

/// The optional parts of a record that can be added or cleared after
/// creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Phone,
    Address,
    Birthday,
    Email,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Phone,
        ContactField::Address,
        ContactField::Birthday,
        ContactField::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Phone => "Phone",
            ContactField::Address => "Address",
            ContactField::Birthday => "Birthday",
            ContactField::Email => "Email",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContactField {
    type Err = AbookError;

    fn from_str(s: &str) -> Result<Self> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AbookError::Api(format!(
                    "Unknown field '{}', expected one of: phone, address, birthday, email",
                    s.trim()
                ))
            })
    }
}

pub fn create(book: &mut AddressBook, schema: &Schema, input: NewContact) -> Result<CmdResult> {
    let record = build_record(schema, &input)?;
    let name = record.name().to_string();

    let message = if input.overwrite {
        match book.add(record.clone()) {
            Some(_) => CmdMessage::success(format!("Contact replaced: {}", name)),
            None => CmdMessage::success(format!("Contact added: {}", name)),
        }
    } else {
        book.try_add(record.clone())
            .map_err(|DuplicateKey(key)| AbookError::DuplicateContact(key))?;
        CmdMessage::success(format!("Contact added: {}", name))
    };

    Ok(CmdResult::default()
        .with_records(vec![record])
        .with_message(message))
}

fn build_record(schema: &Schema, input: &NewContact) -> std::result::Result<Record, ValidationError> {
    let mut record = Record::new(schema, &input.name)?;
    for phone in input.phones.iter().filter(|p| !p.trim().is_empty()) {
        record.add_phone(schema, phone)?;
    }
    if let Some(address) = non_empty(&input.address) {
        record.set_address(schema, address)?;
    }
    if let Some(birthday) = non_empty(&input.birthday) {
        record.set_birthday(schema, birthday)?;
    }
    if let Some(email) = non_empty(&input.email) {
        record.set_email(schema, email)?;
    }
    Ok(record)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Adds a phone, or sets the address, birthday or email of an existing
/// contact.
pub fn add_field(
    book: &mut AddressBook,
    schema: &Schema,
    name: &str,
    field: ContactField,
    value: &str,
) -> Result<CmdResult> {
    let record = find_mut(book, name)?;
    match field {
        ContactField::Phone => record.add_phone(schema, value)?,
        ContactField::Address => record.set_address(schema, value)?,
        ContactField::Birthday => record.set_birthday(schema, value)?,
        ContactField::Email => record.set_email(schema, value)?,
    }
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "{} was added for {}",
            field,
            record.name()
        )))
        .with_records(vec![record.clone()]))
}

/// Clears a field. For phones this drops all of them.
pub fn clear_field(book: &mut AddressBook, name: &str, field: ContactField) -> Result<CmdResult> {
    let record = find_mut(book, name)?;
    match field {
        ContactField::Phone => {
            record.clear_phones();
        }
        ContactField::Address => record.clear_address(),
        ContactField::Birthday => record.clear_birthday(),
        ContactField::Email => record.clear_email(),
    }
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "{} cleared for {}",
            field,
            record.name()
        )))
        .with_records(vec![record.clone()]))
}

/// Replaces every phone of the contact with a single new one.
pub fn change_phone(
    book: &mut AddressBook,
    schema: &Schema,
    name: &str,
    phone: &str,
) -> Result<CmdResult> {
    let record = find_mut(book, name)?;
    record.replace_phones(schema, phone)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Phones of {} replaced",
            record.name()
        )))
        .with_records(vec![record.clone()]))
}

pub fn edit_phone(
    book: &mut AddressBook,
    schema: &Schema,
    name: &str,
    old: &str,
    new: &str,
) -> Result<CmdResult> {
    let record = find_mut(book, name)?;
    let message = if record.edit_phone(schema, old, new)? {
        CmdMessage::success(format!("Phone {} of {} changed", old.trim(), record.name()))
    } else {
        CmdMessage::warning(format!("{} has no phone {}", record.name(), old.trim()))
    };
    Ok(CmdResult::default()
        .with_message(message)
        .with_records(vec![record.clone()]))
}

pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = find_mut(book, name)?;
    let message = match record.remove_phone(phone) {
        0 => CmdMessage::warning(format!("{} has no phone {}", record.name(), phone.trim())),
        1 => CmdMessage::success(format!("Phone removed from {}", record.name())),
        n => CmdMessage::success(format!("{} phones removed from {}", n, record.name())),
    };
    Ok(CmdResult::default()
        .with_message(message)
        .with_records(vec![record.clone()]))
}

pub fn phones(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = find(book, name)?;
    let mut result = CmdResult::default().with_records(vec![record.clone()]);
    if record.phones().is_empty() {
        result.add_message(CmdMessage::info(format!("{} has no phones", record.name())));
    }
    Ok(result)
}

pub fn view(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = find(book, name)?;
    Ok(CmdResult::default().with_records(vec![record.clone()]))
}

pub fn delete(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .remove(name.trim())
        .ok_or_else(|| AbookError::ContactNotFound(name.trim().to_string()))?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Contact deleted: {}",
            record.name()
        )))
        .with_records(vec![record]))
}

pub fn rename(book: &mut AddressBook, schema: &Schema, old: &str, new: &str) -> Result<CmdResult> {
    book.rename(schema, old.trim(), new)?;
    let record = find(book, new)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Contact renamed: {} -> {}",
            old.trim(),
            record.name()
        )))
        .with_records(vec![record.clone()]))
}

/// One page of the address book. `number` is 1-based; 0 is read as 1.
pub fn list(book: &AddressBook, number: usize, page_size: usize) -> Result<CmdResult> {
    let number = number.max(1);
    let count = book.page_count(page_size);
    let mut result = CmdResult::default();

    if book.is_empty() {
        result.add_message(CmdMessage::info("Address book is empty"));
        return Ok(result);
    }
    if number > count {
        result.add_message(CmdMessage::warning(format!(
            "Page {} does not exist, there are {} pages",
            number, count
        )));
        return Ok(result);
    }

    result.records = book.page(number, page_size).to_vec();
    result.page = Some(PageInfo {
        number,
        count,
        total: book.len(),
    });
    Ok(result)
}

pub fn search(book: &AddressBook, query: &str) -> Result<CmdResult> {
    let records: Vec<Record> = book.search(query).into_iter().cloned().collect();
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No contacts match '{}'",
            query.trim()
        )));
    }
    Ok(result.with_records(records))
}

/// Days until one contact's next birthday.
pub fn birthday(book: &AddressBook, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let record = find(book, name)?;
    let mut result = CmdResult::default();
    match birthday_line(record, today) {
        Some(line) => {
            let message = match line.days {
                0 => format!("Today is {}'s birthday", line.name),
                1 => format!("1 day left till {}'s birthday", line.name),
                n => format!("{} days left till {}'s birthday", n, line.name),
            };
            result.add_message(CmdMessage::info(message));
            result.days.push(line);
        }
        None => {
            result.add_message(CmdMessage::info(format!(
                "{} has no birthday set",
                record.name()
            )));
        }
    }
    Ok(result)
}

/// Everyone with a birthday in the next `days` days, nearest first.
pub fn birthdays(book: &AddressBook, days: i64, today: NaiveDate) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.days = book
        .upcoming_birthdays(days, today)
        .into_iter()
        .filter_map(|(record, _)| birthday_line(record, today))
        .collect();
    if result.days.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No birthdays in the next {} days",
            days
        )));
    }
    Ok(result)
}

fn birthday_line(record: &Record, today: NaiveDate) -> Option<BirthdayLine> {
    let date = record.next_birthday(today)?;
    let born = record.birthday().map(|b| *b.value())?;
    Some(BirthdayLine {
        name: record.name().to_string(),
        date,
        days: (date - today).num_days(),
        turns: u32::try_from(date.year() - born.year()).ok(),
    })
}

fn find<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.get(name.trim())
        .ok_or_else(|| AbookError::ContactNotFound(name.trim().to_string()))
}

fn find_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.get_mut(name.trim())
        .ok_or_else(|| AbookError::ContactNotFound(name.trim().to_string()))
}
