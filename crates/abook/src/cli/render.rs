//! # Rendering
//!
//! Turns `CmdResult` data into terminal text. Every function returns a
//! `String` so output can be tested without a terminal; the caller prints.
//!
//! Column layout is computed on the plain text with `unicode-width`, colors
//! (via `colored`) are applied after padding so escape codes never skew the
//! alignment. `colored` turns itself off when stdout is not a terminal or
//! `NO_COLOR` is set.

use abookapp::commands::{
    BirthdayLine, CmdMessage, CmdResult, IndexedNote, MessageLevel, PageInfo,
};
use abookapp::model::Record;
use chrono::NaiveDate;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const NAME_WIDTH: usize = 24;
pub const TITLE_WIDTH: usize = 32;
const MISSING: &str = "-";

/// Which part of a `CmdResult` a command wants shown above its messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// Messages only.
    Quiet,
    Records,
    Record,
    Phones,
    Birthdays,
    Notes,
    Note,
}

pub fn render_result(result: &CmdResult, listing: Listing, today: NaiveDate) -> String {
    let mut out = match listing {
        Listing::Quiet => String::new(),
        Listing::Records => render_records(&result.records),
        Listing::Record => result
            .records
            .iter()
            .map(|r| render_record(r, today))
            .collect(),
        Listing::Phones => result.records.iter().map(render_phones).collect(),
        Listing::Birthdays => render_birthdays(&result.days),
        Listing::Notes => render_note_list(&result.notes),
        Listing::Note => result.notes.iter().map(render_note).collect(),
    };
    if let Some(page) = &result.page {
        out.push_str(&render_page(page));
    }
    out.push_str(&render_messages(&result.messages));
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.normal(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn render_error(error: &dyn std::fmt::Display) -> String {
    format!("{} {}\n", "Error:".red().bold(), error)
}

/// One contact per line: name, phones, birthday, email, address.
pub fn render_records(records: &[Record]) -> String {
    let width = column_width(records.iter().map(Record::name), NAME_WIDTH);
    let mut out = String::new();
    for record in records {
        let name = pad(&truncate_to_width(record.name(), width), width);
        let phones = match record.phones() {
            [] => MISSING.to_string(),
            phones => phones.iter().map(|p| p.raw()).collect::<Vec<_>>().join(", "),
        };
        let birthday = record
            .birthday()
            .map(|b| b.raw().to_string())
            .unwrap_or_else(|| MISSING.to_string());
        let email = record
            .email()
            .map(|e| e.value().to_string())
            .unwrap_or_else(|| MISSING.to_string());
        let address = record.address().map(|a| a.raw()).unwrap_or(MISSING);
        out.push_str(&format!(
            "{}  {}  {}  {}  {}\n",
            name.bold(),
            phones,
            birthday.dimmed(),
            email.cyan(),
            address.dimmed()
        ));
    }
    out
}

/// Everything known about one contact.
pub fn render_record(record: &Record, today: NaiveDate) -> String {
    let mut out = format!("{}\n", record.name().bold());
    let phones: Vec<&str> = record.phones().iter().map(|p| p.raw()).collect();
    out.push_str(&field_line(
        "Phones",
        &if phones.is_empty() {
            MISSING.to_string()
        } else {
            phones.join(", ")
        },
    ));
    let birthday = match (record.birthday(), record.days_to_birthday(today)) {
        (Some(b), Some(0)) => format!("{} (today)", b.raw()),
        (Some(b), Some(days)) => format!("{} (in {} days)", b.raw(), days),
        _ => MISSING.to_string(),
    };
    out.push_str(&field_line("Birthday", &birthday));
    out.push_str(&field_line(
        "Email",
        record.email().map(|e| e.value().as_str()).unwrap_or(MISSING),
    ));
    out.push_str(&field_line(
        "Address",
        record.address().map(|a| a.raw()).unwrap_or(MISSING),
    ));
    out
}

pub fn render_phones(record: &Record) -> String {
    record
        .phones()
        .iter()
        .map(|p| format!("{}\n", p.raw()))
        .collect()
}

pub fn render_page(page: &PageInfo) -> String {
    format!(
        "{}\n",
        format!(
            "Page {} of {} ({} contacts)",
            page.number, page.count, page.total
        )
        .dimmed()
    )
}

pub fn render_birthdays(lines: &[BirthdayLine]) -> String {
    let width = column_width(lines.iter().map(|l| l.name.as_str()), NAME_WIDTH);
    let mut out = String::new();
    for line in lines {
        let name = pad(&truncate_to_width(&line.name, width), width);
        let when = match line.days {
            0 => "today".green().bold().to_string(),
            1 => "tomorrow".yellow().to_string(),
            n => format!("in {} days", n),
        };
        let turns = line
            .turns
            .map(|age| format!(", turns {}", age))
            .unwrap_or_default();
        out.push_str(&format!(
            "{}  {}  {}{}\n",
            name.bold(),
            line.date.format("%Y-%m-%d").to_string().dimmed(),
            when,
            turns
        ));
    }
    out
}

pub fn render_note_list(notes: &[IndexedNote]) -> String {
    let index_width = notes
        .iter()
        .map(|n| n.index.to_string().len())
        .max()
        .unwrap_or(1);
    let title_width = column_width(notes.iter().map(|n| n.note.title()), TITLE_WIDTH);
    let mut out = String::new();
    for entry in notes {
        let index = format!("{:>width$}.", entry.index, width = index_width);
        let title = pad(&truncate_to_width(entry.note.title(), title_width), title_width);
        out.push_str(&format!(
            "{} {}  {}\n",
            index.yellow(),
            title,
            tag_list(&entry.note).cyan()
        ));
    }
    out
}

pub fn render_note(entry: &IndexedNote) -> String {
    let mut out = format!(
        "{} {}\n",
        format!("{}.", entry.index).yellow(),
        entry.note.title().bold()
    );
    if entry.note.tag_count() > 0 {
        out.push_str(&format!("{}\n", tag_list(&entry.note).cyan()));
    }
    if !entry.note.body().is_empty() {
        out.push('\n');
        out.push_str(entry.note.body());
        out.push('\n');
    }
    out
}

pub fn render_config(entries: &[(&'static str, String)]) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

fn tag_list(note: &abookapp::model::Note) -> String {
    note.tags()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn field_line(label: &str, value: &str) -> String {
    format!("  {} {}\n", pad(&format!("{}:", label), 9).dimmed(), value)
}

/// Widest of `values`, capped at `max`.
fn column_width<'a>(values: impl Iterator<Item = &'a str>, max: usize) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0).min(max)
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use abookapp::field::Schema;
    use abookapp::model::Note;

    fn plain() {
        colored::control::set_override(false);
    }

    fn record(name: &str) -> Record {
        Record::new(&Schema::default(), name).unwrap()
    }

    #[test]
    fn records_align_on_widest_name() {
        plain();
        let schema = Schema::default();
        let mut anna = record("Anna");
        anna.add_phone(&schema, "0501234567").unwrap();
        let out = render_records(&[anna, record("Bartholomew")]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Anna         0501234567  -  -  -");
        assert!(lines[1].starts_with("Bartholomew  -"));
    }

    #[test]
    fn wide_characters_count_double() {
        plain();
        let out = render_records(&[record("李雷"), record("Anna")]);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("李雷  -"));
        assert!(lines[1].starts_with("Anna  -"));
    }

    #[test]
    fn long_names_are_truncated() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 4), "abc");
    }

    #[test]
    fn record_detail_marks_today() {
        plain();
        let schema = Schema::default();
        let mut anna = record("Anna");
        anna.set_birthday(&schema, "1990-03-15").unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let out = render_record(&anna, today);
        assert!(out.contains("1990-03-15 (today)"));
        assert!(out.contains("Phones:   -"));
    }

    #[test]
    fn birthdays_show_distance() {
        plain();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let lines = vec![
            BirthdayLine {
                name: "Anna".into(),
                date,
                days: 0,
                turns: Some(34),
            },
            BirthdayLine {
                name: "Bob".into(),
                date,
                days: 5,
                turns: None,
            },
        ];
        let out = render_birthdays(&lines);
        assert!(out.contains("Anna  2024-01-01  today, turns 34"));
        assert!(out.contains("Bob   2024-01-01  in 5 days"));
    }

    #[test]
    fn notes_list_with_tags() {
        plain();
        let schema = Schema::default();
        let mut note = Note::new(&schema, "Groceries", "milk").unwrap();
        note.add_tags(&schema, ["home", "weekly"]).unwrap();
        let out = render_note_list(&[IndexedNote { index: 1, note }]);
        assert_eq!(out, "1. Groceries  #home #weekly\n");
    }

    #[test]
    fn result_lists_then_pages_then_messages() {
        plain();
        let mut result = CmdResult::default()
            .with_records(vec![record("Anna")])
            .with_message(CmdMessage::info("note"));
        result.page = Some(PageInfo {
            number: 1,
            count: 2,
            total: 4,
        });
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let out = render_result(&result, Listing::Records, today);
        assert_eq!(out, "Anna  -  -  -  -\nPage 1 of 2 (4 contacts)\nnote\n");
        let quiet = render_result(&result, Listing::Quiet, today);
        assert_eq!(quiet, "Page 1 of 2 (4 contacts)\nnote\n");
    }

    #[test]
    fn messages_one_per_line() {
        plain();
        let out = render_messages(&[CmdMessage::success("done"), CmdMessage::warning("careful")]);
        assert_eq!(out, "done\ncareful\n");
    }
}
