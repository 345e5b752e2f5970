//! # Interactive Shell
//!
//! A read-eval-print loop over the API facade. Each line is split into
//! words (double quotes group words, so `view "Anna Smith"` works), the first
//! word is looked up in an explicit [`CommandTable`] and its handler runs to
//! completion before the next line is read.
//!
//! ## Errors
//!
//! No error ends the session. Validation errors, unknown
//! contacts and unknown commands are printed and the loop goes on. An unknown
//! command is answered with the closest known one, scored by how many of a
//! command's names and keywords appear in the input.
//!
//! ## Prompts
//!
//! Commands accept their arguments inline or ask for them. Prompted field
//! values are validated on the spot and asked again until they pass; an empty
//! answer skips optional fields. Field setters in the library never retry;
//! the loop lives here in [`Prompter`].
//!
//! ## Saving
//!
//! `save` writes immediately. `exit`, `quit` and end of input save and leave.

use super::render::{self, Listing};
use abookapp::api::AbookApi;
use abookapp::commands::contacts::{ContactField, NewContact};
use abookapp::commands::CmdResult;
use abookapp::config::AbookConfig;
use abookapp::field::{FieldRule, Schema};
use abookapp::store::DataStore;
use anyhow::{bail, Result};
use chrono::NaiveDate;
use colored::Colorize;
use std::collections::HashSet;
use std::io::{self, BufRead, Write};

pub const GREETING: &str = "Welcome to abook! Type 'help' to see what I can do.";
pub const FAREWELL: &str = "Good bye!";
const PROMPT: &str = ">>> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

type Handler<S, R, W> = fn(&mut Shell<S, R, W>, &[String]) -> Result<Flow>;

pub struct Entry<S: DataStore, R, W> {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Extra words that point at this command when suggesting.
    pub keywords: &'static [&'static str],
    pub usage: &'static str,
    pub about: &'static str,
    handler: Handler<S, R, W>,
}

impl<S: DataStore, R, W> Entry<S, R, W> {
    fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }

    fn terms(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names().chain(self.keywords.iter().copied())
    }
}

/// Command names and aliases mapped to handlers.
pub struct CommandTable<S: DataStore, R, W> {
    entries: Vec<Entry<S, R, W>>,
}

impl<S: DataStore, R, W> CommandTable<S, R, W> {
    /// Builds the table, refusing empty, multi-word or repeated names.
    pub fn new(entries: Vec<Entry<S, R, W>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            for name in entry.names() {
                if name.is_empty() || name.chars().any(char::is_whitespace) {
                    bail!("invalid command name '{}'", name);
                }
                if !seen.insert(name.to_lowercase()) {
                    bail!("command name '{}' is registered twice", name);
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn lookup(&self, word: &str) -> Option<&Entry<S, R, W>> {
        self.entries
            .iter()
            .find(|entry| entry.names().any(|name| name.eq_ignore_ascii_case(word)))
    }

    /// The command whose terms best overlap `input`, if any term matches.
    /// Ties go to the command listed first.
    pub fn suggest(&self, input: &str) -> Option<&'static str> {
        let input = input.to_lowercase();
        let words: Vec<&str> = input.split_whitespace().collect();
        let mut best = None;
        let mut best_score = 0;
        for entry in &self.entries {
            let score = entry
                .terms()
                .filter(|term| {
                    input.contains(term)
                        || words.iter().any(|w| w.chars().count() >= 3 && term.starts_with(w))
                })
                .count();
            if score > best_score {
                best_score = score;
                best = Some(entry.name);
            }
        }
        best
    }

    pub fn entries(&self) -> &[Entry<S, R, W>] {
        &self.entries
    }
}

/// Splits a line into words. Double quotes group words and are dropped.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut started = false;
    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                started = true;
            }
            c if c.is_whitespace() && !quoted => {
                if started {
                    tokens.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            c => {
                current.push(c);
                started = true;
            }
        }
    }
    if quoted {
        bail!("Unclosed quote");
    }
    if started {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Line-oriented questions and answers over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// One line without its line ending, `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.say(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`read_line`](Self::read_line) but end of input is an error, so
    /// a half-answered command unwinds.
    fn answer(&mut self, prompt: &str) -> io::Result<String> {
        self.read_line(prompt)?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"))
    }

    /// Asks until a non-empty answer is given.
    pub fn require(&mut self, label: &str) -> io::Result<String> {
        loop {
            let answer = self.answer(&format!("{}: ", label))?;
            if !answer.trim().is_empty() {
                return Ok(answer.trim().to_string());
            }
            self.say(&format!("{} is required\n", label))?;
        }
    }

    pub fn ask_required<T>(&mut self, label: &str, rule: &FieldRule<T>) -> io::Result<String> {
        loop {
            if let Some(value) = self.ask_valid(label, rule, true)? {
                return Ok(value);
            }
        }
    }

    /// `None` when the answer is left empty.
    pub fn ask_optional<T>(&mut self, label: &str, rule: &FieldRule<T>) -> io::Result<Option<String>> {
        self.ask_valid(label, rule, false)
    }

    fn ask_valid<T>(
        &mut self,
        label: &str,
        rule: &FieldRule<T>,
        required: bool,
    ) -> io::Result<Option<String>> {
        loop {
            let answer = self.answer(&format!("{}: ", label))?;
            let answer = answer.trim();
            if answer.is_empty() {
                if !required {
                    return Ok(None);
                }
                self.say(&format!("{} is required\n", label))?;
                continue;
            }
            match rule.check(answer) {
                Ok(_) => return Ok(Some(answer.to_string())),
                Err(e) => self.say(&format!("{}\n", e.to_string().yellow()))?,
            }
        }
    }

    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.answer(&format!("{} [y/N] ", question))?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

pub struct Shell<S: DataStore, R, W> {
    api: AbookApi<S>,
    config: AbookConfig,
    prompter: Prompter<R, W>,
    table: CommandTable<S, R, W>,
    today: NaiveDate,
}

impl<S: DataStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(
        api: AbookApi<S>,
        config: AbookConfig,
        prompter: Prompter<R, W>,
        today: NaiveDate,
    ) -> Result<Self> {
        Ok(Self {
            api,
            config,
            prompter,
            table: CommandTable::new(default_entries())?,
            today,
        })
    }

    pub fn into_parts(self) -> (AbookApi<S>, W) {
        (self.api, self.prompter.into_output())
    }

    pub fn run(&mut self) -> Result<()> {
        self.prompter.say(&format!("{}\n", GREETING))?;
        loop {
            let Some(line) = self.prompter.read_line(PROMPT)? else {
                return self.leave();
            };
            match self.execute(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if is_end_of_input(&e) => return self.leave(),
                Err(e) => self.prompter.say(&render::render_error(&e))?,
            }
        }
    }

    /// Runs one line.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let tokens = tokenize(line)?;
        let Some((word, args)) = tokens.split_first() else {
            return Ok(Flow::Continue);
        };
        let handler = self.table.lookup(word).map(|entry| entry.handler);
        match handler {
            Some(handler) => {
                tracing::debug!(command = %word, args = args.len(), "dispatching");
                handler(self, args)
            }
            None => {
                let text = match self.table.suggest(line) {
                    Some(name) => format!("Unknown command '{}'. Did you mean '{}'?", word, name),
                    None => format!("Unknown command '{}'. Type 'help' to list commands.", word),
                };
                self.prompter.say(&format!("{}\n", text.yellow()))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn leave(&mut self) -> Result<()> {
        self.api.save()?;
        self.prompter.say(&format!("{}\n", FAREWELL))?;
        Ok(())
    }

    fn show(&mut self, result: &CmdResult, listing: Listing) -> Result<Flow> {
        let text = render::render_result(result, listing, self.today);
        self.prompter.say(&text)?;
        Ok(Flow::Continue)
    }

    fn schema(&self) -> Schema {
        *self.api.schema()
    }

    fn arg_or_ask(&mut self, args: &[String], index: usize, label: &str) -> io::Result<String> {
        match args.get(index) {
            Some(arg) => Ok(arg.clone()),
            None => self.prompter.require(label),
        }
    }

    /// The value at `index`, or a prompted value re-asked until `rule` accepts it.
    fn value_or_ask<T>(
        &mut self,
        args: &[String],
        index: usize,
        label: &str,
        rule: &FieldRule<T>,
    ) -> io::Result<String> {
        match args.get(index..).filter(|rest| !rest.is_empty()) {
            Some(rest) => Ok(rest.join(" ")),
            None => self.prompter.ask_required(label, rule),
        }
    }

    fn ask_field_value(&mut self, field: ContactField) -> io::Result<String> {
        let schema = self.schema();
        let label = field.label();
        match field {
            ContactField::Phone => self.prompter.ask_required(label, &schema.phone),
            ContactField::Address => self.prompter.ask_required(label, &schema.address),
            ContactField::Birthday => self.prompter.ask_required(label, &schema.birthday),
            ContactField::Email => self.prompter.ask_required(label, &schema.email),
        }
    }

    fn ask_tags(&mut self, schema: &Schema) -> io::Result<Vec<String>> {
        loop {
            let answer = self.prompter.answer("Tags (space separated): ")?;
            let tags: Vec<String> = answer.split_whitespace().map(str::to_string).collect();
            match tags.iter().find(|tag| !schema.tag.is_valid(tag)) {
                None => return Ok(tags),
                Some(bad) => {
                    let text = format!("'{}' is not a valid tag. Expected {}", bad, schema.tag.hint);
                    self.prompter.say(&format!("{}\n", text.yellow()))?;
                }
            }
        }
    }

    // --- Handlers ---

    fn help(&mut self, _args: &[String]) -> Result<Flow> {
        let width = self
            .table
            .entries()
            .iter()
            .map(|e| e.usage.len())
            .max()
            .unwrap_or(0);
        let mut text = String::new();
        for entry in self.table.entries() {
            let aliases = if entry.aliases.is_empty() {
                String::new()
            } else {
                format!(" (also: {})", entry.aliases.join(", "))
            };
            text.push_str(&format!(
                "  {:<width$}  {}{}\n",
                entry.usage,
                entry.about,
                aliases.dimmed(),
                width = width
            ));
        }
        self.prompter.say(&text)?;
        Ok(Flow::Continue)
    }

    fn create(&mut self, args: &[String]) -> Result<Flow> {
        let schema = self.schema();
        let name = if args.is_empty() {
            self.prompter.ask_required("Name", &schema.name)?
        } else {
            args.join(" ")
        };

        let mut overwrite = false;
        if self.api.contacts().contains(name.trim()) {
            let question = format!("{} already exists. Replace it?", name.trim());
            if !self.prompter.confirm(&question)? {
                self.prompter.say("Nothing changed\n")?;
                return Ok(Flow::Continue);
            }
            overwrite = true;
        }

        let mut phones = Vec::new();
        loop {
            let label = if phones.is_empty() { "Phone" } else { "Another phone" };
            match self.prompter.ask_optional(label, &schema.phone)? {
                Some(phone) => phones.push(phone),
                None => break,
            }
        }
        let address = self.prompter.ask_optional("Address", &schema.address)?;
        let birthday = self.prompter.ask_optional("Birthday", &schema.birthday)?;
        let email = self.prompter.ask_optional("Email", &schema.email)?;

        let result = self.api.create_contact(NewContact {
            name,
            phones,
            address,
            birthday,
            email,
            overwrite,
        })?;
        self.show(&result, Listing::Quiet)
    }

    /// Adds a phone or sets another field on an existing contact.
    fn add(&mut self, args: &[String]) -> Result<Flow> {
        let name = self.arg_or_ask(args, 0, "Name")?;
        if !self.api.contacts().contains(name.trim()) {
            self.api.view_contact(&name)?;
        }
        let field = match args.get(1) {
            Some(raw) => raw.parse::<ContactField>()?,
            None => loop {
                let answer = self
                    .prompter
                    .require("What to add? (phone, address, birthday, email)")?;
                match answer.parse::<ContactField>() {
                    Ok(field) => break field,
                    Err(e) => self.prompter.say(&format!("{}\n", e.to_string().yellow()))?,
                }
            },
        };
        let value = match args.get(2..).filter(|rest| !rest.is_empty()) {
            Some(rest) => rest.join(" "),
            None => self.ask_field_value(field)?,
        };
        let result = self.api.add_field(&name, field, &value)?;
        self.show(&result, Listing::Quiet)
    }

    fn change(&mut self, args: &[String]) -> Result<Flow> {
        let name = self.arg_or_ask(args, 0, "Name")?;
        self.api.view_contact(&name)?;
        let schema = self.schema();
        let phone = self.value_or_ask(args, 1, "New phone", &schema.phone)?;
        let result = self.api.change_phone(&name, &phone)?;
        self.show(&result, Listing::Quiet)
    }

    fn edit_phone(&mut self, args: &[String]) -> Result<Flow> {
        let name = self.arg_or_ask(args, 0, "Name")?;
        self.api.view_contact(&name)?;
        let old = self.arg_or_ask(args, 1, "Old phone")?;
        let schema = self.schema();
        let new = self.value_or_ask(args, 2, "New phone", &schema.phone)?;
        let result = self.api.edit_phone(&name, &old, &new)?;
        self.show(&result, Listing::Quiet)
    }

    fn remove_phone(&mut self, args: &[String]) -> Result<Flow> {
        let name = self.arg_or_ask(args, 0, "Name")?;
        let phone = self.arg_or_ask(args, 1, "Phone")?;
        let result = self.api.remove_phone(&name, &phone)?;
        self.show(&result, Listing::Quiet)
    }

    fn phone(&mut self, args: &[String]) -> Result<Flow> {
        let name = self.name_arg(args)?;
        let result = self.api.phones(&name)?;
        self.show(&result, Listing::Phones)
    }

    fn view(&mut self, args: &[String]) -> Result<Flow> {
        let name = self.name_arg(args)?;
        let result = self.api.view_contact(&name)?;
        self.show(&result, Listing::Record)
    }

    fn show_contacts(&mut self, args: &[String]) -> Result<Flow> {
        let page = parse_number(args.first(), 1, "page")?;
        let page_size = parse_number(args.get(1), self.config.page_size, "page size")?;
        let result = self.api.list_contacts(page, page_size)?;
        self.show(&result, Listing::Records)
    }

    fn delete(&mut self, args: &[String]) -> Result<Flow> {
        let name = self.name_arg(args)?;
        let result = self.api.delete_contact(&name)?;
        self.show(&result, Listing::Quiet)
    }

    fn rename(&mut self, args: &[String]) -> Result<Flow> {
        let old = self.arg_or_ask(args, 0, "Current name")?;
        let new = match args.get(1..).filter(|rest| !rest.is_empty()) {
            Some(rest) => rest.join(" "),
            None => self.prompter.require("New name")?,
        };
        let result = self.api.rename_contact(&old, &new)?;
        self.show(&result, Listing::Quiet)
    }

    fn search(&mut self, args: &[String]) -> Result<Flow> {
        let query = if args.is_empty() {
            self.prompter.answer("Search for: ")?
        } else {
            args.join(" ")
        };
        let result = self.api.search_contacts(&query)?;
        self.show(&result, Listing::Records)
    }

    fn birthday(&mut self, args: &[String]) -> Result<Flow> {
        let name = self.name_arg(args)?;
        let result = self.api.birthday(&name, self.today)?;
        self.show(&result, Listing::Quiet)
    }

    fn birthdays(&mut self, args: &[String]) -> Result<Flow> {
        let days = parse_number(args.first(), self.config.birthday_days, "days")?;
        let result = self.api.birthdays(days, self.today)?;
        self.show(&result, Listing::Birthdays)
    }

    fn note_add(&mut self, args: &[String]) -> Result<Flow> {
        let schema = self.schema();
        let title = if args.is_empty() {
            self.prompter.ask_required("Title", &schema.name)?
        } else {
            args.join(" ")
        };
        let body = self.prompter.answer("Text: ")?;
        let tags = self.ask_tags(&schema)?;
        let result = self.api.add_note(&title, &body, &tags)?;
        self.show(&result, Listing::Quiet)
    }

    fn notes(&mut self, args: &[String]) -> Result<Flow> {
        let result = self.api.list_notes(args.first().map(String::as_str))?;
        self.show(&result, Listing::Notes)
    }

    fn note_view(&mut self, args: &[String]) -> Result<Flow> {
        let selector = self.note_arg(args)?;
        let result = self.api.view_note(&selector)?;
        self.show(&result, Listing::Note)
    }

    fn note_edit(&mut self, args: &[String]) -> Result<Flow> {
        let selector = self.arg_or_ask(args, 0, "Note number or title")?;
        self.api.view_note(&selector)?;
        let body = match args.get(1..).filter(|rest| !rest.is_empty()) {
            Some(rest) => rest.join(" "),
            None => self.prompter.answer("New text: ")?,
        };
        let result = self.api.edit_note(&selector, &body)?;
        self.show(&result, Listing::Quiet)
    }

    fn note_delete(&mut self, args: &[String]) -> Result<Flow> {
        let selector = self.note_arg(args)?;
        let result = self.api.delete_note(&selector)?;
        self.show(&result, Listing::Quiet)
    }

    fn note_tag(&mut self, args: &[String]) -> Result<Flow> {
        let selector = self.arg_or_ask(args, 0, "Note number or title")?;
        self.api.view_note(&selector)?;
        let tags = match args.get(1..).filter(|rest| !rest.is_empty()) {
            Some(rest) => rest.to_vec(),
            None => {
                let schema = self.schema();
                self.ask_tags(&schema)?
            }
        };
        let result = self.api.tag_note(&selector, &tags)?;
        self.show(&result, Listing::Quiet)
    }

    fn note_search(&mut self, args: &[String]) -> Result<Flow> {
        let query = if args.is_empty() {
            self.prompter.answer("Search notes for: ")?
        } else {
            args.join(" ")
        };
        let result = self.api.search_notes(&query)?;
        self.show(&result, Listing::Notes)
    }

    fn save(&mut self, _args: &[String]) -> Result<Flow> {
        self.api.save()?;
        self.prompter.say(&format!("{}\n", "Saved".green()))?;
        Ok(Flow::Continue)
    }

    fn exit(&mut self, _args: &[String]) -> Result<Flow> {
        self.leave()?;
        Ok(Flow::Exit)
    }

    /// All arguments joined, so unquoted two-word names work too.
    fn name_arg(&mut self, args: &[String]) -> io::Result<String> {
        if args.is_empty() {
            self.prompter.require("Name")
        } else {
            Ok(args.join(" "))
        }
    }

    fn note_arg(&mut self, args: &[String]) -> io::Result<String> {
        if args.is_empty() {
            self.prompter.require("Note number or title")
        } else {
            Ok(args.join(" "))
        }
    }
}

fn parse_number<T: std::str::FromStr>(arg: Option<&String>, default: T, what: &str) -> Result<T> {
    match arg {
        None => Ok(default),
        Some(raw) => match raw.parse() {
            Ok(value) => Ok(value),
            Err(_) => bail!("'{}' is not a valid {}", raw, what),
        },
    }
}

fn is_end_of_input(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}

fn default_entries<S: DataStore, R: BufRead, W: Write>() -> Vec<Entry<S, R, W>> {
    vec![
        Entry {
            name: "help",
            aliases: &["?"],
            keywords: &["commands", "usage"],
            usage: "help",
            about: "List commands",
            handler: Shell::help,
        },
        Entry {
            name: "create",
            aliases: &["new"],
            keywords: &["contact", "person", "make"],
            usage: "create [name]",
            about: "Create a contact, asking for each field",
            handler: Shell::create,
        },
        Entry {
            name: "add",
            aliases: &["set"],
            keywords: &["extra", "info", "field"],
            usage: "add [name] [field] [value]",
            about: "Add a phone, address, birthday or email to a contact",
            handler: Shell::add,
        },
        Entry {
            name: "change",
            aliases: &[],
            keywords: &["replace", "phones"],
            usage: "change [name] [phone]",
            about: "Replace all phones of a contact with one",
            handler: Shell::change,
        },
        Entry {
            name: "edit-phone",
            aliases: &[],
            keywords: &["edit", "fix"],
            usage: "edit-phone [name] [old] [new]",
            about: "Replace one phone of a contact",
            handler: Shell::edit_phone,
        },
        Entry {
            name: "remove-phone",
            aliases: &[],
            keywords: &["remove", "unset"],
            usage: "remove-phone [name] [phone]",
            about: "Remove a phone from a contact",
            handler: Shell::remove_phone,
        },
        Entry {
            name: "phone",
            aliases: &["phones"],
            keywords: &["number", "tel", "call"],
            usage: "phone [name]",
            about: "Show the phones of a contact",
            handler: Shell::phone,
        },
        Entry {
            name: "view",
            aliases: &["info"],
            keywords: &["details", "card"],
            usage: "view [name]",
            about: "Show everything about a contact",
            handler: Shell::view,
        },
        Entry {
            name: "show",
            aliases: &["list", "ls"],
            keywords: &["all", "page", "contacts"],
            usage: "show [page] [page size]",
            about: "List contacts one page at a time",
            handler: Shell::show_contacts,
        },
        Entry {
            name: "delete",
            aliases: &["remove", "rm"],
            keywords: &["erase", "drop"],
            usage: "delete [name]",
            about: "Delete a contact",
            handler: Shell::delete,
        },
        Entry {
            name: "rename",
            aliases: &[],
            keywords: &["name", "move"],
            usage: "rename [old] [new]",
            about: "Rename a contact",
            handler: Shell::rename,
        },
        Entry {
            name: "search",
            aliases: &["find"],
            keywords: &["lookup", "look", "query"],
            usage: "search [text]",
            about: "Find contacts by name or phone",
            handler: Shell::search,
        },
        Entry {
            name: "birthday",
            aliases: &[],
            keywords: &["born", "days", "bday"],
            usage: "birthday [name]",
            about: "Days left until a contact's birthday",
            handler: Shell::birthday,
        },
        Entry {
            name: "birthdays",
            aliases: &["upcoming"],
            keywords: &["soon", "week"],
            usage: "birthdays [days]",
            about: "Birthdays in the next days",
            handler: Shell::birthdays,
        },
        Entry {
            name: "note-add",
            aliases: &["add-note"],
            keywords: &["note", "write", "memo"],
            usage: "note-add [title]",
            about: "Write a note",
            handler: Shell::note_add,
        },
        Entry {
            name: "notes",
            aliases: &[],
            keywords: &["memos"],
            usage: "notes [tag]",
            about: "List notes, optionally only those with a tag",
            handler: Shell::notes,
        },
        Entry {
            name: "note",
            aliases: &["note-view"],
            keywords: &["read"],
            usage: "note [number|title]",
            about: "Show a note",
            handler: Shell::note_view,
        },
        Entry {
            name: "note-edit",
            aliases: &[],
            keywords: &["rewrite"],
            usage: "note-edit [number|title] [text]",
            about: "Replace the text of a note",
            handler: Shell::note_edit,
        },
        Entry {
            name: "note-delete",
            aliases: &["note-rm"],
            keywords: &["discard"],
            usage: "note-delete [number|title]",
            about: "Delete a note",
            handler: Shell::note_delete,
        },
        Entry {
            name: "tag",
            aliases: &["note-tag"],
            keywords: &["label", "tags"],
            usage: "tag [number|title] [tags...]",
            about: "Add tags to a note",
            handler: Shell::note_tag,
        },
        Entry {
            name: "note-search",
            aliases: &["find-note"],
            keywords: &["grep"],
            usage: "note-search [text]",
            about: "Find notes by text or tag",
            handler: Shell::note_search,
        },
        Entry {
            name: "save",
            aliases: &[],
            keywords: &["store", "write", "flush"],
            usage: "save",
            about: "Save now",
            handler: Shell::save,
        },
        Entry {
            name: "exit",
            aliases: &["quit", "close", "bye"],
            keywords: &["leave", "goodbye"],
            usage: "exit",
            about: "Save and leave",
            handler: Shell::exit,
        },
    ]
}
