use abookapp::commands::contacts::ContactField;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "abook", bin_name = "abook", version, disable_help_subcommand = true)]
#[command(
    about = "Console address book and notebook with birthday reminders",
    long_about = None,
    after_help = "Run without a command to start the interactive shell."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (overrides ABOOK_DATA)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    Phone,
    Address,
    Birthday,
    Email,
}

impl From<FieldArg> for ContactField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Phone => ContactField::Phone,
            FieldArg::Address => ContactField::Address,
            FieldArg::Birthday => ContactField::Birthday,
            FieldArg::Email => ContactField::Email,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a contact
    #[command(alias = "create", display_order = 1)]
    Add {
        name: String,

        /// Phone number, repeat for more than one
        #[arg(short, long = "phone")]
        phones: Vec<String>,

        #[arg(short, long)]
        address: Option<String>,

        /// Birthday in the configured format
        #[arg(short, long)]
        birthday: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Replace an existing contact with the same name
        #[arg(long)]
        overwrite: bool,
    },

    /// Add a phone or set the address, birthday or email of a contact
    #[command(display_order = 2)]
    Set {
        name: String,
        #[arg(value_enum)]
        field: FieldArg,
        value: String,
    },

    /// Clear a field of a contact (phone clears all phones)
    #[command(display_order = 3)]
    Unset {
        name: String,
        #[arg(value_enum)]
        field: FieldArg,
    },

    /// Manage the phones of a contact
    #[command(subcommand, display_order = 4)]
    Phone(PhoneCommands),

    /// Show one contact
    #[command(alias = "v", display_order = 5)]
    View { name: String },

    /// List contacts, one page at a time
    #[command(alias = "ls", display_order = 6)]
    Show {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Contacts per page (0 shows all), defaults to page_size from config
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Delete a contact
    #[command(alias = "rm", display_order = 7)]
    Delete { name: String },

    /// Rename a contact
    #[command(display_order = 8)]
    Rename { old: String, new: String },

    /// Search contacts by name or phone
    #[command(display_order = 9)]
    Search {
        query: Vec<String>,
    },

    /// Days left until a contact's birthday
    #[command(display_order = 10)]
    Birthday { name: String },

    /// Upcoming birthdays
    #[command(display_order = 11)]
    Birthdays {
        /// Window in days, defaults to birthday_days from config
        #[arg(short, long)]
        days: Option<i64>,
    },

    /// Manage notes
    #[command(subcommand, display_order = 20)]
    Note(NoteCommands),

    /// Start the interactive shell
    #[command(display_order = 30)]
    Shell,

    /// Show the effective configuration
    #[command(display_order = 31)]
    Config {
        /// Print a commented sample abook.toml instead
        #[arg(long)]
        template: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PhoneCommands {
    /// Add a phone
    Add { name: String, phone: String },

    /// Remove a phone
    #[command(alias = "rm")]
    Remove { name: String, phone: String },

    /// Replace one phone with another
    Edit {
        name: String,
        old: String,
        new: String,
    },

    /// Replace all phones with a single one
    Change { name: String, phone: String },

    /// List the phones of a contact
    #[command(alias = "ls")]
    List { name: String },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Add a note
    Add {
        title: String,

        /// Note text
        body: Vec<String>,

        /// Tag, repeat for more than one
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// List notes
    #[command(alias = "ls")]
    List {
        /// Only notes with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show a note by number or title
    #[command(alias = "v")]
    View { note: String },

    /// Replace the text of a note
    #[command(alias = "e")]
    Edit {
        note: String,
        #[arg(required = true)]
        body: Vec<String>,
    },

    /// Delete a note by number or title
    #[command(alias = "rm")]
    Delete { note: String },

    /// Add tags to a note
    Tag {
        note: String,
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Search notes by text or tag
    Search {
        query: Vec<String>,
    },
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
