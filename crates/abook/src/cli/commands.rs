//! # CLI Layer
//!
//! This module is **one possible UI client** for abook; it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data directory, load config, open the API
//! 3. **Dispatch**: Route each subcommand to one API call, or start the shell
//! 4. **Persistence**: Save once after a command that changed something
//! 5. **Error Handling**: Propagate errors to `main`, which prints them and exits 1

use super::render::{self, Listing};
use super::setup::{parse_cli, Commands, NoteCommands, PhoneCommands};
use super::shell::{Prompter, Shell};
use abookapp::api::AbookApi;
use abookapp::commands::contacts::{ContactField, NewContact};
use abookapp::commands::CmdResult;
use abookapp::config::{self, AbookConfig};
use abookapp::init::{initialize, AbookContext};
use abookapp::store::DataStore;
use anyhow::Result;
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ABOOK_LOG";

pub fn run() -> Result<()> {
    let cli = parse_cli();
    init_logging(cli.verbose);

    // The template needs no data directory, so it works before one exists.
    if let Some(Commands::Config { template: true }) = &cli.command {
        print!("{}", config::template());
        return Ok(());
    }

    let AbookContext {
        mut api,
        config,
        data_dir,
    } = initialize(cli.data.clone())?;
    let today = chrono::Local::now().date_naive();
    tracing::debug!(data_dir = %data_dir.display(), %today, "dispatching");

    match cli.command {
        None | Some(Commands::Shell) => run_shell(api, config, today),
        Some(Commands::Config { .. }) => {
            let mut entries = config.entries();
            entries.push(("data_dir", data_dir.display().to_string()));
            print!("{}", render::render_config(&entries));
            Ok(())
        }
        Some(command) => {
            let (result, listing) = dispatch(&mut api, &config, command, today)?;
            api.save_if_dirty()?;
            print!("{}", render::render_result(&result, listing, today));
            Ok(())
        }
    }
}

/// `ABOOK_LOG` takes an `EnvFilter` directive. Without it only warnings
/// show, or debug output with `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_shell<S: DataStore>(api: AbookApi<S>, config: AbookConfig, today: NaiveDate) -> Result<()> {
    let stdin = std::io::stdin();
    let prompter = Prompter::new(stdin.lock(), std::io::stdout());
    let mut shell = Shell::new(api, config, prompter, today)?;
    shell.run()
}

/// One subcommand, one API call. Mutations only mark the API as dirty;
/// the caller decides when to save.
fn dispatch<S: DataStore>(
    api: &mut AbookApi<S>,
    config: &AbookConfig,
    command: Commands,
    today: NaiveDate,
) -> Result<(CmdResult, Listing)> {
    let outcome = match command {
        Commands::Add {
            name,
            phones,
            address,
            birthday,
            email,
            overwrite,
        } => (
            api.create_contact(NewContact {
                name,
                phones,
                address,
                birthday,
                email,
                overwrite,
            })?,
            Listing::Quiet,
        ),
        Commands::Set { name, field, value } => {
            (api.add_field(&name, field.into(), &value)?, Listing::Quiet)
        }
        Commands::Unset { name, field } => (api.clear_field(&name, field.into())?, Listing::Quiet),
        Commands::Phone(phone) => match phone {
            PhoneCommands::Add { name, phone } => (
                api.add_field(&name, ContactField::Phone, &phone)?,
                Listing::Quiet,
            ),
            PhoneCommands::Remove { name, phone } => {
                (api.remove_phone(&name, &phone)?, Listing::Quiet)
            }
            PhoneCommands::Edit { name, old, new } => {
                (api.edit_phone(&name, &old, &new)?, Listing::Quiet)
            }
            PhoneCommands::Change { name, phone } => {
                (api.change_phone(&name, &phone)?, Listing::Quiet)
            }
            PhoneCommands::List { name } => (api.phones(&name)?, Listing::Phones),
        },
        Commands::View { name } => (api.view_contact(&name)?, Listing::Record),
        Commands::Show { page, page_size } => (
            api.list_contacts(page, page_size.unwrap_or(config.page_size))?,
            Listing::Records,
        ),
        Commands::Delete { name } => (api.delete_contact(&name)?, Listing::Quiet),
        Commands::Rename { old, new } => (api.rename_contact(&old, &new)?, Listing::Quiet),
        Commands::Search { query } => (api.search_contacts(&query.join(" "))?, Listing::Records),
        Commands::Birthday { name } => (api.birthday(&name, today)?, Listing::Quiet),
        Commands::Birthdays { days } => (
            api.birthdays(days.unwrap_or(config.birthday_days), today)?,
            Listing::Birthdays,
        ),
        Commands::Note(note) => match note {
            NoteCommands::Add { title, body, tags } => {
                (api.add_note(&title, &body.join(" "), &tags)?, Listing::Quiet)
            }
            NoteCommands::List { tag } => (api.list_notes(tag.as_deref())?, Listing::Notes),
            NoteCommands::View { note } => (api.view_note(&note)?, Listing::Note),
            NoteCommands::Edit { note, body } => {
                (api.edit_note(&note, &body.join(" "))?, Listing::Quiet)
            }
            NoteCommands::Delete { note } => (api.delete_note(&note)?, Listing::Quiet),
            NoteCommands::Tag { note, tags } => (api.tag_note(&note, &tags)?, Listing::Quiet),
            NoteCommands::Search { query } => {
                (api.search_notes(&query.join(" "))?, Listing::Notes)
            }
        },
        Commands::Shell | Commands::Config { .. } => {
            anyhow::bail!("shell and config are not dispatched")
        }
    };
    Ok(outcome)
}
