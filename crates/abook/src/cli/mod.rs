//! # CLI Behavior
//!
//! This is **one possible UI client** for abook, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Two Ways In
//!
//! ### Naked Execution (`abook`)
//!
//! Running `abook` with no arguments starts the interactive shell, the same
//! as `abook shell`. The shell keeps the address book open, asks for missing
//! arguments and saves on `exit` or end of input.
//!
//! ### One-Shot Commands (`abook view Anna`)
//!
//! Every shell operation is also a subcommand. A one-shot command loads the
//! data, runs a single API call, saves if it changed something and prints
//! the result. Invalid input fails the command with exit code 1 instead of
//! prompting again.
//!
//! ## Module Structure
//!
//! - `commands`: Logging setup and subcommand dispatch
//! - `render`: Output formatting (aligned columns, colors, messages)
//! - `setup`: Argument parsing via clap, help text
//! - `shell`: The interactive loop, its command table and prompts

mod commands;
mod render;
pub mod setup;
mod shell;

pub use commands::run;
