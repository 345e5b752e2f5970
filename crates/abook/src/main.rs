//! # Abook CLI Architecture
//!
//! Abook ships with a terminal client, but the binary is intentionally thin:
//! the CLI lives in `src/cli/`, while this file only invokes `cli::run()` and
//! handles process termination. UI concerns stay **entirely separate** from
//! the application logic.
//!
//! ## Workspace Structure
//!
//! Abook is organized as a Cargo workspace with two crates:
//! - `crates/abookapp/` - Core library with UI-agnostic business logic
//! - `crates/abook/` - This CLI tool, depends on the `abookapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/abook/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch + logging setup (commands.rs)                   │
//! │  - Interactive shell with prompts (shell.rs)                │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/abookapp/src/api.rs)                     │
//! │  - Owns the loaded collections, tracks unsaved changes      │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/abookapp/src/commands/*)             │
//! │  - Pure business logic over the collections                 │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward takes normal Rust values and never assumes
//! terminal I/O. The CLI layer is responsible for **all** user-facing
//! concerns: argument parsing, context initialization, prompting, error
//! reporting, and rendering.
//!
//! ## Testing Approach
//!
//! - **Commands layer**: unit tests of the business logic over plain collections.
//! - **API layer**: tests over `InMemoryStore` for dirty tracking and saving.
//! - **CLI layer**: clap parsing tests, rendering tests on canned `CmdResult`
//!   values, shell sessions scripted through an in-memory reader, and
//!   end-to-end runs of the binary in `tests/`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
