//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves configuration and command-specific arguments
//! 2. Calls the engine or the flights collaborator
//! 3. Formats and displays output
//!
//! Handlers return `anyhow::Result`; `main` prints the error chain and
//! exits with status 1.

mod color;
mod completion;
mod config_cmd;
mod flights;
mod helpers;
mod nodes;
mod verify_cmd;

// Re-export command functions for testing and direct invocation
pub use color::color;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use flights::flights;
pub use nodes::nodes;
pub use verify_cmd::verify;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Color {
            engine,
            format,
            no_verify,
            stats,
        } => color::color(ctx, &engine, format, no_verify, stats),
        Command::Nodes { engine } => nodes::nodes(ctx, &engine),
        Command::Verify {
            edges,
            coloring,
            json_input,
        } => verify_cmd::verify(ctx, &edges, &coloring, json_input),
        Command::Flights { csv, format, query } => {
            flights::flights(ctx, csv.as_deref(), format, &query)
        }
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
