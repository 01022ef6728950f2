//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! Results go to stdout; diagnostics go to stderr. When the JSON format is
//! selected, results are machine-readable and nothing else is written to
//! stdout.

use serde::Serialize;
use std::fmt::Display;

use crate::core::coloring::Coloring;
use crate::core::config::OutputFormat;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a result. Results are shown even in quiet mode.
pub fn result(message: impl Display) {
    println!("{}", message);
}

/// Print a value as pretty JSON.
pub fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Render a coloring in the requested format.
pub fn format_coloring(coloring: &Coloring, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => coloring.to_string(),
        OutputFormat::Json => serde_json::to_string(coloring)?,
    })
}

/// Render a coloring one color per line, `color 0: a, c`.
pub fn format_groups(coloring: &Coloring) -> String {
    coloring
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let members: Vec<&str> = group.iter().map(|n| n.as_str()).collect();
            format!("color {}: {}", index, members.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}
