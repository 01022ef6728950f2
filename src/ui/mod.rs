//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! Results go to stdout. Errors, warnings, and tracing output go to stderr.

pub mod output;
