//! core::input
//!
//! Reading edge lists from text.
//!
//! # Formats
//!
//! - **Lines**: one edge per line, endpoints separated by a comma or by
//!   whitespace. Blank lines and lines starting with `#` are skipped.
//!   Endpoints are trimmed.
//! - **JSON**: an array of two-element string arrays, `[["a","b"], ...]`.
//!
//! These are conveniences for the CLI. The engine itself only ever sees
//! [`Edge`] values.

use thiserror::Error;

use super::types::{Edge, TypeError};

/// Errors from reading an edge list.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line}: expected two endpoints, found {found}")]
    MalformedLine { line: usize, found: usize },

    #[error("line {line}: {source}")]
    InvalidNode {
        line: usize,
        #[source]
        source: TypeError,
    },

    #[error("invalid JSON edge list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse the line format.
///
/// # Example
///
/// ```
/// use colorwork::core::input::parse_edges;
///
/// let edges = parse_edges("# borders\nda,se\nno da\n").unwrap();
/// assert_eq!(edges.len(), 2);
/// assert_eq!(edges[1].first().as_str(), "no");
/// ```
pub fn parse_edges(text: &str) -> Result<Vec<Edge>, InputError> {
    let mut edges = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = if trimmed.contains(',') {
            trimmed.split(',').map(str::trim).collect()
        } else {
            trimmed.split_whitespace().collect()
        };

        if fields.len() != 2 {
            return Err(InputError::MalformedLine {
                line,
                found: fields.len(),
            });
        }

        let edge = Edge::parse(fields[0], fields[1])
            .map_err(|source| InputError::InvalidNode { line, source })?;
        edges.push(edge);
    }

    Ok(edges)
}

/// Parse the JSON format.
pub fn parse_edges_json(text: &str) -> Result<Vec<Edge>, InputError> {
    Ok(serde_json::from_str(text)?)
}
