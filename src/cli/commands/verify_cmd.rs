//! verify command - Check a coloring against an edge list

use anyhow::{bail, Context as _, Result};
use std::path::Path;

use super::helpers::read_edges;
use crate::cli::Context;
use crate::core::coloring::Coloring;
use crate::core::graph::NeighbourRelation;
use crate::engine::verify_coloring;
use crate::ui::output;

/// Verify a JSON coloring file against an edge list file.
pub fn verify(ctx: &Context, edges: &Path, coloring: &Path, json_input: bool) -> Result<()> {
    let relation = NeighbourRelation::from_edges(read_edges(ctx, Some(edges), json_input)?);

    let path = ctx.resolve(coloring)?;
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let coloring: Coloring = serde_json::from_str(&text)
        .with_context(|| format!("Invalid coloring in {}", path.display()))?;

    let result = verify_coloring(&relation, &coloring);
    if !result.ok {
        for error in &result.errors {
            output::error(error);
        }
        bail!("coloring has {} violation(s)", result.errors.len());
    }

    output::print(
        format!(
            "Coloring is valid: {} node(s) in {} color(s).",
            relation.nodes().len(),
            coloring.len()
        ),
        ctx.verbosity(),
    );
    Ok(())
}
