//! color command - Color an edge list with greedy first-fit

use anyhow::{bail, Result};
use serde::Serialize;

use super::helpers::{build_engine, load_config};
use crate::cli::args::EngineArgs;
use crate::cli::Context;
use crate::core::coloring::Coloring;
use crate::core::config::OutputFormat;
use crate::engine::modes::{NodeOrder, SelfLoopPolicy};
use crate::ui::output;

/// Counts reported by `--stats`.
#[derive(Debug, Serialize)]
struct Stats {
    nodes: usize,
    edges: usize,
    colors: usize,
    max_degree: usize,
    order: NodeOrder,
    self_loops: SelfLoopPolicy,
}

/// JSON shape of `color --stats --format json`.
#[derive(Debug, Serialize)]
struct Report<'a> {
    coloring: &'a Coloring,
    #[serde(flatten)]
    stats: Stats,
}

/// Color the edge list and print the partition.
pub fn color(
    ctx: &Context,
    args: &EngineArgs,
    format: Option<OutputFormat>,
    no_verify: bool,
    stats: bool,
) -> Result<()> {
    let config = load_config(ctx)?;
    let format = format.unwrap_or_else(|| config.output_format());

    let mut engine = build_engine(ctx, &config, args)?;
    engine.color();

    if !no_verify && config.verify() {
        let result = engine.verify();
        if !result.ok {
            for error in &result.errors {
                output::error(error);
            }
            bail!(
                "coloring failed verification with {} violation(s)",
                result.errors.len()
            );
        }
    }

    let coloring = engine.coloring();
    let options = engine.options();
    let counts = Stats {
        nodes: engine.nodes().len(),
        edges: engine.edges().len(),
        colors: coloring.len(),
        max_degree: engine.relation().max_degree(),
        order: options.node_order,
        self_loops: options.self_loops,
    };

    match (format, stats) {
        (OutputFormat::Json, true) => output::json(&Report {
            coloring,
            stats: counts,
        })?,
        (_, false) => output::result(output::format_coloring(coloring, format)?),
        (OutputFormat::Text, true) => {
            output::result(output::format_groups(coloring));
            output::result(format!("nodes: {}", counts.nodes));
            output::result(format!("edges: {}", counts.edges));
            output::result(format!("colors: {}", counts.colors));
            output::result(format!("max degree: {}", counts.max_degree));
            output::result(format!("order: {}", counts.order));
            output::result(format!("self-loops: {}", counts.self_loops));
        }
    }

    Ok(())
}
