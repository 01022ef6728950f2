//! Shared helpers for command handlers

use anyhow::{Context as _, Result};
use std::io::Read;
use std::path::Path;

use crate::cli::args::EngineArgs;
use crate::cli::Context;
use crate::core::config::Config;
use crate::core::input::{parse_edges, parse_edges_json};
use crate::core::types::Edge;
use crate::engine::ColoringEngine;
use crate::ui::output;

/// Load configuration for the working directory, printing any warnings.
pub fn load_config(ctx: &Context) -> Result<Config> {
    let dir = ctx.working_dir()?;
    let result = Config::load(Some(&dir)).context("Failed to load config")?;

    for warning in &result.warnings {
        output::warn(&warning.message, ctx.verbosity());
    }

    Ok(result.config)
}

/// Read an edge list from a file, or from stdin when `file` is absent or `-`.
pub fn read_edges(ctx: &Context, file: Option<&Path>, json: bool) -> Result<Vec<Edge>> {
    let (text, source) = match file {
        Some(path) if path != Path::new("-") => {
            let path = ctx.resolve(path)?;
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?;
            (text, path.display().to_string())
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read edges from stdin")?;
            (text, "stdin".to_string())
        }
    };

    let edges = if json {
        parse_edges_json(&text)
    } else {
        parse_edges(&text)
    }
    .with_context(|| format!("Invalid edge list in {}", source))?;

    tracing::debug!(source = %source, edges = edges.len(), "read edge list");
    Ok(edges)
}

/// Build an engine from CLI flags, falling back to configured defaults.
pub fn build_engine(ctx: &Context, config: &Config, args: &EngineArgs) -> Result<ColoringEngine> {
    let mut options = config.engine_options();
    if let Some(policy) = args.self_loops {
        options = options.self_loops(policy);
    }
    if let Some(order) = args.order {
        options = options.node_order(order);
    }

    let edges = read_edges(ctx, args.file.as_deref(), args.json_input)?;
    Ok(ColoringEngine::with_options(edges, options)?)
}
