//! config command - Get, set, or list configuration values

use anyhow::{bail, Context as _, Result};

use super::helpers::load_config;
use crate::cli::Context;
use crate::core::config::{Config, OutputFormat};
use crate::engine::modes::{NodeOrder, SelfLoopPolicy};
use crate::ui::output;

/// Keys accepted by `get` and `set`.
const KEYS: &[&str] = &[
    "coloring.self_loops",
    "coloring.node_order",
    "output.format",
    "output.verify",
    "flights.csv",
];

/// Effective value of a key, or `None` when the key has no value.
fn effective(config: &Config, key: &str) -> Result<Option<String>> {
    Ok(match key {
        "coloring.self_loops" => Some(config.self_loops().to_string()),
        "coloring.node_order" => Some(config.node_order().to_string()),
        "output.format" => Some(config.output_format().to_string()),
        "output.verify" => Some(config.verify().to_string()),
        "flights.csv" => config.flights_csv().map(|p| p.display().to_string()),
        _ => bail!(
            "Unknown configuration key: {} (expected one of: {})",
            key,
            KEYS.join(", ")
        ),
    })
}

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let config = load_config(ctx)?;

    // Keys without a value print nothing
    if let Some(value) = effective(&config, key)? {
        output::result(value);
    }
    Ok(())
}

/// Set a project configuration value.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let dir = ctx.working_dir()?;
    let mut project = load_config(ctx)?.project.unwrap_or_default();

    match key {
        "coloring.self_loops" => {
            let policy: SelfLoopPolicy = value.parse()?;
            let coloring = project.coloring.get_or_insert_with(Default::default);
            coloring.self_loops = Some(policy);
        }
        "coloring.node_order" => {
            let order: NodeOrder = value.parse()?;
            let coloring = project.coloring.get_or_insert_with(Default::default);
            coloring.node_order = Some(order);
        }
        "output.format" => {
            let format: OutputFormat = value.parse()?;
            let section = project.output.get_or_insert_with(Default::default);
            section.format = Some(format);
        }
        "output.verify" => {
            let verify: bool = value
                .parse()
                .with_context(|| format!("Invalid value for output.verify: '{}'", value))?;
            let section = project.output.get_or_insert_with(Default::default);
            section.verify = Some(verify);
        }
        "flights.csv" => {
            let flights = project.flights.get_or_insert_with(Default::default);
            flights.csv = Some(value.to_string());
        }
        _ => bail!(
            "Unknown configuration key: {} (expected one of: {})",
            key,
            KEYS.join(", ")
        ),
    }

    let path = Config::write_project(&dir, &project).context("Failed to write config")?;
    tracing::debug!(path = %path.display(), key, value, "wrote project config");

    output::print(format!("Set {} = {}", key, value), ctx.verbosity());
    Ok(())
}

/// List all effective configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let config = load_config(ctx)?;
    let verbosity = ctx.verbosity();

    match config.global_config_loaded_from() {
        Some(path) => output::print(format!("# Global: {}", path.display()), verbosity),
        None => output::print("# Global: (none)", verbosity),
    }
    match config.project_config_loaded_from() {
        Some(path) => output::print(format!("# Project: {}", path.display()), verbosity),
        None => output::print("# Project: (none)", verbosity),
    }

    for key in KEYS {
        let value = effective(&config, key)?.unwrap_or_else(|| "(not set)".to_string());
        output::result(format!("{} = {}", key, value));
    }
    Ok(())
}
