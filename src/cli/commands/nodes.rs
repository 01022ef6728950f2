//! nodes command - Print the node set in processing order

use anyhow::Result;

use super::helpers::{build_engine, load_config};
use crate::cli::args::EngineArgs;
use crate::cli::Context;
use crate::ui::output;

/// Print one node per line.
pub fn nodes(ctx: &Context, args: &EngineArgs) -> Result<()> {
    let config = load_config(ctx)?;
    let engine = build_engine(ctx, &config, args)?;

    if !engine.nodes().is_empty() {
        output::result(output::format_list(engine.nodes(), ""));
    }

    Ok(())
}
