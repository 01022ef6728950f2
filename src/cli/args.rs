//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::OutputFormat;
use crate::engine::modes::{NodeOrder, SelfLoopPolicy};

/// colorwork - greedy first-fit graph coloring
#[derive(Parser, Debug)]
#[command(name = "cw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if cw was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Options shared by commands that build an engine.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Edge list file (`-` or omitted for stdin)
    pub file: Option<PathBuf>,

    /// Read the edge list as JSON (`[["a","b"], ...]`)
    #[arg(long)]
    pub json_input: bool,

    /// Self-loop handling: ignore or reject
    #[arg(long, value_name = "POLICY")]
    pub self_loops: Option<SelfLoopPolicy>,

    /// Node processing order: first-appearance or sorted
    #[arg(long, value_name = "ORDER")]
    pub order: Option<NodeOrder>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Color a neighbour relation with greedy first-fit
    #[command(
        name = "color",
        long_about = "Color a neighbour relation with greedy first-fit.\n\n\
            Reads an edge list, assigns every node to the first color group that \
            holds none of its neighbours, and prints the resulting groups. The \
            result is verified before it is printed unless verification is disabled.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Color the edges in a file (one `a,b` pair per line)
    cw color borders.txt

    # Read from stdin and print JSON
    printf 'dk,se\\nse,no\\n' | cw color --format json

    # Fail on self-loops instead of ignoring them
    cw color borders.txt --self-loops reject

    # Show counts alongside the groups
    cw color borders.txt --stats"
    )]
    Color {
        #[command(flatten)]
        engine: EngineArgs,

        /// Output format: text or json
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,

        /// Skip verification of the result
        #[arg(long)]
        no_verify: bool,

        /// Print node, edge, and color counts
        #[arg(long)]
        stats: bool,
    },

    /// Print the node set in processing order
    #[command(name = "nodes")]
    Nodes {
        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Check a coloring against an edge list
    #[command(
        name = "verify",
        long_about = "Check a coloring against an edge list.\n\n\
            The coloring is a JSON array of arrays of node identifiers, as printed by \
            `cw color --format json`. Every violation is listed and the command exits \
            with a failure status if any are found.",
        after_help = "\
WORKFLOW EXAMPLES:
    cw color borders.txt --format json > colors.json
    cw verify borders.txt colors.json"
    )]
    Verify {
        /// Edge list file
        edges: PathBuf,

        /// Coloring file (JSON)
        coloring: PathBuf,

        /// Read the edge list as JSON
        #[arg(long)]
        json_input: bool,
    },

    /// Query flight records from a CSV file
    #[command(
        name = "flights",
        after_help = "\
WORKFLOW EXAMPLES:
    cw flights --csv flight_list.csv arrivals Copenhagen
    cw flights --csv flight_list.csv origins Ibiza
    cw flights --csv flight_list.csv between 2022-03-20 2022-06-21"
    )]
    Flights {
        /// CSV file (defaults to `flights.csv` in project config)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Output format: text or json
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,

        #[command(subcommand)]
        query: FlightsQuery,
    },

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        long_about = "View or modify colorwork configuration.\n\n\
            Project configuration is stored in .colorwork/config.toml under the \
            working directory. Global configuration is read from ~/.colorwork/config.toml.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List effective configuration values
    cw config list

    # Get a specific value
    cw config get coloring.self_loops

    # Set a project value
    cw config set coloring.node_order sorted"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    cw completion bash >> ~/.bashrc

    # Zsh
    cw completion zsh > ~/.zfunc/_cw"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Flight queries
#[derive(Subcommand, Debug, Clone)]
pub enum FlightsQuery {
    /// Arrivals at a city per month (January first)
    Arrivals {
        /// Destination city
        city: String,
    },
    /// Departure cities of flights arriving at a city
    Origins {
        /// Destination city
        city: String,
    },
    /// Number of flights between two dates, inclusive (YYYY-MM-DD)
    Between { start: NaiveDate, end: NaiveDate },
    /// Show a single record
    Show {
        /// Record identifier
        id: String,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a project configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
