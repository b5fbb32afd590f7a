//! CLI argument parsing for wayfind
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CostArgs, EstimateArgs, PathArgs, StatsArgs};
pub use wayfind_core::format::OutputFormat;
use parse::parse_format;

/// Wayfind - A* shortest paths over weighted edge lists
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./wayfind.toml, then the user config directory)
    #[arg(long, global = true, env = "WAYFIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log search statistics and timing
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the minimum-cost path between two nodes with A* search
    Path(PathArgs),

    /// Recompute the cost of a given node sequence
    Cost(CostArgs),

    /// Look up the heuristic estimate between two nodes
    Estimate(EstimateArgs),

    /// Summarize a loaded graph
    Stats(StatsArgs),
}
