//! Wayfind - heuristic shortest-path search CLI
//!
//! Loads a weighted edge list and a heuristic distance table, then finds
//! minimum-cost paths with A* search.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use wayfind_core::error::WayfindError;
use wayfind_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        // Argument errors surface before `cli.format` exists
        Err(err) if json_requested(std::env::args()) => {
            return report(&WayfindError::UsageError(err.to_string()), OutputFormat::Json, false);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, cli.format, cli.quiet),
    }
}

/// Print an error on stderr and turn it into the process exit code
fn report(err: &WayfindError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
    } else if !quiet {
        eprintln!("error: {}", err);
    }
    ExitCode::from(err.exit_code() as u8)
}

/// True when the raw arguments ask for `--format json`
fn json_requested(args: impl Iterator<Item = String>) -> bool {
    let args: Vec<String> = args.skip(1).collect();
    args.iter().any(|a| a == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
