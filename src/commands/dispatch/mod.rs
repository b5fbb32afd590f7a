//! Command dispatch logic for wayfind

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use tracing::debug;
use wayfind_core::config::WayfindConfig;
use wayfind_core::error::Result;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, source) = WayfindConfig::discover(cli.config.as_deref(), &cwd)?;

    debug!(
        elapsed = ?start.elapsed(),
        config = ?source,
        "load_config"
    );

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
