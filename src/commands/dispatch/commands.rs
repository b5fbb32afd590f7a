//! Command implementations for the Commands enum

use super::command::{Command, CommandContext};
use crate::cli::Commands;
use crate::commands;
use wayfind_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path(args) => commands::path::execute(ctx, args),
            Commands::Cost(args) => commands::cost::execute(ctx, args),
            Commands::Estimate(args) => commands::estimate::execute(ctx, args),
            Commands::Stats(args) => commands::stats::execute(ctx, args),
        }
    }
}
