//! `wayfind estimate` - look up one heuristic estimate

use crate::cli::{EstimateArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::inputs::load_heuristics;
use wayfind_core::error::Result;
use wayfind_core::graph::pair_slot;
use wayfind_core::records::{header, path_relative_to_cwd};

/// Execute the estimate command
pub fn execute(ctx: &CommandContext, args: &EstimateArgs) -> Result<()> {
    let (table, table_path) = load_heuristics(&args.heuristics, ctx.config)?;
    let estimate = table.lookup(args.a, args.b)?;
    // Columns are 1-based estimate positions after the node field
    let slot = pair_slot(args.a, args.b).map(|slot| (slot.row, slot.index + 1));

    match ctx.cli.format {
        OutputFormat::Human => {
            println!("h({}, {}) = {}", args.a, args.b, estimate);
            if let Some((row, column)) = slot.filter(|_| !ctx.cli.quiet) {
                println!("  row {} column {}", row, column);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "a": args.a,
                "b": args.b,
                "estimate": estimate,
                "row": slot.map(|(row, _)| row),
                "column": slot.map(|(_, column)| column),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            let mut fields = vec![
                ("heuristics", path_relative_to_cwd(&table_path)),
                ("a", args.a.to_string()),
                ("b", args.b.to_string()),
                ("estimate", estimate.to_string()),
            ];
            if let Some((row, column)) = slot {
                fields.push(("row", row.to_string()));
                fields.push(("column", column.to_string()));
            }
            println!("{}", header("estimate", &fields));
        }
    }

    Ok(())
}
