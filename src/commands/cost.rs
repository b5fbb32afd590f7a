//! `wayfind cost` - recompute the cost of a node sequence

use crate::cli::{CostArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::inputs::{format_path, load_graph};
use wayfind_core::error::Result;
use wayfind_core::records::{header, path_relative_to_cwd};
use wayfind_core::{Cost, PathEvaluator};

/// Execute the cost command
pub fn execute(ctx: &CommandContext, args: &CostArgs) -> Result<()> {
    let (graph, edges_path) = load_graph(&args.edges, ctx.config)?;

    let weights = PathEvaluator::new(&graph).edge_weights(&args.nodes)?;
    let total: Cost = weights.iter().copied().sum();

    match ctx.cli.format {
        OutputFormat::Human => {
            println!("[{}]{}", total, format_path(&args.nodes));
            if ctx.cli.verbose {
                for (pair, weight) in args.nodes.windows(2).zip(&weights) {
                    println!("  {} -> {}  {}", pair[0], pair[1], weight);
                }
            }
        }
        OutputFormat::Json => {
            let edges: Vec<_> = args
                .nodes
                .windows(2)
                .zip(&weights)
                .map(|(pair, weight)| {
                    serde_json::json!({
                        "from": pair[0],
                        "to": pair[1],
                        "weight": weight,
                    })
                })
                .collect();
            let output = serde_json::json!({
                "path": args.nodes,
                "cost": total,
                "edges": edges,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header(
                    "cost",
                    &[
                        ("edges", path_relative_to_cwd(&edges_path)),
                        ("cost", total.to_string()),
                        ("hops", weights.len().to_string()),
                    ],
                )
            );
            for (pair, weight) in args.nodes.windows(2).zip(&weights) {
                println!("E {} {} weight={}", pair[0], pair[1], weight);
            }
        }
    }

    Ok(())
}
