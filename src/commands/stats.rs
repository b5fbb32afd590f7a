//! `wayfind stats` - summarize an edge file

use crate::cli::{OutputFormat, StatsArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::inputs::load_graph;
use wayfind_core::error::Result;
use wayfind_core::records::{header, path_relative_to_cwd};

/// Execute the stats command
pub fn execute(ctx: &CommandContext, args: &StatsArgs) -> Result<()> {
    let (graph, edges_path) = load_graph(&args.edges, ctx.config)?;
    let summary = graph.summary();

    match ctx.cli.format {
        OutputFormat::Human => {
            println!("Nodes: {}", summary.nodes);
            println!("Edges: {}", summary.edges);
            println!("Sources: {}", summary.sources);
            println!("Parallel pairs: {}", summary.parallel_pairs);
            if summary.dead_ends.is_empty() {
                println!("Dead ends: none");
            } else {
                let ids: Vec<String> = summary.dead_ends.iter().map(|n| n.to_string()).collect();
                println!("Dead ends: {}", ids.join(", "));
            }
        }
        OutputFormat::Json => {
            let mut output = serde_json::to_value(&summary)?;
            if let Some(obj) = output.as_object_mut() {
                obj.insert(
                    "edges_file".to_string(),
                    serde_json::json!(edges_path.display().to_string()),
                );
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header(
                    "stats",
                    &[
                        ("edges_file", path_relative_to_cwd(&edges_path)),
                        ("nodes", summary.nodes.to_string()),
                        ("edges", summary.edges.to_string()),
                        ("sources", summary.sources.to_string()),
                        ("parallel", summary.parallel_pairs.to_string()),
                    ],
                )
            );
            for node in &summary.dead_ends {
                println!("D {}", node);
            }
        }
    }

    Ok(())
}
