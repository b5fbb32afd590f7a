//! `wayfind path` - A* search between two nodes

use crate::cli::{OutputFormat, PathArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::inputs::{format_path, load_graph, load_heuristics};
use wayfind_core::bail_usage;
use wayfind_core::config::HeuristicMode;
use wayfind_core::error::Result;
use wayfind_core::graph::{Heuristic, ZeroHeuristic};
use wayfind_core::records::{header, path_relative_to_cwd};
use wayfind_core::search::PathEvaluator;
use wayfind_core::{AStar, GraphStore, Route};

/// Execute the path command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let cli = ctx.cli;
    let config = ctx.config;

    config.nodes.check(args.start, "start")?;
    config.nodes.check(args.goal, "goal")?;

    let (graph, edges_path) = load_graph(&args.edges, config)?;

    let mode = if args.no_heuristic {
        HeuristicMode::Zero
    } else if args.heuristics.is_some() {
        HeuristicMode::Table
    } else {
        config.search.heuristic
    };

    let table = match (mode, &args.heuristics) {
        (HeuristicMode::Zero, _) => None,
        (HeuristicMode::Table, Some(path)) => Some(load_heuristics(path, config)?.0),
        (HeuristicMode::Table, None) => {
            bail_usage!("--heuristics is required unless --no-heuristic is given")
        }
    };
    let heuristic: &dyn Heuristic = match &table {
        Some(table) => table,
        None => &ZeroHeuristic,
    };

    let max_steps = args.max_steps.or(config.search.max_steps);
    let route = match AStar::new(&graph, heuristic)
        .with_max_steps(max_steps)
        .find(args.start, args.goal)
    {
        Ok(route) => route,
        Err(err) if err.is_no_path() => {
            tracing::debug!(elapsed = ?ctx.start.elapsed(), heuristic = ?mode, "no_path");
            return output_no_path(cli.format, args, &path_relative_to_cwd(&edges_path));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::debug!(
        elapsed = ?ctx.start.elapsed(),
        expanded = route.stats.expanded,
        relaxed = route.stats.relaxed,
        heuristic = ?mode,
        "path_found"
    );

    match cli.format {
        OutputFormat::Human => output_human(cli.quiet, &route),
        OutputFormat::Json => output_json(args, &route)?,
        OutputFormat::Records => {
            output_records(args, &route, &graph, &path_relative_to_cwd(&edges_path))?
        }
    }

    Ok(())
}

fn output_human(quiet: bool, route: &Route) {
    if !quiet {
        println!("A* minimum cost path");
    }
    println!("[{}]{}", route.cost, format_path(&route.path));
    if !quiet && route.cost != route.search_cost {
        eprintln!(
            "note: search cost {} differs from path cost (parallel edges)",
            route.search_cost
        );
    }
}

/// Unreachable goal: a normal negative result, reported on stdout
fn output_no_path(format: OutputFormat, args: &PathArgs, edges: &str) -> Result<()> {
    match format {
        OutputFormat::Human => println!("Failed to find path"),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": args.start,
                "goal": args.goal,
                "found": false,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => println!(
            "{}",
            header(
                "path",
                &[
                    ("edges", edges.to_string()),
                    ("start", args.start.to_string()),
                    ("goal", args.goal.to_string()),
                    ("found", "false".to_string()),
                ],
            )
        ),
    }
    Ok(())
}

fn output_json(args: &PathArgs, route: &Route) -> Result<()> {
    let output = serde_json::json!({
        "start": args.start,
        "goal": args.goal,
        "found": true,
        "path": route.path,
        "cost": route.cost,
        "search_cost": route.search_cost,
        "hops": route.hops(),
        "stats": route.stats,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(args: &PathArgs, route: &Route, graph: &GraphStore, edges: &str) -> Result<()> {
    println!(
        "{}",
        header(
            "path",
            &[
                ("edges", edges.to_string()),
                ("start", args.start.to_string()),
                ("goal", args.goal.to_string()),
                ("found", "true".to_string()),
                ("cost", route.cost.to_string()),
                ("hops", route.hops().to_string()),
                ("expanded", route.stats.expanded.to_string()),
            ],
        )
    );
    for node in &route.path {
        println!("N {}", node);
    }
    let weights = PathEvaluator::new(graph).edge_weights(&route.path)?;
    for (pair, weight) in route.path.windows(2).zip(weights) {
        println!("E {} {} weight={}", pair[0], pair[1], weight);
    }
    Ok(())
}
