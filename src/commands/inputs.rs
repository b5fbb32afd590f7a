//! Input resolution and loading shared by the commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use wayfind_core::config::WayfindConfig;
use wayfind_core::error::Result;
use wayfind_core::io::resolve_input_path;
use wayfind_core::trace_time;
use wayfind_core::{GraphStore, HeuristicTable};

/// Resolve and load the edge file
pub fn load_graph(path: &Path, config: &WayfindConfig) -> Result<(GraphStore, PathBuf)> {
    let start = Instant::now();
    let resolved = resolve_input_path(path, &config.input.extension)?;
    let graph = GraphStore::load(&resolved, config.input.delimiter)?;
    trace_time!(
        start,
        "load_graph",
        nodes = graph.node_count(),
        edges = graph.edge_count()
    );
    Ok((graph, resolved))
}

/// Resolve and load the heuristic file
pub fn load_heuristics(path: &Path, config: &WayfindConfig) -> Result<(HeuristicTable, PathBuf)> {
    let start = Instant::now();
    let resolved = resolve_input_path(path, &config.input.extension)?;
    let table = HeuristicTable::load(&resolved, config.input.delimiter)?;
    trace_time!(start, "load_heuristics", rows = table.len());
    Ok((table, resolved))
}

/// Render a node sequence as `1 - 2 - 3`
pub fn format_path<T: std::fmt::Display>(nodes: &[T]) -> String {
    nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" - ")
}
