use clap::Args;
use std::path::PathBuf;

use super::parse::parse_node;
use wayfind_core::NodeId;

/// Arguments for `wayfind path`
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Starting node
    #[arg(value_parser = parse_node)]
    pub start: NodeId,

    /// Goal node
    #[arg(value_parser = parse_node)]
    pub goal: NodeId,

    /// Edge file (`from,to,weight` rows); `.csv` is appended when missing
    #[arg(long, short = 'e')]
    pub edges: PathBuf,

    /// Heuristic file (`node,est_1,est_2,...` rows)
    #[arg(long = "heuristics", short = 'H')]
    pub heuristics: Option<PathBuf>,

    /// Search with a zero estimate (Dijkstra) instead of the heuristic file
    #[arg(long, conflicts_with = "heuristics")]
    pub no_heuristic: bool,

    /// Abort after this many node expansions
    #[arg(long)]
    pub max_steps: Option<usize>,
}

/// Arguments for `wayfind cost`
#[derive(Args, Debug, Clone)]
pub struct CostArgs {
    /// Node sequence to evaluate
    #[arg(required = true, num_args = 1.., value_parser = parse_node)]
    pub nodes: Vec<NodeId>,

    /// Edge file (`from,to,weight` rows)
    #[arg(long, short = 'e')]
    pub edges: PathBuf,
}

/// Arguments for `wayfind estimate`
#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    #[arg(value_parser = parse_node)]
    pub a: NodeId,

    #[arg(value_parser = parse_node)]
    pub b: NodeId,

    /// Heuristic file (`node,est_1,est_2,...` rows)
    #[arg(long = "heuristics", short = 'H')]
    pub heuristics: PathBuf,
}

/// Arguments for `wayfind stats`
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Edge file (`from,to,weight` rows)
    #[arg(long, short = 'e')]
    pub edges: PathBuf,
}
