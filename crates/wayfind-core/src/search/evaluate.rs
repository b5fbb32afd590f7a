//! Independent cost recomputation for found paths

use crate::error::SearchError;
use crate::graph::{Cost, GraphProvider, NodeId};

/// Re-derives path costs from the stored edges, using the first matching
/// edge for every transition.
pub struct PathEvaluator<'a> {
    graph: &'a dyn GraphProvider,
}

impl<'a> PathEvaluator<'a> {
    pub fn new(graph: &'a dyn GraphProvider) -> Self {
        Self { graph }
    }

    /// Weight of each consecutive transition, in path order
    pub fn edge_weights(&self, path: &[NodeId]) -> Result<Vec<Cost>, SearchError> {
        path.windows(2)
            .map(|pair| self.graph.edge_weight_to(pair[0], pair[1]))
            .collect()
    }

    /// Sum of transition weights; zero for empty and single-node paths
    pub fn total_cost(&self, path: &[NodeId]) -> Result<Cost, SearchError> {
        path.windows(2)
            .map(|pair| self.graph.edge_weight_to(pair[0], pair[1]))
            .sum()
    }
}
