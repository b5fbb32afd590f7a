use crate::error::SearchError;
use crate::graph::types::{Cost, Edge, NodeId};

/// Trait for providing read-only graph adjacency to the search engine
pub trait GraphProvider {
    /// Outgoing edges of `node` in insertion order; empty for dead ends
    fn neighbors(&self, node: NodeId) -> &[Edge];

    /// Weight of the first stored edge from `node` to `neighbor`.
    ///
    /// Later parallel edges are ignored even when cheaper.
    fn edge_weight_to(&self, node: NodeId, neighbor: NodeId) -> Result<Cost, SearchError> {
        self.neighbors(node)
            .iter()
            .find(|edge| edge.to == neighbor)
            .map(|edge| edge.weight)
            .ok_or(SearchError::EdgeNotFound {
                from: node,
                to: neighbor,
            })
    }
}
