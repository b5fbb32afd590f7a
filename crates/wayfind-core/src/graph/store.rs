//! In-memory adjacency store built from edge rows

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::bail_malformed;
use crate::error::Result;
use crate::graph::provider::GraphProvider;
use crate::graph::types::{Cost, Edge, NodeId};
use crate::io::{read_rows, read_rows_from_path, Row};

const EDGE_FIELDS: usize = 3;

/// Weighted directed graph, read-only once built
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    adjacency: HashMap<NodeId, Vec<Edge>>,
    nodes: BTreeSet<NodeId>,
    edge_count: usize,
}

/// Shape of a loaded graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    /// Nodes with at least one outgoing edge
    pub sources: usize,
    /// Nodes that only appear as edge targets
    pub dead_ends: Vec<NodeId>,
    /// Ordered (from, to) pairs stored more than once
    pub parallel_pairs: usize,
}

impl GraphStore {
    /// Build from typed edges. Weights must be finite and non-negative.
    ///
    /// Per-node edge order follows the input order; parallel edges are kept.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, Cost)>,
    {
        let mut graph = GraphStore::default();
        for (idx, (from, to, weight)) in edges.into_iter().enumerate() {
            if !weight.is_finite() || weight.value() < 0.0 {
                bail_malformed!(
                    "edges",
                    idx + 1,
                    format!("weight {} is not a non-negative number", weight)
                );
            }
            graph.push(from, to, weight);
        }
        Ok(graph)
    }

    /// Build from delimited rows of the form `from,to,weight`
    pub fn from_rows(rows: &[Row], source_name: &str) -> Result<Self> {
        let mut graph = GraphStore::default();
        for row in rows {
            if row.fields.len() != EDGE_FIELDS {
                bail_malformed!(
                    source_name,
                    row.line,
                    format!(
                        "expected {} fields, found {}",
                        EDGE_FIELDS,
                        row.fields.len()
                    )
                );
            }
            let from = parse_node(&row.fields[0], source_name, row.line)?;
            let to = parse_node(&row.fields[1], source_name, row.line)?;
            let weight = match Cost::parse_non_negative(&row.fields[2]) {
                Ok(w) => w,
                Err(reason) => bail_malformed!(source_name, row.line, format!("weight {}", reason)),
            };
            graph.push(from, to, weight);
        }
        Ok(graph)
    }

    /// Parse edge rows from in-memory text
    pub fn parse(input: &str, delimiter: char) -> Result<Self> {
        let rows = read_rows(input.as_bytes(), delimiter)?;
        Self::from_rows(&rows, "edges")
    }

    /// Load edge rows from a file
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path, delimiter: char) -> Result<Self> {
        let start = Instant::now();
        let rows = read_rows_from_path(path, delimiter)?;
        let source_name = path.display().to_string();
        let graph = Self::from_rows(&rows, &source_name)?;
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            elapsed = ?start.elapsed(),
            "graph_loaded"
        );
        Ok(graph)
    }

    fn push(&mut self, from: NodeId, to: NodeId, weight: Cost) {
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge::new(to, weight));
        self.nodes.insert(from);
        self.nodes.insert(to);
        self.edge_count += 1;
    }

    /// True if the node appears in any edge
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// All nodes in ascending id order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn summary(&self) -> GraphSummary {
        let dead_ends = self
            .nodes
            .iter()
            .copied()
            .filter(|n| self.neighbors(*n).is_empty())
            .collect();

        let mut parallel_pairs = 0;
        for edges in self.adjacency.values() {
            let mut seen = HashSet::new();
            let mut repeated = HashSet::new();
            for edge in edges {
                if !seen.insert(edge.to) {
                    repeated.insert(edge.to);
                }
            }
            parallel_pairs += repeated.len();
        }

        GraphSummary {
            nodes: self.node_count(),
            edges: self.edge_count,
            sources: self.adjacency.len(),
            dead_ends,
            parallel_pairs,
        }
    }
}

impl GraphProvider for GraphStore {
    fn neighbors(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn parse_node(field: &str, source_name: &str, line: usize) -> Result<NodeId> {
    match field.parse::<NodeId>() {
        Ok(node) => Ok(node),
        Err(reason) => bail_malformed!(source_name, line, reason),
    }
}
