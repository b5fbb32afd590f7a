//! Heuristic distance estimates
//!
//! The table uses an asymmetric layout: the row of node `n` lists one
//! estimate per destination id, 1-based, so the estimate for destination
//! `d` is at 0-based position `d - 1`. Each unordered pair is read only
//! from the row of its lower-numbered node; the slot for the row's own node
//! is present in the data but never consulted.

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use crate::bail_malformed;
use crate::error::{Result, SearchError};
use crate::graph::types::{Cost, NodeId};
use crate::io::{read_rows, read_rows_from_path, Row};

/// Estimates the remaining cost from a node to the goal
pub trait Heuristic {
    fn estimate(&self, node: NodeId, goal: NodeId) -> std::result::Result<Cost, SearchError>;
}

/// Always estimates zero, turning A* into Dijkstra's algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _node: NodeId, _goal: NodeId) -> std::result::Result<Cost, SearchError> {
        Ok(Cost::ZERO)
    }
}

/// Location of a pair's estimate: the row owner and the 0-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub row: NodeId,
    pub index: usize,
}

/// Map an unordered pair to the slot holding its estimate.
///
/// Returns `None` for a node paired with itself (the estimate is zero) and
/// for node id 0, which has no 1-based position.
pub fn pair_slot(a: NodeId, b: NodeId) -> Option<Slot> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if lo == hi {
        return None;
    }
    let index = (hi.value() as usize).checked_sub(1)?;
    Some(Slot { row: lo, index })
}

/// Heuristic estimates loaded from delimited rows
#[derive(Debug, Clone, Default)]
pub struct HeuristicTable {
    rows: HashMap<NodeId, Vec<Cost>>,
}

impl HeuristicTable {
    /// Build from typed rows. A repeated node keeps its first row.
    pub fn from_estimates<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, Vec<Cost>)>,
    {
        let mut table = HeuristicTable::default();
        for (idx, (node, estimates)) in rows.into_iter().enumerate() {
            if let Some(bad) = estimates
                .iter()
                .find(|c| !c.is_finite() || c.value() < 0.0)
            {
                bail_malformed!(
                    "heuristics",
                    idx + 1,
                    format!("estimate {} is not a non-negative number", bad)
                );
            }
            table.insert(node, estimates, idx + 1);
        }
        Ok(table)
    }

    /// Build from delimited rows of the form `node,est_1,est_2,...`
    pub fn from_rows(rows: &[Row], source_name: &str) -> Result<Self> {
        let mut table = HeuristicTable::default();
        for row in rows {
            let Some((head, rest)) = row.fields.split_first() else {
                continue;
            };
            let node = match head.parse::<NodeId>() {
                Ok(node) => node,
                Err(reason) => bail_malformed!(source_name, row.line, reason),
            };
            let mut estimates = Vec::with_capacity(rest.len());
            for (pos, field) in rest.iter().enumerate() {
                match Cost::parse_non_negative(field) {
                    Ok(c) => estimates.push(c),
                    Err(reason) => bail_malformed!(
                        source_name,
                        row.line,
                        format!("estimate {} {}", pos + 1, reason)
                    ),
                }
            }
            table.insert(node, estimates, row.line);
        }
        Ok(table)
    }

    /// Parse heuristic rows from in-memory text
    pub fn parse(input: &str, delimiter: char) -> Result<Self> {
        let rows = read_rows(input.as_bytes(), delimiter)?;
        Self::from_rows(&rows, "heuristics")
    }

    /// Load heuristic rows from a file
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path, delimiter: char) -> Result<Self> {
        let start = Instant::now();
        let rows = read_rows_from_path(path, delimiter)?;
        let source_name = path.display().to_string();
        let table = Self::from_rows(&rows, &source_name)?;
        tracing::debug!(rows = table.len(), elapsed = ?start.elapsed(), "heuristics_loaded");
        Ok(table)
    }

    fn insert(&mut self, node: NodeId, estimates: Vec<Cost>, line: usize) {
        if self.rows.contains_key(&node) {
            tracing::warn!(node = %node, line, "duplicate heuristic row ignored");
            return;
        }
        self.rows.insert(node, estimates);
    }

    /// Number of rows held
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw row for a node, if loaded
    pub fn row(&self, node: NodeId) -> Option<&[Cost]> {
        self.rows.get(&node).map(Vec::as_slice)
    }

    /// Symmetric estimate between two nodes
    pub fn lookup(&self, a: NodeId, b: NodeId) -> std::result::Result<Cost, SearchError> {
        let Some(slot) = pair_slot(a, b) else {
            if a == b {
                return Ok(Cost::ZERO);
            }
            return Err(missing(a, b));
        };
        self.rows
            .get(&slot.row)
            .and_then(|row| row.get(slot.index))
            .copied()
            .ok_or_else(|| missing(a, b))
    }
}

impl Heuristic for HeuristicTable {
    fn estimate(&self, node: NodeId, goal: NodeId) -> std::result::Result<Cost, SearchError> {
        self.lookup(node, goal)
    }
}

fn missing(a: NodeId, b: NodeId) -> SearchError {
    SearchError::HeuristicNotFound {
        lo: a.min(b),
        hi: a.max(b),
    }
}
