use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;

use crate::graph::{Cost, NodeId};

/// Frontier heap entry, ordered by f-score then node id
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub f_score: Cost,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_score
            .total_cmp(&other.f_score)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Counters collected over one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes moved to the closed set
    pub expanded: usize,
    /// Successful g-score improvements
    pub relaxed: usize,
    /// Heap entries discarded because a better score superseded them
    pub stale_skipped: usize,
    /// Largest open set observed
    pub max_open: usize,
}

/// Mutable scoring structures owned by a single search.
///
/// `open` is the authoritative frontier membership; `frontier` may still
/// hold superseded entries, which `pop_best` discards lazily.
#[derive(Debug, Default)]
pub struct SearchState {
    open: HashSet<NodeId>,
    frontier: BinaryHeap<Reverse<FrontierEntry>>,
    closed: HashSet<NodeId>,
    came_from: HashMap<NodeId, NodeId>,
    g_score: HashMap<NodeId, Cost>,
    f_score: HashMap<NodeId, Cost>,
    expansions: Vec<(NodeId, Cost)>,
    stats: SearchStats,
}

impl SearchState {
    /// Place the start node on the frontier with g = 0
    pub fn seed(&mut self, start: NodeId, estimate: Cost) {
        self.g_score.insert(start, Cost::ZERO);
        self.f_score.insert(start, estimate);
        self.push_open(start, estimate);
    }

    fn push_open(&mut self, node: NodeId, f_score: Cost) {
        self.open.insert(node);
        self.frontier.push(Reverse(FrontierEntry { node, f_score }));
        self.stats.max_open = self.stats.max_open.max(self.open.len());
    }

    /// Best known cost from start; unreached nodes are infinite
    pub fn g_score(&self, node: NodeId) -> Cost {
        self.g_score.get(&node).copied().unwrap_or(Cost::INFINITY)
    }

    pub fn f_score(&self, node: NodeId) -> Cost {
        self.f_score.get(&node).copied().unwrap_or(Cost::INFINITY)
    }

    pub fn is_open(&self, node: NodeId) -> bool {
        self.open.contains(&node)
    }

    pub fn is_closed(&self, node: NodeId) -> bool {
        self.closed.contains(&node)
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.came_from.get(&node).copied()
    }

    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Closed nodes in expansion order with their g-score at closing time
    pub fn expansions(&self) -> &[(NodeId, Cost)] {
        &self.expansions
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Open node with the lowest f-score, lowest id on ties.
    ///
    /// The node stays in `open` until `close` is called.
    pub fn pop_best(&mut self) -> Option<NodeId> {
        while let Some(Reverse(entry)) = self.frontier.pop() {
            let live = self.open.contains(&entry.node)
                && entry.f_score.total_cmp(&self.f_score(entry.node)) == Ordering::Equal;
            if live {
                return Some(entry.node);
            }
            self.stats.stale_skipped += 1;
        }
        None
    }

    /// Move a node from open to closed
    pub fn close(&mut self, node: NodeId) {
        self.open.remove(&node);
        if self.closed.insert(node) {
            self.expansions.push((node, self.g_score(node)));
            self.stats.expanded += 1;
        }
    }

    /// Record a path to `node` through `pred` if it beats the known one.
    ///
    /// Returns true when the scores were updated.
    pub fn relax(&mut self, node: NodeId, pred: NodeId, tentative_g: Cost, f_score: Cost) -> bool {
        if tentative_g.total_cmp(&self.g_score(node)) != Ordering::Less {
            return false;
        }
        self.came_from.insert(node, pred);
        self.g_score.insert(node, tentative_g);
        self.f_score.insert(node, f_score);
        self.push_open(node, f_score);
        self.stats.relaxed += 1;
        true
    }

    /// Follow predecessors back from `goal`, returning start..=goal
    pub fn reconstruct_path(&self, goal: NodeId) -> Vec<NodeId> {
        let mut path = vec![goal];
        let mut current = goal;
        while let Some(pred) = self.predecessor(current) {
            path.push(pred);
            current = pred;
            // A predecessor chain longer than the closed set means a cycle.
            if path.len() > self.closed.len() + 1 {
                break;
            }
        }
        path.reverse();
        path
    }

    /// Check the structural invariants, describing the first violation
    pub fn check_invariants(&self, start: NodeId) -> Result<(), String> {
        if let Some(node) = self.open.iter().find(|n| !self.f_score(**n).is_finite()) {
            return Err(format!("open node {} has no finite f-score", node));
        }
        if let Some(node) = self.open.iter().find(|n| self.closed.contains(n)) {
            return Err(format!("node {} is both open and closed", node));
        }
        if self.came_from.contains_key(&start) {
            return Err(format!("start node {} has a predecessor", start));
        }
        Ok(())
    }
}
