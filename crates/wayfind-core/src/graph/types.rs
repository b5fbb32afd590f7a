use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Opaque node identifier
///
/// Nodes are numbered by the input data; the numeric order matters for
/// heuristic lookups and for frontier tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(id: u32) -> Self {
        NodeId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl FromStr for NodeId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(NodeId)
            .map_err(|_| format!("invalid node id '{}'", s.trim()))
    }
}

/// Accumulated or per-edge traversal cost
///
/// Weights loaded from input are finite and non-negative; `INFINITY` stands
/// for a node the search has not reached yet.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    /// Parse a weight or estimate, rejecting negative and non-finite values
    pub fn parse_non_negative(s: &str) -> std::result::Result<Self, String> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| format!("'{}' is not a number", trimmed))?;
        if !value.is_finite() {
            return Err(format!("'{}' is not a finite number", trimmed));
        }
        if value < 0.0 {
            return Err(format!("'{}' is negative", trimmed));
        }
        Ok(Cost(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Total order used by the frontier
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl std::iter::Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, |acc, c| acc + c)
    }
}

/// Formats with at least one decimal place (`2.0`, `3.25`)
impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Cost(value)
    }
}

/// Outgoing edge as stored in the adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub to: NodeId,
    pub weight: Cost,
}

impl Edge {
    pub fn new(to: NodeId, weight: Cost) -> Self {
        Edge { to, weight }
    }
}
