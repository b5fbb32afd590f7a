//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfindError};
use crate::graph::NodeId;

/// Top-level configuration (`wayfind.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WayfindConfig {
    /// Search engine settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Input file settings
    #[serde(default)]
    pub input: InputConfig,

    /// Accepted start/goal ids
    #[serde(default)]
    pub nodes: NodeRange,
}

/// Which estimate the engine uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicMode {
    /// Estimates from the heuristic table file
    #[default]
    Table,
    /// Zero estimate everywhere (Dijkstra)
    Zero,
}

impl std::str::FromStr for HeuristicMode {
    type Err = WayfindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(HeuristicMode::Table),
            "zero" => Ok(HeuristicMode::Zero),
            other => Err(WayfindError::invalid_value(
                "heuristic mode (expected: table, zero)",
                other,
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Abort after this many expansions (unlimited when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<usize>,

    #[serde(default)]
    pub heuristic: HeuristicMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Field separator for edge and heuristic rows
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Extension tried when an input name has none
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            extension: default_extension(),
        }
    }
}

fn default_delimiter() -> char {
    ','
}

fn default_extension() -> String {
    "csv".to_string()
}

/// Inclusive range of node ids accepted as start or goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRange {
    #[serde(default = "default_min_node")]
    pub min: u32,
    #[serde(default = "default_max_node")]
    pub max: u32,
}

impl Default for NodeRange {
    fn default() -> Self {
        Self {
            min: default_min_node(),
            max: default_max_node(),
        }
    }
}

fn default_min_node() -> u32 {
    1
}

fn default_max_node() -> u32 {
    200
}

impl NodeRange {
    pub fn contains(&self, node: NodeId) -> bool {
        (self.min..=self.max).contains(&node.value())
    }

    /// Reject a start or goal outside the range
    pub fn check(&self, node: NodeId, role: &str) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(WayfindError::UsageError(format!(
                "{} node {} not an integer from {}-{}",
                role, node, self.min, self.max
            )))
        }
    }
}
