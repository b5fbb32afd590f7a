//! Best-first path search
//!
//! - `astar`: the A* engine and the `find_path` entry point
//! - `state`: per-search open/closed sets and score maps
//! - `evaluate`: cost recomputation for found paths

pub mod astar;
pub mod evaluate;
pub mod state;

pub use astar::{find_path, AStar, Route};
pub use evaluate::PathEvaluator;
pub use state::{FrontierEntry, SearchState, SearchStats};
