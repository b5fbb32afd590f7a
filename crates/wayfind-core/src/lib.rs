//! Wayfind Core Library
//!
//! Graph model, heuristic table and A* search engine for the wayfind CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod io;
pub mod logging;
pub mod records;
pub mod search;

pub use error::{Result, SearchError, WayfindError};
pub use graph::{Cost, GraphProvider, GraphStore, Heuristic, HeuristicTable, NodeId};
pub use search::{find_path, AStar, PathEvaluator, Route};
