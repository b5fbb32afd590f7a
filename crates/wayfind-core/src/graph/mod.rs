//! Graph model consumed by the search engine
//!
//! - `store`: adjacency lists built from edge rows
//! - `heuristic`: the asymmetric heuristic table and the `Heuristic` trait
//! - `provider`: the read-only adjacency trait the engine depends on

pub mod heuristic;
pub mod provider;
pub mod store;
pub mod types;

pub use heuristic::{pair_slot, Heuristic, HeuristicTable, Slot, ZeroHeuristic};
pub use provider::GraphProvider;
pub use store::{GraphStore, GraphSummary};
pub use types::{Cost, Edge, NodeId};
