//! CLI commands for wayfind

pub mod cost;
pub mod dispatch;
pub mod estimate;
pub mod inputs;
pub mod path;
pub mod stats;
