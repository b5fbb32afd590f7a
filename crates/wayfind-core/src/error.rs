//! Error types and exit codes for wayfind
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (no path found, search aborted)
//! - 2: Usage error (bad flags/args, node out of range)
//! - 3: Data error (malformed input, missing edge or heuristic entry,
//!   cost overflow)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::NodeId;

/// Exit codes for the wayfind binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed or inconsistent input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Failures raised while a search or a cost evaluation is running.
///
/// These abort the current call only; the loaded graph and heuristic
/// table stay valid for later calls.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("failed to find path from {start} to {goal}")]
    NoPathFound { start: NodeId, goal: NodeId },

    #[error("search aborted after {steps} steps (limit {limit})")]
    Aborted { steps: usize, limit: usize },

    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: NodeId, to: NodeId },

    #[error("heuristic not found for pair ({lo}, {hi})")]
    HeuristicNotFound { lo: NodeId, hi: NodeId },

    #[error("cost overflow relaxing {from} -> {to}: scores exceed the range of f64")]
    CostOverflow { from: NodeId, to: NodeId },
}

impl SearchError {
    /// True for the normal negative result (goal unreachable)
    pub fn is_no_path(&self) -> bool {
        matches!(self, SearchError::NoPathFound { .. })
    }

    fn error_type(&self) -> &'static str {
        match self {
            SearchError::NoPathFound { .. } => "no_path_found",
            SearchError::Aborted { .. } => "aborted",
            SearchError::EdgeNotFound { .. } => "edge_not_found",
            SearchError::HeuristicNotFound { .. } => "heuristic_not_found",
            SearchError::CostOverflow { .. } => "cost_overflow",
        }
    }
}

/// Errors that can occur during wayfind operations
#[derive(Error, Debug)]
pub enum WayfindError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("malformed input in {source_name} line {line}: {reason}")]
    MalformedInput {
        source_name: String,
        line: usize,
        reason: String,
    },

    #[error("input file not found: {path:?}")]
    InputNotFound { path: PathBuf },

    #[error(transparent)]
    Search(#[from] SearchError),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WayfindError {
    /// Create an error for a row that could not be parsed
    pub fn malformed(source_name: &str, line: usize, reason: impl std::fmt::Display) -> Self {
        WayfindError::MalformedInput {
            source_name: source_name.to_string(),
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WayfindError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfindError::UnknownFormat(_)
            | WayfindError::UsageError(_)
            | WayfindError::InvalidValue { .. } => ExitCode::Usage,

            WayfindError::MalformedInput { .. } | WayfindError::InputNotFound { .. } => {
                ExitCode::Data
            }

            WayfindError::Search(err) => match err {
                SearchError::NoPathFound { .. } | SearchError::Aborted { .. } => {
                    ExitCode::Failure
                }
                SearchError::EdgeNotFound { .. }
                | SearchError::HeuristicNotFound { .. }
                | SearchError::CostOverflow { .. } => ExitCode::Data,
            },

            WayfindError::Io(_)
            | WayfindError::Json(_)
            | WayfindError::Toml(_)
            | WayfindError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WayfindError::UnknownFormat(_) => "unknown_format",
            WayfindError::UsageError(_) => "usage_error",
            WayfindError::InvalidValue { .. } => "invalid_value",
            WayfindError::MalformedInput { .. } => "malformed_input",
            WayfindError::InputNotFound { .. } => "input_not_found",
            WayfindError::Search(err) => err.error_type(),
            WayfindError::Io(_) => "io_error",
            WayfindError::Json(_) => "json_error",
            WayfindError::Toml(_) => "toml_error",
            WayfindError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wayfind operations
pub type Result<T> = std::result::Result<T, WayfindError>;
