//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Input error (out-of-range vertex, malformed graph or grid)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the graphwalk binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Input error - malformed or out-of-range data (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphwalk operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Input errors (exit code 3)
    #[error("{context} {index} is out of range (vertex count {bound})")]
    OutOfRange {
        context: String,
        index: usize,
        bound: usize,
    },

    #[error("adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("grid is not rectangular: row {row} has {len} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("invalid grid cell value {value} (expected -1, 0 or 1)")]
    InvalidCell { value: i32 },

    #[error("recursion depth exceeded {limit} during {operation}")]
    DepthExceeded { operation: String, limit: usize },

    #[error("failed to read {path:?}: {reason}")]
    InvalidInput { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a vertex index outside `[0, bound)`
    pub fn out_of_range(context: &str, index: usize, bound: usize) -> Self {
        GraphError::OutOfRange {
            context: context.to_string(),
            index,
            bound,
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a recursive traversal that went too deep
    pub fn depth_exceeded(operation: &str, limit: usize) -> Self {
        GraphError::DepthExceeded {
            operation: operation.to_string(),
            limit,
        }
    }

    /// Create an error for an input file that could not be loaded
    pub fn invalid_input(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        GraphError::InvalidInput {
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::OutOfRange { .. }
            | GraphError::NonSquareMatrix { .. }
            | GraphError::RaggedGrid { .. }
            | GraphError::InvalidCell { .. }
            | GraphError::InvalidInput { .. } => ExitCode::Data,

            GraphError::DepthExceeded { .. }
            | GraphError::Json(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::OutOfRange { .. } => "out_of_range",
            GraphError::NonSquareMatrix { .. } => "non_square_matrix",
            GraphError::RaggedGrid { .. } => "ragged_grid",
            GraphError::InvalidCell { .. } => "invalid_cell",
            GraphError::DepthExceeded { .. } => "depth_exceeded",
            GraphError::InvalidInput { .. } => "invalid_input",
            GraphError::Json(_) => "json_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;
