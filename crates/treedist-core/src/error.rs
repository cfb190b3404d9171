//! Error types and exit codes for treedist
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed edges, out-of-range ids, disconnected input)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - input rejected by validation (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during treedist operations
#[derive(Error, Debug)]
pub enum TreedistError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("malformed edge #{index}: expected 2 endpoints, got {arity}")]
    MalformedEdge { index: usize, arity: usize },

    #[error("edge #{index} references node {node} outside [0, {total_nodes})")]
    NodeOutOfRange {
        index: usize,
        node: i64,
        total_nodes: usize,
    },

    #[error("graph is disconnected: {unreachable} node(s) unreachable from node {root}")]
    Disconnected { root: usize, unreachable: usize },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

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

impl TreedistError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TreedistError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        TreedistError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        TreedistError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for input that could not be decoded
    pub fn invalid_input(reason: impl std::fmt::Display) -> Self {
        TreedistError::InvalidInput {
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TreedistError::UnknownFormat(_)
            | TreedistError::UsageError(_)
            | TreedistError::InvalidValue { .. }
            | TreedistError::Unsupported { .. } => ExitCode::Usage,

            TreedistError::MalformedEdge { .. }
            | TreedistError::NodeOutOfRange { .. }
            | TreedistError::Disconnected { .. }
            | TreedistError::InvalidInput { .. }
            | TreedistError::NotFound { .. } => ExitCode::Data,

            TreedistError::Io(_)
            | TreedistError::Json(_)
            | TreedistError::Toml(_)
            | TreedistError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TreedistError::UnknownFormat(_) => "unknown_format",
            TreedistError::UsageError(_) => "usage_error",
            TreedistError::InvalidValue { .. } => "invalid_value",
            TreedistError::Unsupported { .. } => "unsupported",
            TreedistError::MalformedEdge { .. } => "malformed_edge",
            TreedistError::NodeOutOfRange { .. } => "node_out_of_range",
            TreedistError::Disconnected { .. } => "disconnected",
            TreedistError::InvalidInput { .. } => "invalid_input",
            TreedistError::NotFound { .. } => "not_found",
            TreedistError::Io(_) => "io_error",
            TreedistError::Json(_) => "json_error",
            TreedistError::Toml(_) => "toml_error",
            TreedistError::Other(_) => "other",
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

/// Result type alias for treedist operations
pub type Result<T> = std::result::Result<T, TreedistError>;
