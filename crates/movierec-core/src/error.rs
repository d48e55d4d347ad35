//! Error types and exit codes for movierec
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unusable query)
//! - 3: Data error (dataset missing, unknown movie)
//!
//! "No results" is never an error: an empty cohort or an empty index yields an
//! empty `Ok` value. Everything else surfaces here.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the movierec binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing dataset, unknown movie (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during movierec operations
#[derive(Error, Debug)]
pub enum RecError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid query {query:?}: {reason}")]
    InvalidQuery { query: String, reason: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("dataset unavailable at {path:?}: {reason}")]
    DataUnavailable { path: PathBuf, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error in {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },
}

impl RecError {
    /// Create an error for a query that cannot be searched
    pub fn invalid_query(query: &str, reason: impl std::fmt::Display) -> Self {
        RecError::InvalidQuery {
            query: query.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RecError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for missing input data
    pub fn data_unavailable(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        RecError::DataUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        RecError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Wrap a CSV error with the file it came from
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        RecError::Csv {
            path: path.into(),
            source,
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RecError::FailedOperation {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RecError::UnknownFormat(_)
            | RecError::UsageError(_)
            | RecError::InvalidQuery { .. }
            | RecError::InvalidValue { .. } => ExitCode::Usage,

            RecError::DataUnavailable { .. } | RecError::NotFound { .. } => ExitCode::Data,

            RecError::Io(_)
            | RecError::Csv { .. }
            | RecError::Json(_)
            | RecError::Toml(_)
            | RecError::FailedOperation { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RecError::UnknownFormat(_) => "unknown_format",
            RecError::UsageError(_) => "usage_error",
            RecError::InvalidQuery { .. } => "invalid_query",
            RecError::InvalidValue { .. } => "invalid_value",
            RecError::DataUnavailable { .. } => "data_unavailable",
            RecError::NotFound { .. } => "not_found",
            RecError::Io(_) => "io_error",
            RecError::Csv { .. } => "csv_error",
            RecError::Json(_) => "json_error",
            RecError::Toml(_) => "toml_error",
            RecError::FailedOperation { .. } => "failed_operation",
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

/// Result type alias for movierec operations
pub type Result<T> = std::result::Result<T, RecError>;
