//! Error types and exit codes for graphsteps
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown algorithm or format)
//! - 3: Invalid graph input (shape, labels, weights)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Input error - malformed graph request (3)
    Input = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or running a trace
#[derive(Error, Debug)]
pub enum GraphStepsError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs, kruskal, prim-dijkstra, dijkstra, or bellman-ford)")]
    UnknownAlgorithm(String),

    #[error("unknown locale: {0} (expected: en or pl)")]
    UnknownLocale(String),

    #[error("{0}")]
    UsageError(String),

    // Input errors (exit code 3)
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("missing required field: {field}")]
    MissingField { field: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to read {path:?}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("{0}")]
    Other(String),
}

impl GraphStepsError {
    /// Create an error for malformed graph input
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        GraphStepsError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create an error for a required request field that was not supplied
    pub fn missing_field(field: &str) -> Self {
        GraphStepsError::MissingField {
            field: field.to_string(),
        }
    }

    /// Create an error for a file that could not be read
    pub fn read_failed(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        GraphStepsError::ReadFailed {
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphStepsError::UnknownFormat(_)
            | GraphStepsError::UnknownAlgorithm(_)
            | GraphStepsError::UnknownLocale(_)
            | GraphStepsError::UsageError(_) => ExitCode::Usage,

            GraphStepsError::InvalidInput { .. } | GraphStepsError::MissingField { .. } => {
                ExitCode::Input
            }

            GraphStepsError::Io(_)
            | GraphStepsError::Json(_)
            | GraphStepsError::Toml(_)
            | GraphStepsError::ReadFailed { .. }
            | GraphStepsError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphStepsError::UnknownFormat(_) => "unknown_format",
            GraphStepsError::UnknownAlgorithm(_) => "unknown_algorithm",
            GraphStepsError::UnknownLocale(_) => "unknown_locale",
            GraphStepsError::UsageError(_) => "usage_error",
            GraphStepsError::InvalidInput { .. } => "invalid_input",
            GraphStepsError::MissingField { .. } => "missing_field",
            GraphStepsError::Io(_) => "io_error",
            GraphStepsError::Json(_) => "json_error",
            GraphStepsError::Toml(_) => "toml_error",
            GraphStepsError::ReadFailed { .. } => "read_failed",
            GraphStepsError::Other(_) => "other",
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

/// Result type alias for graphsteps operations
pub type Result<T> = std::result::Result<T, GraphStepsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            GraphStepsError::UnknownAlgorithm("astar".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GraphStepsError::invalid_input("bad").exit_code(),
            ExitCode::Input
        );
        assert_eq!(
            GraphStepsError::missing_field("weights").exit_code(),
            ExitCode::Input
        );
        assert_eq!(
            GraphStepsError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
        assert_eq!(i32::from(ExitCode::Input), 3);
    }

    #[test]
    fn test_to_json_envelope() {
        let err = GraphStepsError::invalid_input("vertex 4 out of range");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "invalid_input");
        assert_eq!(
            json["error"]["message"],
            "invalid input: vertex 4 out of range"
        );
    }

    #[test]
    fn test_bail_invalid_input_macro() {
        fn check(n: usize) -> Result<()> {
            if n > 2 {
                crate::bail_invalid_input!("too many vertices: {}", n);
            }
            Ok(())
        }

        assert!(check(1).is_ok());
        let err = check(5).unwrap_err();
        assert!(matches!(err, GraphStepsError::InvalidInput { .. }));
        assert!(err.to_string().contains("too many vertices: 5"));
    }
}
