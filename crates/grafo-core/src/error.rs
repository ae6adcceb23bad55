//! Error types and exit codes for grafo
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including negative-cycle path requests)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing/invalid dataset, unknown node names)

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
    /// Data error - missing dataset, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during grafo operations
#[derive(Error, Debug)]
pub enum GrafoError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("node not found in graph: {id}")]
    NodeNotFound { id: String },

    #[error("dataset not found: {path:?}")]
    DatasetNotFound { path: PathBuf },

    #[error("invalid dataset {path:?}: {reason}")]
    InvalidDataset { path: PathBuf, reason: String },

    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("negative cycle detected: {}", cycle.join(" -> "))]
    NegativeCycle { cycle: Vec<String> },

    #[error("contradictory paths found (negative weights?)")]
    ContradictoryPaths,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GrafoError {
    /// Create a node-not-found error
    pub fn node_not_found(id: impl Into<String>) -> Self {
        GrafoError::NodeNotFound { id: id.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GrafoError::UnknownFormat(_) | GrafoError::UsageError(_) => ExitCode::Usage,

            GrafoError::NodeNotFound { .. }
            | GrafoError::DatasetNotFound { .. }
            | GrafoError::InvalidDataset { .. }
            | GrafoError::InvalidConfig { .. } => ExitCode::Data,

            GrafoError::NegativeCycle { .. }
            | GrafoError::ContradictoryPaths
            | GrafoError::Io(_)
            | GrafoError::Csv(_)
            | GrafoError::Json(_)
            | GrafoError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in JSON output
    fn error_type(&self) -> &'static str {
        match self {
            GrafoError::UnknownFormat(_) => "unknown_format",
            GrafoError::UsageError(_) => "usage_error",
            GrafoError::NodeNotFound { .. } => "node_not_found",
            GrafoError::DatasetNotFound { .. } => "dataset_not_found",
            GrafoError::InvalidDataset { .. } => "invalid_dataset",
            GrafoError::InvalidConfig { .. } => "invalid_config",
            GrafoError::NegativeCycle { .. } => "negative_cycle",
            GrafoError::ContradictoryPaths => "contradictory_paths",
            GrafoError::Io(_) => "io_error",
            GrafoError::Csv(_) => "csv_error",
            GrafoError::Json(_) => "json_error",
            GrafoError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let GrafoError::NegativeCycle { cycle } = self {
            error_obj["cycle"] = serde_json::json!(cycle);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for grafo operations
pub type Result<T> = std::result::Result<T, GrafoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(
            GrafoError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GrafoError::node_not_found("Boa Vista").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GrafoError::NegativeCycle { cycle: vec![] }.exit_code(),
            ExitCode::Failure
        );
        assert_eq!(GrafoError::ContradictoryPaths.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_to_json_includes_cycle() {
        let err = GrafoError::NegativeCycle {
            cycle: vec!["A".into(), "B".into(), "A".into()],
        };
        let json = err.to_json();
        assert_eq!(json["error"]["type"], "negative_cycle");
        assert_eq!(json["error"]["code"], 1);
        assert_eq!(json["error"]["cycle"][0], "A");
    }

    #[test]
    fn test_node_not_found_message() {
        let err = GrafoError::node_not_found("Recife");
        assert_eq!(err.to_string(), "node not found in graph: Recife");
    }
}
