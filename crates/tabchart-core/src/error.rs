// File: crates/tabchart-core/src/error.rs
// Summary: Error types for the fallible edges (grid loading, mode parsing).
// The transformation itself never fails; see the module docs in lib.rs.

use thiserror::Error;

/// Failure while loading a raw grid from an external source.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("failed to read grid: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed CSV grid: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON grid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Unknown chart mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chart mode '{0}' (expected bar, line, pie or doughnut)")]
pub struct ParseChartModeError(pub String);
