//! Error types for the Tabline library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Tabline operations.
#[derive(Debug, Error)]
pub enum TablineError {
    /// Input had fewer than two non-empty lines (no header plus data).
    #[error("Insufficient data: need a header line and at least one data line, found {lines} non-empty line(s)")]
    InsufficientData { lines: usize },

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TablineError {
    /// Returns true for the single failure the inference engine itself raises.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, TablineError::InsufficientData { .. })
    }
}

/// Result type alias for Tabline operations.
pub type Result<T> = std::result::Result<T, TablineError>;
