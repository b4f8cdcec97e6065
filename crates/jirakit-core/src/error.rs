// Rust guideline compliant 2026-10-19

//! Error types for the jirakit core library.

use thiserror::Error;

/// Result type alias for jirakit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for jirakit operations.
///
/// Links to issues outside the fetched set and missing owner or description
/// fields are not errors; they are absorbed where they occur.
#[derive(Debug, Error)]
pub enum Error {
    /// The issue source could not be queried (network, auth or query error).
    #[error("Issue source unavailable: {0}")]
    SourceUnavailable(String),

    /// The requested rendering format is not supported.
    #[error("Unsupported output format: {0}")]
    UnsupportedOutputFormat(String),

    /// Configuration file or environment value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
