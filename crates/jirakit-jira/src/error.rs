// Rust guideline compliant 2026-10-19

//! Error handling for JIRA sources.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while talking to JIRA or reading saved searches.
#[derive(Debug, Error)]
pub enum JiraError {
    /// Transport-level HTTP failure (connection, timeout, body decoding).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// A saved search file could not be read.
    #[error("Cannot read {path}: {source}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A saved search file is not valid JSON of the expected shape.
    #[error("Invalid JIRA JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<JiraError> for jirakit_core::Error {
    fn from(error: JiraError) -> Self {
        jirakit_core::Error::SourceUnavailable(error.to_string())
    }
}
