// Rust guideline compliant 2026-10-19

//! Saved search files.
//!
//! A saved search is the body of a JIRA search request made with
//! `fields=*all`, stored as JSON. It lets diagrams and tables be produced
//! without network access.

use crate::wire::{FieldMap, SearchResponse};
use crate::JiraError;
use jirakit_core::{Issue, IssueRef, IssueSource, MemorySource, Result};
use std::path::Path;
use tracing::info;

/// An issue source reading a saved JIRA search response.
///
/// Queries are ignored: every search returns the saved issues, in file
/// order, up to the requested bound.
#[derive(Debug, Clone)]
pub struct FileSource {
    inner: MemorySource,
}

impl FileSource {
    /// Reads and decodes a saved search.
    ///
    /// # Arguments
    ///
    /// * `path` - JSON file with a search response
    /// * `fields` - Custom field names for WBS and team
    /// * `browse_url` - Permalink prefix, e.g. `https://jira.example.org/browse/`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a search response.
    pub fn open(
        path: &Path,
        fields: &FieldMap,
        browse_url: &str,
    ) -> std::result::Result<Self, JiraError> {
        let content = std::fs::read_to_string(path).map_err(|source| JiraError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Self::from_json(&content, fields, browse_url)?;
        info!(path = %path.display(), "Loaded saved search");
        Ok(source)
    }

    /// Decodes a saved search held in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a search response.
    pub fn from_json(
        json: &str,
        fields: &FieldMap,
        browse_url: &str,
    ) -> std::result::Result<Self, JiraError> {
        let response: SearchResponse = serde_json::from_str(json)?;
        let issues: Vec<Issue> = response.issues.iter().map(|raw| fields.decode(raw)).collect();
        Ok(Self {
            inner: MemorySource::new(issues, browse_url),
        })
    }
}

impl IssueSource for FileSource {
    fn search(&self, query: &str, max_results: usize) -> Result<Vec<IssueRef>> {
        self.inner.search(query, max_results)
    }

    fn fetch(&self, issue: &IssueRef) -> Result<Issue> {
        self.inner.fetch(issue)
    }

    fn permalink(&self, issue: &Issue) -> String {
        self.inner.permalink(issue)
    }
}
