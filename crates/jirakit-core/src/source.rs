// Rust guideline compliant 2026-10-19

//! Issue source contract.
//!
//! The graph builder and the reports never talk to JIRA directly; they go
//! through [`IssueSource`], which the JIRA client, the saved-search file
//! reader and the in-memory source all implement.

use crate::{Error, Issue, Result};
use tracing::info;

/// Reference to an issue returned by a search, before hydration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRef {
    /// Issue key.
    pub key: String,
}

impl IssueRef {
    /// Creates a reference to the issue with the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// A supplier of issues.
pub trait IssueSource {
    /// Runs a query and returns at most `max_results` matching issues.
    ///
    /// The query string is passed through verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] if the query cannot be run.
    fn search(&self, query: &str, max_results: usize) -> Result<Vec<IssueRef>>;

    /// Loads every field of a previously found issue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] if the issue cannot be loaded.
    fn fetch(&self, issue: &IssueRef) -> Result<Issue>;

    /// Returns the browser URL of an issue.
    fn permalink(&self, issue: &Issue) -> String;
}

/// Runs a query and hydrates every result, in search order.
///
/// # Errors
///
/// Propagates the first search or fetch failure.
pub fn fetch_issues(
    source: &dyn IssueSource,
    query: &str,
    max_results: usize,
) -> Result<Vec<Issue>> {
    let refs = source.search(query, max_results)?;
    let issues = refs
        .iter()
        .take(max_results)
        .map(|issue_ref| source.fetch(issue_ref))
        .collect::<Result<Vec<_>>>()?;
    info!(count = issues.len(), "Fetched issues");
    Ok(issues)
}

/// An issue source backed by a list of issues held in memory.
///
/// Every query matches every issue; results come back in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    issues: Vec<Issue>,
    browse_url: String,
}

impl MemorySource {
    /// Creates a source over `issues` whose permalinks start with `browse_url`.
    pub fn new(issues: Vec<Issue>, browse_url: impl Into<String>) -> Self {
        Self {
            issues,
            browse_url: browse_url.into(),
        }
    }
}

impl IssueSource for MemorySource {
    fn search(&self, _query: &str, max_results: usize) -> Result<Vec<IssueRef>> {
        Ok(self
            .issues
            .iter()
            .take(max_results)
            .map(|issue| IssueRef::new(issue.key.clone()))
            .collect())
    }

    fn fetch(&self, issue: &IssueRef) -> Result<Issue> {
        self.issues
            .iter()
            .find(|candidate| candidate.key == issue.key)
            .cloned()
            .ok_or_else(|| Error::SourceUnavailable(format!("Issue {} not found", issue.key)))
    }

    fn permalink(&self, issue: &Issue) -> String {
        format!("{}{}", self.browse_url, issue.key)
    }
}
