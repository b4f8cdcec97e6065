// Rust guideline compliant 2026-10-19

//! Blocking JIRA REST client.

use crate::wire::{FieldMap, RawIssue, SearchResponse};
use crate::JiraError;
use jirakit_core::{Config, Issue, IssueRef, IssueSource, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// An issue source backed by a JIRA server's REST API (v2).
///
/// Requests are anonymous; the server must allow browsing the project.
pub struct JiraClient {
    http: Client,
    server: String,
    fields: FieldMap,
}

impl JiraClient {
    /// Creates a client for `server`.
    ///
    /// # Arguments
    ///
    /// * `server` - Base URL of the JIRA server
    /// * `fields` - Custom field names for WBS and team
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(
        server: &str,
        fields: FieldMap,
        timeout: Duration,
    ) -> std::result::Result<Self, JiraError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("jirakit/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            server: server.trim_end_matches('/').to_string(),
            fields,
        })
    }

    /// Creates a client from the server, custom fields and timeout in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn from_config(config: &Config) -> std::result::Result<Self, JiraError> {
        Self::new(
            &config.server,
            FieldMap::from_config(config),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Returns the base URL, without trailing slash.
    pub fn server(&self) -> &str {
        &self.server
    }

    fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> std::result::Result<T, JiraError> {
        let url = format!("{}/rest/api/2/{}", self.server, path);
        debug!("GET {}", url);

        let response = self.http.get(&url).query(params).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(JiraError::Status {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response.json()?)
    }
}

impl IssueSource for JiraClient {
    fn search(&self, query: &str, max_results: usize) -> Result<Vec<IssueRef>> {
        let response: SearchResponse = self.get(
            "search",
            &[
                ("jql", query.to_string()),
                ("maxResults", max_results.to_string()),
                ("fields", "summary".to_string()),
            ],
        )?;

        if let Some(total) = response.total {
            if total > response.issues.len() {
                info!(
                    total,
                    returned = response.issues.len(),
                    "Search matched more issues than fetched"
                );
            }
        }

        Ok(response
            .issues
            .into_iter()
            .map(|issue| IssueRef::new(issue.key))
            .collect())
    }

    fn fetch(&self, issue: &IssueRef) -> Result<Issue> {
        let raw: RawIssue = self.get(&format!("issue/{}", issue.key), &[])?;
        Ok(self.fields.decode(&raw))
    }

    fn permalink(&self, issue: &Issue) -> String {
        format!("{}/browse/{}", self.server, issue.key)
    }
}
