// Rust guideline compliant 2026-10-19

//! Configuration management for jirakit.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "jirakit.toml";

/// Log levels accepted by `log_level`.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for jirakit behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the JIRA server.
    pub server: String,

    /// JIRA project key searched by WBS queries.
    pub project: String,

    /// Custom field holding the WBS code.
    pub wbs_field: String,

    /// Custom field holding the team.
    pub team_field: String,

    /// Upper bound on issues fetched by one query.
    pub max_results: usize,

    /// Link types drawn as graph edges.
    pub link_types: Vec<String>,

    /// Release cycles, in display order.
    pub cycles: Vec<String>,

    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,

    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: "https://jira.lsstcorp.org/".to_string(),
            project: "DLP".to_string(),
            wbs_field: "customfield_10500".to_string(),
            team_field: "customfield_10502".to_string(),
            max_results: crate::DEFAULT_MAX_RESULTS,
            link_types: vec!["Blocks".to_string()],
            cycles: default_cycles(),
            log_level: "warn".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Default release cycles.
fn default_cycles() -> Vec<String> {
    [
        "S14", "W15", "S15", "X16", "F16", "S17", "F17", "S18", "F18", "S19", "F19", "S20",
    ]
    .iter()
    .map(|cycle| cycle.to_string())
    .collect()
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `path`, if it exists
    /// 3. Environment variables with `JIRAKIT_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?
        } else {
            Self::default()
        };

        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Applies `JIRAKIT_*` overrides looked up through `lookup`.
    ///
    /// Supported variables:
    /// - `JIRAKIT_SERVER` - JIRA base URL
    /// - `JIRAKIT_PROJECT` - Project key
    /// - `JIRAKIT_WBS_FIELD` - WBS custom field
    /// - `JIRAKIT_TEAM_FIELD` - Team custom field
    /// - `JIRAKIT_MAX_RESULTS` - Fetch bound
    /// - `JIRAKIT_LOG_LEVEL` - Log level
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("JIRAKIT_SERVER") {
            self.server = val;
        }

        if let Some(val) = lookup("JIRAKIT_PROJECT") {
            self.project = val;
        }

        if let Some(val) = lookup("JIRAKIT_WBS_FIELD") {
            self.wbs_field = val;
        }

        if let Some(val) = lookup("JIRAKIT_TEAM_FIELD") {
            self.team_field = val;
        }

        if let Some(val) = lookup("JIRAKIT_MAX_RESULTS") {
            self.max_results = val.parse().map_err(|_| {
                Error::InvalidConfig("JIRAKIT_MAX_RESULTS must be a positive number".to_string())
            })?;
        }

        if let Some(val) = lookup("JIRAKIT_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - server is not an http(s) URL
    /// - max_results is outside 1..=1000
    /// - log_level is unknown
    pub fn validate(&self) -> Result<()> {
        if !(self.server.starts_with("http://") || self.server.starts_with("https://")) {
            return Err(Error::InvalidConfig(format!(
                "server must be an http(s) URL, got '{}'",
                self.server
            )));
        }

        if self.max_results == 0 || self.max_results > crate::DEFAULT_MAX_RESULTS {
            return Err(Error::InvalidConfig(format!(
                "max_results must be 1-{}, got {}",
                crate::DEFAULT_MAX_RESULTS,
                self.max_results
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Returns the browse URL prefix of the server (`<server>/browse/`).
    pub fn browse_url(&self) -> String {
        format!("{}/browse/", self.server.trim_end_matches('/'))
    }
}
