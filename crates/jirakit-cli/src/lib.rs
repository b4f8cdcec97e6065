// Rust guideline compliant 2026-10-19

//! jirakit CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod render;
pub mod terminal;

pub use logging::{init_tracing, parse_log_level};
pub use render::{GraphRenderer, GraphvizRenderer};
pub use terminal::{print_error, should_use_color};

use anyhow::{Context, Result};
use jirakit_core::{Config, IssueSource};
use jirakit_jira::{FieldMap, FileSource, JiraClient};
use std::path::Path;

/// Opens the issue source selected on the command line.
///
/// A saved search file takes precedence over the configured server.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the HTTP client cannot
/// be created.
pub fn open_source(config: &Config, issues_file: Option<&Path>) -> Result<Box<dyn IssueSource>> {
    match issues_file {
        Some(path) => {
            let source = FileSource::open(path, &FieldMap::from_config(config), &config.browse_url())
                .with_context(|| format!("Failed to load saved search {}", path.display()))?;
            Ok(Box::new(source))
        }
        None => {
            let client = JiraClient::from_config(config)
                .with_context(|| format!("Failed to create client for {}", config.server))?;
            Ok(Box::new(client))
        }
    }
}
