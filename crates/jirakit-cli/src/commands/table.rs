// Rust guideline compliant 2026-10-19

//! Implementation of the `jirakit table` command.
//!
//! Lists the milestones under a WBS element as CSV or as a text table.

use super::write_output;
use anyhow::Result;
use jirakit_core::{
    build_query, fetch_issues, render_table, Config, IssueSource, IssueType, TableOptions,
};
use std::io::Write;
use std::path::PathBuf;

/// Arguments of the table command.
#[derive(Debug, Clone, Default)]
pub struct TableArgs {
    /// WBS element to list.
    pub wbs: String,
    /// Render CSV instead of a text table.
    pub csv: bool,
    /// Hide the issue key column.
    pub no_key: bool,
    /// Show the issue title column.
    pub title: bool,
    /// Link issue keys to this URL prefix.
    pub url_base: Option<String>,
    /// Output file; stdout when absent.
    pub output: Option<PathBuf>,
}

/// Fetches milestones and prints them as a table.
///
/// # Errors
///
/// Returns an error if the issue source fails or the output cannot be written.
pub fn execute(
    source: &dyn IssueSource,
    config: &Config,
    args: &TableArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let query = build_query(&config.project, &[IssueType::Milestone], &args.wbs);
    let issues = fetch_issues(source, &query, config.max_results)?;

    let options = TableOptions {
        csv: args.csv,
        show_key: !args.no_key,
        show_title: args.title,
        url_base: args.url_base.clone(),
    };

    let mut text = render_table(&issues, &options);
    if !text.ends_with('\n') {
        text.push('\n');
    }
    write_output(text.as_bytes(), args.output.as_deref(), out)
}
