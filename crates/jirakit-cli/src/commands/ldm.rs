// Rust guideline compliant 2026-10-19

//! Implementation of the `jirakit ldm` command.
//!
//! Prints the LDM-240 release table: one row per milestone, one column per
//! release cycle.

use super::write_output;
use anyhow::Result;
use jirakit_core::{
    build_query, fetch_issues, ldm_table, render_ldm, CellContent, Config, IssueSource, IssueType,
};
use std::io::Write;
use std::path::PathBuf;

/// Arguments of the ldm command.
#[derive(Debug, Clone, Default)]
pub struct LdmArgs {
    /// Show the issue key in cells (the default when `title` is off).
    pub key: bool,
    /// Show the issue title in cells.
    pub title: bool,
    /// Render CSV instead of a text table.
    pub csv: bool,
    /// Output file; stdout when absent.
    pub output: Option<PathBuf>,
}

impl LdmArgs {
    /// Returns what each occupied cell shows.
    pub fn cell_content(&self) -> CellContent {
        match (self.key, self.title) {
            (true, true) => CellContent::KeyAndTitle,
            (false, true) => CellContent::Title,
            _ => CellContent::Key,
        }
    }
}

/// Fetches every milestone of the project and prints the release table.
///
/// # Errors
///
/// Returns an error if the issue source fails or the output cannot be written.
pub fn execute(
    source: &dyn IssueSource,
    config: &Config,
    args: &LdmArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let query = build_query(&config.project, &[IssueType::Milestone], "");
    let issues = fetch_issues(source, &query, config.max_results)?;

    let table = ldm_table(&issues, &config.cycles, args.cell_content());
    let mut text = render_ldm(&table, args.csv);
    if !text.ends_with('\n') {
        text.push('\n');
    }
    write_output(text.as_bytes(), args.output.as_deref(), out)
}
