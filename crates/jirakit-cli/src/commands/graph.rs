// Rust guideline compliant 2026-10-19

//! Implementation of the `jirakit graph` command.
//!
//! Draws the blocking relationships between the milestones and meta-epics
//! under a WBS element, clustered by release cycle.

use super::write_output;
use crate::GraphRenderer;
use anyhow::Result;
use jirakit_core::{
    build_query, generate, Config, DotOptions, FixVersionRank, GraphFormat, IssueSource,
    IssueType, RankClassifier, TypeStyle,
};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Arguments of the graph command.
#[derive(Debug, Clone, Default)]
pub struct GraphArgs {
    /// WBS element to draw; ignored when `query` is set.
    pub wbs: Option<String>,
    /// Raw JQL query.
    pub query: Option<String>,
    /// Output format name.
    pub format: String,
    /// Output file; stdout when absent.
    pub output: Option<PathBuf>,
    /// Link types to draw; the configured ones when empty.
    pub link_types: Vec<String>,
    /// Graph title.
    pub title: Option<String>,
    /// Disable release cycle clustering.
    pub no_ranks: bool,
}

/// Generates and renders a dependency diagram.
///
/// The output format is checked before the issue source is queried.
///
/// # Errors
///
/// Returns an error if:
/// - The format is not supported
/// - The issue source fails
/// - Rendering or writing the output fails
pub fn execute(
    source: &dyn IssueSource,
    config: &Config,
    args: &GraphArgs,
    renderer: &dyn GraphRenderer,
    out: &mut dyn Write,
) -> Result<()> {
    let format = GraphFormat::from_str(&args.format)?;

    let wbs = args.wbs.clone().unwrap_or_default();
    let query = match &args.query {
        Some(query) => query.clone(),
        None => build_query(
            &config.project,
            &[IssueType::Milestone, IssueType::MetaEpic],
            &wbs,
        ),
    };

    let options = DotOptions {
        link_types: if args.link_types.is_empty() {
            config.link_types.clone()
        } else {
            args.link_types.clone()
        },
        rank_order: if args.no_ranks {
            Vec::new()
        } else {
            config.cycles.clone()
        },
        title: args
            .title
            .clone()
            .or_else(|| args.wbs.clone())
            .unwrap_or_else(|| DotOptions::default().title),
        max_results: config.max_results,
    };

    let ranks: Option<&dyn RankClassifier> = if args.no_ranks {
        None
    } else {
        Some(&FixVersionRank)
    };

    info!("Generating diagram for: {}", query);
    let dot = generate(source, &query, &options, Some(&TypeStyle), ranks)?;
    let bytes = renderer.render(&dot, format)?;

    write_output(&bytes, args.output.as_deref(), out)
}
