// Rust guideline compliant 2026-10-19

//! Node formatting for dot output.
//!
//! Computes the attribute list of one issue node: shape, an HTML-like label
//! with key, owner and wrapped summary, a tooltip and a link back to the
//! tracker.

use crate::{Issue, IssueType};

/// Column width at which summaries are wrapped inside node labels.
pub const SUMMARY_WIDTH: usize = 25;

/// Supplies extra dot attributes for an issue node.
///
/// When a provider is given, its attributes replace the default
/// `shape=box` and come first in the node's attribute list.
pub trait NodeAttributeProvider {
    /// Returns attributes as `key=value` strings.
    fn attributes(&self, issue: &Issue) -> Vec<String>;
}

impl<F> NodeAttributeProvider for F
where
    F: Fn(&Issue) -> Vec<String>,
{
    fn attributes(&self, issue: &Issue) -> Vec<String> {
        self(issue)
    }
}

/// Picks a node shape from the issue type.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeStyle;

impl NodeAttributeProvider for TypeStyle {
    fn attributes(&self, issue: &Issue) -> Vec<String> {
        let shape = match issue.issue_type {
            IssueType::Milestone => "octagon",
            IssueType::MetaEpic => "box3d",
            _ => "box",
        };
        vec![format!("shape={shape}")]
    }
}

/// Formats the dot attributes of one issue node.
///
/// # Arguments
///
/// * `issue` - The issue to describe
/// * `permalink` - Browser URL of the issue
/// * `provider` - Optional source of extra attributes
///
/// # Returns
///
/// The attributes in emission order; the caller joins them with `", "`.
pub fn format_node(
    issue: &Issue,
    permalink: &str,
    provider: Option<&dyn NodeAttributeProvider>,
) -> Vec<String> {
    let mut attrs = match provider {
        Some(provider) => provider.attributes(issue),
        None => vec!["shape=box".to_string()],
    };

    attrs.push(label(issue));
    attrs.push(format!(
        "tooltip={}",
        quote(&issue.tooltip_text().replace('"', "'"))
    ));
    attrs.push(format!("URL={}", quote(permalink)));
    attrs
}

/// Builds the two-row HTML-like label: key and owner, then the summary.
fn label(issue: &Issue) -> String {
    format!(
        "label=<<table border=\"0\"><tr><td><b>{}</b></td><td><b>{}</b></td></tr>\
         <tr><td colspan=\"2\">{}</td></tr></table>>",
        escape_html(&issue.key),
        escape_html(issue.owner()),
        wrap_summary(&issue.summary)
    )
}

/// Wraps a summary at [`SUMMARY_WIDTH`] columns.
///
/// Lines are escaped for the HTML-like label and joined with `<br/>`.
/// Widths are counted on the unescaped text.
pub fn wrap_summary(summary: &str) -> String {
    textwrap::wrap(summary, SUMMARY_WIDTH)
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join("<br/>")
}

/// Escapes characters that would break an HTML-like dot label.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Quotes a dot identifier or string value.
pub(crate) fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}
