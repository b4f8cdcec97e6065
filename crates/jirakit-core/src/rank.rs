// Rust guideline compliant 2026-10-19

//! Rank grouping for dot output.
//!
//! Issues are bucketed under a caller-defined rank label (typically a
//! release cycle). The rank section chains one marker node per label and
//! pins every bucketed issue to the same rank as its marker.

use crate::format::quote;
use crate::Issue;
use std::collections::HashMap;
use std::fmt::Write;

/// Assigns an issue to a rank.
pub trait RankClassifier {
    /// Returns the rank label of the issue, or `None` to leave it unranked.
    fn rank(&self, issue: &Issue) -> Option<String>;
}

impl<F> RankClassifier for F
where
    F: Fn(&Issue) -> Option<String>,
{
    fn rank(&self, issue: &Issue) -> Option<String> {
        self(issue)
    }
}

/// Ranks an issue by its first fix version.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixVersionRank;

impl RankClassifier for FixVersionRank {
    fn rank(&self, issue: &Issue) -> Option<String> {
        issue.cycle().map(str::to_string)
    }
}

/// Issue keys grouped by rank label, in insertion order within a label.
#[derive(Debug, Clone, Default)]
pub struct RankBuckets {
    buckets: HashMap<String, Vec<String>>,
}

impl RankBuckets {
    /// Creates an empty set of buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key` to the bucket for `label`.
    pub fn insert(&mut self, label: impl Into<String>, key: impl Into<String>) {
        self.buckets.entry(label.into()).or_default().push(key.into());
    }

    /// Returns the keys bucketed under `label`.
    pub fn get(&self, label: &str) -> &[String] {
        self.buckets.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if no issue has been bucketed.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Renders the rank section of a dot document.
///
/// Only labels listed in `rank_order` are rendered; buckets under any other
/// label are left out. Returns an empty string when `rank_order` is empty.
///
/// # Arguments
///
/// * `buckets` - Issue keys grouped by rank label
/// * `rank_order` - Labels to render, in display order
pub fn render_rank_section(buckets: &RankBuckets, rank_order: &[String]) -> String {
    let mut output = String::new();
    if rank_order.is_empty() {
        return output;
    }

    output.push_str("  node [fontname=\"monospace\", shape=none]\n");
    let chain: Vec<String> = rank_order.iter().map(|rank| quote(rank)).collect();
    let _ = writeln!(output, "  {}", chain.join(" -> "));

    for rank in rank_order {
        let members: Vec<String> = std::iter::once(rank)
            .chain(buckets.get(rank))
            .map(|item| quote(item))
            .collect();
        let _ = writeln!(output, "  {{ rank=same; {} }}", members.join("; "));
    }

    output
}
