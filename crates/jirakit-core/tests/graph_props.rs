// Rust guideline compliant 2026-10-19

//! Property-based tests for the graph module.
//!
//! These tests validate properties that should hold for any fetched issue
//! set: node completeness, edge soundness, and deterministic output.

use jirakit_core::format::{wrap_summary, SUMMARY_WIDTH};
use jirakit_core::{
    generate, DotOptions, Issue, IssueGraph, IssueLink, IssueType, LinkDirection, MemorySource,
};
use proptest::prelude::*;
use std::collections::HashSet;

const BROWSE: &str = "https://jira.example.org/browse/";

/// Generates link type names, mostly "Blocks".
fn arb_link_type() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => Just("Blocks".to_string()),
        1 => Just("Relates".to_string()),
    ]
}

/// Generates a link to one of `DLP-0` .. `DLP-14` (some of which are not fetched).
fn arb_link() -> impl Strategy<Value = IssueLink> {
    (arb_link_type(), 0usize..15, any::<bool>()).prop_map(|(link_type, n, outward)| {
        let key = format!("DLP-{}", n);
        if outward {
            IssueLink::outward(link_type, key)
        } else {
            IssueLink::inward(link_type, key)
        }
    })
}

/// Generates a set of issues with distinct keys `DLP-0` .. `DLP-(n-1)`.
fn arb_issues() -> impl Strategy<Value = Vec<Issue>> {
    prop::collection::vec(
        (
            "[A-Za-z ]{0,60}",
            prop::collection::vec(arb_link(), 0..4),
            prop_oneof![
                Just(IssueType::Milestone),
                Just(IssueType::Epic),
                Just(IssueType::Other("Story".to_string())),
            ],
        ),
        0..10,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (summary, links, issue_type))| {
                let mut issue = Issue::new(format!("DLP-{}", i), issue_type, summary);
                issue.links = links;
                issue
            })
            .collect()
    })
}

proptest! {
    /// Every fetched issue is declared exactly once.
    #[test]
    fn prop_one_node_per_issue(issues in arb_issues()) {
        let source = MemorySource::new(issues.clone(), BROWSE);
        let dot = generate(&source, "", &DotOptions::default(), None, None).unwrap();

        for issue in &issues {
            let declaration = format!("  \"{}\" [", issue.key);
            prop_assert_eq!(dot.matches(&declaration).count(), 1);
        }
    }

    /// Edges are exactly the included outward links between fetched issues.
    #[test]
    fn prop_edges_are_fetched_outward_links(issues in arb_issues()) {
        let source = MemorySource::new(Vec::new(), BROWSE);
        let link_types = vec!["Blocks".to_string()];
        let graph = IssueGraph::from_issues(&issues, &source, &link_types, None, None);
        let keys: HashSet<&str> = issues.iter().map(|issue| issue.key.as_str()).collect();

        let expected: Vec<(&str, &str)> = issues
            .iter()
            .flat_map(|issue| {
                issue.links.iter().filter_map(|link| match &link.direction {
                    LinkDirection::Outward { target }
                        if link.link_type == "Blocks" && keys.contains(target.as_str()) =>
                    {
                        Some((issue.key.as_str(), target.as_str()))
                    }
                    _ => None,
                })
            })
            .collect();

        prop_assert_eq!(graph.edges(), expected);
    }

    /// Generation over an unchanged fetch result is byte-identical.
    #[test]
    fn prop_generation_is_deterministic(issues in arb_issues()) {
        let source = MemorySource::new(issues, BROWSE);
        let options = DotOptions::default();
        let first = generate(&source, "", &options, None, None).unwrap();
        let second = generate(&source, "", &options, None, None).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Wrapped summary lines never exceed the label width and keep every word.
    #[test]
    fn prop_summary_wrap(words in prop::collection::vec("[a-z]{1,12}", 1..12)) {
        let summary = words.join(" ");
        let wrapped = wrap_summary(&summary);
        let lines: Vec<&str> = wrapped.split("<br/>").collect();

        prop_assert!(lines.iter().all(|line| line.chars().count() <= SUMMARY_WIDTH));
        prop_assert_eq!(lines.join(" "), summary.clone());
        if summary.chars().count() <= SUMMARY_WIDTH {
            prop_assert_eq!(lines.len(), 1);
        } else {
            prop_assert!(lines.len() >= 2);
        }
    }
}
