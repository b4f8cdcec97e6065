// Rust guideline compliant 2026-10-19

//! JQL query construction for WBS-scoped searches.

use crate::IssueType;

/// Builds a JQL query selecting issues of the given types under a WBS element.
///
/// The WBS code matches as a prefix, so `02C.04` selects `02C.04.01` too.
/// Results are ordered by WBS.
///
/// # Arguments
///
/// * `project` - JIRA project key
/// * `issue_types` - Issue types to include
/// * `wbs` - WBS code prefix; empty selects the whole project
pub fn build_query(project: &str, issue_types: &[IssueType], wbs: &str) -> String {
    let mut clauses = vec![format!("project = {}", project)];

    if !issue_types.is_empty() {
        let types: Vec<String> = issue_types
            .iter()
            .map(|issue_type| format!("\"{}\"", issue_type.name()))
            .collect();
        clauses.push(format!("issuetype in ({})", types.join(", ")));
    }

    if !wbs.is_empty() {
        clauses.push(format!("WBS ~ \"{}*\"", wbs.replace('"', "")));
    }

    format!("{} ORDER BY WBS ASC", clauses.join(" AND "))
}
