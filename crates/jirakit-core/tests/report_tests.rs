// Rust guideline compliant 2026-10-19

//! Unit tests for table and LDM-240 reports.

use jirakit_core::{
    ldm_table, render_ldm, render_table, CellContent, Issue, IssueType, TableOptions,
};

fn milestone(key: &str, wbs: Option<&str>, cycle: Option<&str>, summary: &str) -> Issue {
    let mut issue = Issue::new(key, IssueType::Milestone, summary);
    issue.wbs = wbs.map(str::to_string);
    issue.fix_versions = cycle.into_iter().map(str::to_string).collect();
    issue
}

fn cycles() -> Vec<String> {
    vec!["S17".to_string(), "F17".to_string(), "S18".to_string()]
}

#[test]
fn test_ldm_one_cell_per_row_at_cycle_column() {
    let issues = vec![
        milestone("DLP-1", Some("02C.01"), Some("F17"), "First light"),
        milestone("DLP-2", Some("02C.02"), Some("S17"), "Alerts"),
    ];
    let table = ldm_table(&issues, &cycles(), CellContent::Key);

    assert_eq!(table.header, vec!["WBS", "S17", "F17", "S18"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["02C.01", "-", "DLP-1", "-"]);
    assert_eq!(table.rows[1], vec!["02C.02", "DLP-2", "-", "-"]);

    for row in &table.rows {
        assert_eq!(row.len(), table.header.len());
        assert_eq!(row[1..].iter().filter(|cell| *cell != "-").count(), 1);
    }
}

#[test]
fn test_ldm_skips_milestones_without_release() {
    let issues = vec![
        milestone("DLP-1", Some("02C.01"), None, "Unplanned"),
        milestone("DLP-2", Some("02C.02"), Some("X99"), "Unknown cycle"),
        milestone("DLP-3", None, Some("S18"), "No WBS"),
    ];
    let table = ldm_table(&issues, &cycles(), CellContent::Title);

    assert_eq!(table.rows, vec![vec!["None", "-", "-", "No WBS"]]);
}

#[test]
fn test_ldm_key_and_title_cell() {
    let issues = vec![milestone("DLP-1", Some("02C.01"), Some("S17"), "First light")];
    let table = ldm_table(&issues, &cycles(), CellContent::KeyAndTitle);
    assert_eq!(table.rows[0][1], "DLP-1 First light");
}

#[test]
fn test_render_ldm_csv() {
    let issues = vec![milestone("DLP-1", Some("02C.01"), Some("S17"), "First light")];
    let table = ldm_table(&issues, &cycles(), CellContent::Key);
    assert_eq!(
        render_ldm(&table, true),
        "WBS,S17,F17,S18\n02C.01,DLP-1,-,-\n"
    );
}

#[test]
fn test_render_ldm_text_table() {
    let issues = vec![milestone("DLP-1", Some("02C.01"), Some("S17"), "First light")];
    let table = ldm_table(&issues, &cycles(), CellContent::Key);
    let output = render_ldm(&table, false);

    assert!(output.contains("WBS"));
    assert!(output.contains("02C.01"));
    assert!(output.contains("DLP-1"));
    assert!(!output.contains(','));
}

#[test]
fn test_table_csv_with_key_and_title() {
    let issues = vec![milestone("DLP-1", Some("02C.01"), Some("S17"), "Alerts, phase 1")];
    let options = TableOptions {
        csv: true,
        show_key: true,
        show_title: true,
        url_base: None,
    };

    assert_eq!(
        render_table(&issues, &options),
        "WBS,Key,Title,Cycle\n02C.01,DLP-1,\"Alerts, phase 1\",S17\n"
    );
}

#[test]
fn test_table_links_keys_with_url_base() {
    let issues = vec![milestone("DLP-1", Some("02C.01"), None, "Alerts")];
    let options = TableOptions {
        csv: true,
        url_base: Some("https://jira.example.org/browse/".to_string()),
        ..TableOptions::default()
    };

    assert_eq!(
        render_table(&issues, &options),
        "WBS,Key,Cycle\n02C.01,\"<a href=\"\"https://jira.example.org/browse/DLP-1\"\">DLP-1</a>\",-\n"
    );
}

#[test]
fn test_table_without_key_column() {
    let issues = vec![milestone("DLP-1", Some("02C.01"), Some("S17"), "Alerts")];
    let options = TableOptions {
        csv: true,
        show_key: false,
        show_title: true,
        url_base: None,
    };

    assert_eq!(render_table(&issues, &options), "WBS,Title,Cycle\n02C.01,Alerts,S17\n");
}

#[test]
fn test_text_table_contains_cells() {
    let issues = vec![milestone("DLP-1", Some("02C.01"), Some("S17"), "Alerts")];
    let output = render_table(&issues, &TableOptions::default());
    assert!(output.contains("Key"));
    assert!(output.contains("DLP-1"));
    assert!(output.contains("S17"));
}
