// Rust guideline compliant 2026-10-19

//! Tests for JIRA wire decoding and saved search files.

use jirakit_core::{
    fetch_issues, generate, DotOptions, Error, FixVersionRank, IssueLink, IssueSource, IssueType,
};
use jirakit_jira::{FieldMap, FileSource, JiraError, RawIssue};
use tempfile::TempDir;

const BROWSE: &str = "https://jira.example.org/browse/";

const SEARCH: &str = r#"{
  "startAt": 0,
  "maxResults": 1000,
  "total": 3,
  "issues": [
    {
      "key": "DLP-10",
      "fields": {
        "issuetype": {"name": "Milestone"},
        "summary": "Alert production ready for commissioning",
        "description": null,
        "customfield_10500": "02C.03.01",
        "customfield_10502": null,
        "fixVersions": [{"name": "S17"}],
        "issuelinks": [
          {"type": {"name": "Blocks"}, "outwardIssue": {"key": "DLP-11"}},
          {"type": {"name": "Relates"}, "outwardIssue": {"key": "DLP-12"}}
        ]
      }
    },
    {
      "key": "DLP-11",
      "fields": {
        "issuetype": {"name": "Meta-epic"},
        "summary": "Commissioning",
        "description": "Say \"go\"",
        "customfield_10500": "02C.03",
        "fixVersions": [{"name": "F17"}],
        "issuelinks": [
          {"type": {"name": "Blocks"}, "inwardIssue": {"key": "DLP-10"}}
        ]
      }
    },
    {
      "key": "DLP-12",
      "fields": {
        "issuetype": {"name": "Story"},
        "summary": "Write the docs",
        "customfield_10502": {"value": "SQuaRE", "id": "11000"},
        "issuelinks": [
          {"type": {"name": "Blocks"}, "outwardIssue": {"key": "DLP-99"}}
        ]
      }
    }
  ]
}"#;

fn source() -> FileSource {
    FileSource::from_json(SEARCH, &FieldMap::default(), BROWSE).expect("Valid saved search")
}

#[test]
fn test_decode_fields() {
    let issues = fetch_issues(&source(), "", 1000).unwrap();
    assert_eq!(issues.len(), 3);

    let milestone = &issues[0];
    assert_eq!(milestone.key, "DLP-10");
    assert_eq!(milestone.issue_type, IssueType::Milestone);
    assert_eq!(milestone.wbs.as_deref(), Some("02C.03.01"));
    assert_eq!(milestone.team, None);
    assert_eq!(milestone.description, None);
    assert_eq!(milestone.fix_versions, vec!["S17".to_string()]);
    assert_eq!(
        milestone.links,
        vec![
            IssueLink::outward("Blocks", "DLP-11"),
            IssueLink::outward("Relates", "DLP-12"),
        ]
    );

    let meta_epic = &issues[1];
    assert_eq!(meta_epic.issue_type, IssueType::MetaEpic);
    assert_eq!(meta_epic.links, vec![IssueLink::inward("Blocks", "DLP-10")]);

    let story = &issues[2];
    assert_eq!(story.issue_type, IssueType::Other("Story".to_string()));
    assert_eq!(story.owner(), "SQuaRE");
    assert!(story.fix_versions.is_empty());
}

#[test]
fn test_custom_field_names_are_configurable() {
    let raw: RawIssue = serde_json::from_str(
        r#"{"key": "DM-1", "fields": {"issuetype": {"name": "Epic"}, "summary": "s", "customfield_1": "01.02"}}"#,
    )
    .unwrap();
    let fields = FieldMap {
        wbs_field: "customfield_1".to_string(),
        team_field: "customfield_2".to_string(),
    };
    let issue = fields.decode(&raw);
    assert_eq!(issue.owner(), "01.02");
}

#[test]
fn test_issue_without_fields_decodes_to_empty_values() {
    let raw: RawIssue = serde_json::from_str(r#"{"key": "DM-2"}"#).unwrap();
    let issue = FieldMap::default().decode(&raw);
    assert_eq!(issue.key, "DM-2");
    assert_eq!(issue.summary, "");
    assert_eq!(issue.owner(), "");
    assert!(issue.links.is_empty());
}

#[test]
fn test_saved_search_diagram() {
    let options = DotOptions {
        rank_order: vec!["S17".to_string(), "F17".to_string()],
        ..DotOptions::default()
    };
    let dot = generate(&source(), "", &options, None, Some(&FixVersionRank)).unwrap();

    assert!(dot.contains("  \"DLP-10\" -> \"DLP-11\"\n"));
    assert!(!dot.contains("\"DLP-11\" -> \"DLP-10\""));
    assert!(!dot.contains("DLP-99"));
    assert!(!dot.contains("\"DLP-10\" -> \"DLP-12\""));
    assert!(dot.contains("  { rank=same; \"S17\"; \"DLP-10\" }\n"));
    assert!(dot.contains("  { rank=same; \"F17\"; \"DLP-11\" }\n"));
    assert!(dot.contains("tooltip=\"Say 'go'\""));
    assert!(dot.contains("URL=\"https://jira.example.org/browse/DLP-12\""));
}

#[test]
fn test_file_source_open() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("search.json");
    std::fs::write(&path, SEARCH).unwrap();

    let source = FileSource::open(&path, &FieldMap::default(), BROWSE).unwrap();
    let refs = source.search("ignored", 2).unwrap();
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0].key, "DLP-10");
}

#[test]
fn test_file_source_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = FileSource::open(
        &temp_dir.path().join("missing.json"),
        &FieldMap::default(),
        BROWSE,
    );
    assert!(matches!(result, Err(JiraError::Io { .. })));
}

#[test]
fn test_invalid_json_converts_to_source_error() {
    let error = FileSource::from_json("[1, 2]", &FieldMap::default(), BROWSE)
        .expect_err("Arrays are not search responses");
    assert!(matches!(error, JiraError::Json(_)));

    let core: Error = error.into();
    assert!(matches!(core, Error::SourceUnavailable(_)));
}
