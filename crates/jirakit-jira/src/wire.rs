// Rust guideline compliant 2026-10-19

//! JIRA REST wire format.
//!
//! Only the fields jirakit renders are decoded. Custom fields are looked up
//! by name through a [`FieldMap`], since their ids differ between servers.

use jirakit_core::{Config, Issue, IssueLink, IssueType};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Body of `GET /rest/api/2/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Matching issues.
    #[serde(default)]
    pub issues: Vec<RawIssue>,
    /// Total number of matches on the server (may exceed `issues.len()`).
    #[serde(default)]
    pub total: Option<usize>,
}

/// An issue as returned by JIRA.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    /// Issue key.
    pub key: String,
    /// Issue fields.
    #[serde(default)]
    pub fields: RawFields,
}

/// The subset of issue fields jirakit reads, plus every custom field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFields {
    issuetype: Option<Named>,
    summary: Option<String>,
    description: Option<String>,
    fix_versions: Option<Vec<Named>>,
    issuelinks: Option<Vec<RawLink>>,
    #[serde(flatten)]
    custom: HashMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct Keyed {
    key: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLink {
    #[serde(rename = "type")]
    link_type: Named,
    outward_issue: Option<Keyed>,
    inward_issue: Option<Keyed>,
}

/// Names of the custom fields holding the owner of an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap {
    /// Custom field with the WBS code.
    pub wbs_field: String,
    /// Custom field with the team.
    pub team_field: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl FieldMap {
    /// Takes the custom field names from the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            wbs_field: config.wbs_field.clone(),
            team_field: config.team_field.clone(),
        }
    }

    /// Converts a raw JIRA issue into a core issue.
    ///
    /// Absent fields decode to their empty value; a link that names neither
    /// an outward nor an inward issue is dropped.
    pub fn decode(&self, raw: &RawIssue) -> Issue {
        let fields = &raw.fields;
        let issue_type = fields
            .issuetype
            .as_ref()
            .map(|named| IssueType::from(named.name.as_str()))
            .unwrap_or_else(|| IssueType::Other(String::new()));

        let mut issue = Issue::new(
            raw.key.clone(),
            issue_type,
            fields.summary.clone().unwrap_or_default(),
        );
        issue.description = fields.description.clone();
        issue.wbs = fields.custom.get(&self.wbs_field).and_then(text_value);
        issue.team = fields.custom.get(&self.team_field).and_then(text_value);
        issue.fix_versions = fields
            .fix_versions
            .iter()
            .flatten()
            .map(|version| version.name.clone())
            .collect();
        issue.links = fields
            .issuelinks
            .iter()
            .flatten()
            .filter_map(|link| decode_link(&raw.key, link))
            .collect();
        issue
    }
}

fn decode_link(key: &str, link: &RawLink) -> Option<IssueLink> {
    let link_type = link.link_type.name.clone();
    match (&link.outward_issue, &link.inward_issue) {
        (Some(outward), _) => Some(IssueLink::outward(link_type, outward.key.clone())),
        (None, Some(inward)) => Some(IssueLink::inward(link_type, inward.key.clone())),
        (None, None) => {
            debug!("Dropping {} link of {} without an issue", link_type, key);
            None
        }
    }
}

/// Reads a custom field that is either plain text or a select option.
fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Object(map) => map
            .get("value")
            .or_else(|| map.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}
