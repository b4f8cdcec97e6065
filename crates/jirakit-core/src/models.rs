// Rust guideline compliant 2026-10-19

//! Core data models for jirakit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of a JIRA issue.
///
/// Only the types that change how an issue is rendered get their own
/// variant; every other type name is carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueType {
    /// A deliverable milestone.
    Milestone,
    /// A grouping of epics.
    MetaEpic,
    /// An epic.
    Epic,
    /// Any other issue type (Story, Bug, ...).
    Other(String),
}

impl IssueType {
    /// Returns the type name as the tracker spells it.
    pub fn name(&self) -> &str {
        match self {
            IssueType::Milestone => "Milestone",
            IssueType::MetaEpic => "Meta-epic",
            IssueType::Epic => "Epic",
            IssueType::Other(name) => name,
        }
    }
}

impl From<&str> for IssueType {
    fn from(name: &str) -> Self {
        match name {
            "Milestone" => IssueType::Milestone,
            "Meta-epic" => IssueType::MetaEpic,
            "Epic" => IssueType::Epic,
            other => IssueType::Other(other.to_string()),
        }
    }
}

impl From<String> for IssueType {
    fn from(name: String) -> Self {
        IssueType::from(name.as_str())
    }
}

impl From<IssueType> for String {
    fn from(issue_type: IssueType) -> Self {
        issue_type.name().to_string()
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which field identifies the owner of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerField {
    /// Work Breakdown Structure code.
    Wbs,
    /// Responsible team name.
    Team,
}

impl OwnerField {
    /// Selects the owner field for an issue type.
    ///
    /// Milestones, meta-epics and epics are owned by a WBS element; every
    /// other issue is owned by a team.
    pub fn for_type(issue_type: &IssueType) -> Self {
        match issue_type {
            IssueType::Milestone | IssueType::MetaEpic | IssueType::Epic => OwnerField::Wbs,
            IssueType::Other(_) => OwnerField::Team,
        }
    }
}

/// Direction of a link as seen from the issue that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkDirection {
    /// This issue points at `target`.
    Outward {
        /// Key of the issue pointed at.
        target: String,
    },
    /// `source` points at this issue.
    Inward {
        /// Key of the pointing issue.
        source: String,
    },
}

/// A typed link between two issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLink {
    /// Link type name, e.g. "Blocks".
    pub link_type: String,
    /// Direction and the issue on the other end.
    pub direction: LinkDirection,
}

impl IssueLink {
    /// Creates an outward link to `target`.
    pub fn outward(link_type: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            link_type: link_type.into(),
            direction: LinkDirection::Outward {
                target: target.into(),
            },
        }
    }

    /// Creates an inward link from `source`.
    pub fn inward(link_type: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            link_type: link_type.into(),
            direction: LinkDirection::Inward {
                source: source.into(),
            },
        }
    }
}

/// A JIRA issue, as handed over by an issue source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique issue key (e.g. DLP-123).
    pub key: String,
    /// Issue type.
    pub issue_type: IssueType,
    /// One-line summary.
    pub summary: String,
    /// Optional long description.
    #[serde(default)]
    pub description: Option<String>,
    /// WBS code, if the issue carries one.
    #[serde(default)]
    pub wbs: Option<String>,
    /// Team name, if the issue carries one.
    #[serde(default)]
    pub team: Option<String>,
    /// Fix versions (release cycles) in tracker order.
    #[serde(default)]
    pub fix_versions: Vec<String>,
    /// Links to other issues.
    #[serde(default)]
    pub links: Vec<IssueLink>,
}

impl Issue {
    /// Creates an issue with no optional fields set.
    pub fn new(key: impl Into<String>, issue_type: IssueType, summary: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            issue_type,
            summary: summary.into(),
            description: None,
            wbs: None,
            team: None,
            fix_versions: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Returns the owner of the issue.
    ///
    /// The owner is the WBS code or the team name depending on the issue
    /// type (see [`OwnerField::for_type`]). A missing field yields an empty
    /// string.
    pub fn owner(&self) -> &str {
        let field = match OwnerField::for_type(&self.issue_type) {
            OwnerField::Wbs => &self.wbs,
            OwnerField::Team => &self.team,
        };
        field.as_deref().unwrap_or("")
    }

    /// Returns the text shown when hovering the node.
    ///
    /// The description when present and non-empty, otherwise the summary.
    pub fn tooltip_text(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => description,
            _ => &self.summary,
        }
    }

    /// Returns the release cycle the issue is assigned to, if any.
    pub fn cycle(&self) -> Option<&str> {
        self.fix_versions.first().map(String::as_str)
    }
}
