// Rust guideline compliant 2026-10-19

//! jirakit Core Library
//!
//! This crate provides the foundational components for turning JIRA issues
//! into dependency diagrams and release tables:
//! - Data models (Issue, IssueType, IssueLink, owner projection)
//! - The issue source contract and an in-memory source
//! - Graph generation in GraphViz dot notation
//! - Node formatting and rank grouping
//! - CSV, text and LDM-240 table reports
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod models;
pub mod query;
pub mod rank;
pub mod report;
pub mod source;

pub use config::Config;
pub use error::{Error, Result};
pub use format::{format_node, NodeAttributeProvider, TypeStyle};
pub use graph::{generate, DotOptions, GraphFormat, IssueGraph, DEFAULT_MAX_RESULTS};
pub use models::{Issue, IssueLink, IssueType, LinkDirection, OwnerField};
pub use query::build_query;
pub use rank::{render_rank_section, FixVersionRank, RankBuckets, RankClassifier};
pub use report::{ldm_table, render_ldm, render_table, CellContent, LdmTable, TableOptions};
pub use source::{fetch_issues, IssueRef, IssueSource, MemorySource};
