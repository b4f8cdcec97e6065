// Rust guideline compliant 2026-10-19

//! JIRA issue sources for jirakit.
//!
//! This crate decodes JIRA REST (v2) issue documents into core issues and
//! provides two [`jirakit_core::IssueSource`] implementations:
//! - [`JiraClient`], which queries a live server
//! - [`FileSource`], which reads a saved search response from disk

pub mod client;
pub mod error;
pub mod file;
pub mod wire;

pub use client::JiraClient;
pub use error::JiraError;
pub use file::FileSource;
pub use wire::{FieldMap, RawIssue, SearchResponse};
