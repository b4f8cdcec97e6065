// Rust guideline compliant 2026-10-19

//! Command implementations for the jirakit CLI.

pub mod graph;
pub mod ldm;
pub mod table;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Writes command output to `path`, or to `out` when no path is given.
pub(crate) fn write_output(bytes: &[u8], path: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            out.write_all(bytes)?;
            out.flush()?;
            Ok(())
        }
    }
}
