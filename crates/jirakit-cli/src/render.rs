// Rust guideline compliant 2026-10-19

//! Rendering dot documents through GraphViz.

use anyhow::{bail, Context, Result};
use jirakit_core::GraphFormat;
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Turns a dot document into bytes of the requested format.
pub trait GraphRenderer {
    /// Renders `dot` as `format`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&self, dot: &str, format: GraphFormat) -> Result<Vec<u8>>;
}

/// Renders by piping the document through a GraphViz layout program.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    program: String,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new("dot")
    }
}

impl GraphvizRenderer {
    /// Creates a renderer running `program` (e.g. `dot`, `neato`).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl GraphRenderer for GraphvizRenderer {
    fn render(&self, dot: &str, format: GraphFormat) -> Result<Vec<u8>> {
        if format == GraphFormat::Dot {
            return Ok(dot.as_bytes().to_vec());
        }

        debug!("Running {} -T{}", self.program, format.name());
        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", format.name()))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to run '{}'; is GraphViz installed?", self.program))?;

        // dot reads all of its input before writing, so stdin can be filled first.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(dot.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            bail!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(output.stdout)
    }
}
