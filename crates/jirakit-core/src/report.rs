// Rust guideline compliant 2026-10-19

//! Tabular reports over issues.
//!
//! Two layouts are supported: a flat issue table (one row per issue with
//! WBS, key, title and cycle columns) and the LDM-240 release table, which
//! places each milestone in the column of its release cycle.

use crate::Issue;
use tabled::{builder::Builder, settings::Style};
use tracing::warn;

/// Placeholder for empty cells.
const EMPTY_CELL: &str = "-";

/// Options for the flat issue table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Render CSV instead of a text table.
    pub csv: bool,
    /// Include the issue key column.
    pub show_key: bool,
    /// Include the issue title column.
    pub show_title: bool,
    /// When set, issue keys link to `url_base` + key.
    pub url_base: Option<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            csv: false,
            show_key: true,
            show_title: false,
            url_base: None,
        }
    }
}

/// What an LDM-240 cell shows for a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellContent {
    /// The issue key.
    #[default]
    Key,
    /// The issue summary.
    Title,
    /// The key followed by the summary.
    KeyAndTitle,
}

impl CellContent {
    fn cell(self, issue: &Issue) -> String {
        match self {
            CellContent::Key => issue.key.clone(),
            CellContent::Title => issue.summary.clone(),
            CellContent::KeyAndTitle => format!("{} {}", issue.key, issue.summary),
        }
    }
}

/// An LDM-240 release table: WBS rows against release cycle columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LdmTable {
    /// `WBS` followed by the cycle names.
    pub header: Vec<String>,
    /// One row per placed milestone.
    pub rows: Vec<Vec<String>>,
}

/// Renders the flat issue table.
///
/// Columns are `WBS`, `Key` (if enabled), `Title` (if enabled) and `Cycle`.
pub fn render_table(issues: &[Issue], options: &TableOptions) -> String {
    let mut header = vec!["WBS".to_string()];
    if options.show_key {
        header.push("Key".to_string());
    }
    if options.show_title {
        header.push("Title".to_string());
    }
    header.push("Cycle".to_string());

    let rows = issues
        .iter()
        .map(|issue| {
            let mut row = vec![wbs_cell(issue)];
            if options.show_key {
                row.push(match &options.url_base {
                    Some(base) => format!("<a href=\"{}{}\">{}</a>", base, issue.key, issue.key),
                    None => issue.key.clone(),
                });
            }
            if options.show_title {
                row.push(issue.summary.clone());
            }
            row.push(issue.cycle().unwrap_or(EMPTY_CELL).to_string());
            row
        })
        .collect::<Vec<_>>();

    render_rows(&header, &rows, options.csv)
}

/// Lays out milestones in an LDM-240 release table.
///
/// Each milestone gets one row holding its WBS code and, in the column of
/// its first fix version, the requested cell content; every other cycle
/// column holds `-`. Milestones without a fix version, or whose fix
/// version is not one of `cycles`, are left out with a warning.
///
/// # Arguments
///
/// * `issues` - Milestones, in display order
/// * `cycles` - Release cycle names, in column order
/// * `content` - What to show in the occupied cell
pub fn ldm_table(issues: &[Issue], cycles: &[String], content: CellContent) -> LdmTable {
    let mut header = Vec::with_capacity(cycles.len() + 1);
    header.push("WBS".to_string());
    header.extend(cycles.iter().cloned());

    let mut rows = Vec::new();
    for issue in issues {
        let Some(cycle) = issue.cycle() else {
            warn!("No release assigned to {}", issue.key);
            continue;
        };
        if !cycles.iter().any(|known| known == cycle) {
            warn!("Release {} of {} is not a known cycle", cycle, issue.key);
            continue;
        }

        let mut row = Vec::with_capacity(header.len());
        row.push(wbs_cell(issue));
        row.extend(cycles.iter().map(|known| {
            if known == cycle {
                content.cell(issue)
            } else {
                EMPTY_CELL.to_string()
            }
        }));
        rows.push(row);
    }

    LdmTable { header, rows }
}

/// Renders an LDM-240 table as CSV or as a text table.
pub fn render_ldm(table: &LdmTable, csv: bool) -> String {
    render_rows(&table.header, &table.rows, csv)
}

fn wbs_cell(issue: &Issue) -> String {
    issue.wbs.clone().unwrap_or_else(|| "None".to_string())
}

fn render_rows(header: &[String], rows: &[Vec<String>], csv: bool) -> String {
    if csv {
        let mut output = String::new();
        for record in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
            let line: Vec<String> = record.iter().map(|cell| csv_field(cell)).collect();
            output.push_str(&line.join(","));
            output.push('\n');
        }
        return output;
    }

    let mut builder = Builder::default();
    builder.push_record(header.to_vec());
    for row in rows {
        builder.push_record(row.clone());
    }

    let mut table = builder.build();
    table.with(Style::modern());

    table.to_string()
}

/// Quotes a CSV field when it contains a separator, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
