//! Fixed-width discrepancy table.

use std::fmt;

use serde::Deserialize;

use crate::diff::ChangeRecord;

/// Token rendered for an absent value
pub const ABSENT: &str = "null";

/// Cell alignment within a column.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    #[default]
    Right,
    Left,
}

/// Renders material change records as a three-column table.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    header: [String; 3],
    justify: Justify,
}

impl ReportRenderer {
    /// Header cells become `Property`, `<left> Response`, `<right> Response`
    pub fn new(left_label: &str, right_label: &str) -> Self {
        Self {
            header: [
                "Property".to_string(),
                format!("{} Response", left_label),
                format!("{} Response", right_label),
            ],
            justify: Justify::Right,
        }
    }

    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Render `changes`, or `None` when there is nothing material to show.
    pub fn render(&self, changes: &[ChangeRecord]) -> Option<RenderedTable> {
        if changes.is_empty() {
            return None;
        }

        let mut rows: Vec<[String; 3]> = Vec::with_capacity(changes.len() + 1);
        rows.push(self.header.clone());
        for change in changes {
            rows.push([
                escape_controls(&change.path),
                cell(change.left.as_deref()),
                cell(change.right.as_deref()),
            ]);
        }

        let mut widths = [0usize; 3];
        for row in &rows {
            for (width, value) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(value.chars().count());
            }
        }

        let border = "=".repeat(widths.iter().sum::<usize>() + 3 * widths.len() + 1);
        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(border.clone());
        for row in &rows {
            lines.push(self.format_row(row, &widths));
        }
        lines.push(border);

        Some(RenderedTable {
            lines,
            column_widths: widths.to_vec(),
        })
    }

    fn format_row(&self, row: &[String; 3], widths: &[usize; 3]) -> String {
        let mut line = String::new();
        for (value, width) in row.iter().zip(widths.iter()) {
            let padded = match self.justify {
                Justify::Right => format!("| {:>w$} ", value, w = *width),
                Justify::Left => format!("| {:<w$} ", value, w = *width),
            };
            line.push_str(&padded);
        }
        line.push('|');
        line
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new("API", "WM")
    }
}

fn cell(value: Option<&str>) -> String {
    escape_controls(value.unwrap_or(ABSENT))
}

/// Control characters are written as escapes so every row stays on one line
fn escape_controls(value: &str) -> String {
    if !value.chars().any(char::is_control) {
        return value.to_string();
    }
    let mut escaped = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    escaped
}

/// A rendered table: border, header, one line per change, border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub lines: Vec<String>,
    pub column_widths: Vec<usize>,
}

impl RenderedTable {
    pub fn row_count(&self) -> usize {
        self.lines.len().saturating_sub(3)
    }
}

impl fmt::Display for RenderedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
