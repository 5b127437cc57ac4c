//! Plain-text rendering of rows.

use super::rows::Row;

pub const CHEVRON_EXPANDED: &str = "▼";
pub const CHEVRON_COLLAPSED: &str = "▶";
pub const CHECKBOX_CHECKED: &str = "[x]";
pub const CHECKBOX_UNCHECKED: &str = "[ ]";

/// Chevron for a row, if it has one.
pub fn chevron(row: &Row<'_>) -> Option<&'static str> {
    match (row.has_children, row.is_expanded) {
        (false, _) => None,
        (true, true) => Some(CHEVRON_EXPANDED),
        (true, false) => Some(CHEVRON_COLLAPSED),
    }
}

pub fn checkbox(row: &Row<'_>) -> &'static str {
    if row.is_selected {
        CHECKBOX_CHECKED
    } else {
        CHECKBOX_UNCHECKED
    }
}

/// Format a row as one line, treating `row.indent` as a column count.
pub fn format_row(row: &Row<'_>) -> String {
    let indent = " ".repeat(row.indent as usize);
    match chevron(row) {
        Some(chevron) => format!("{}{} {} {}", indent, chevron, checkbox(row), row.title),
        None => format!("{}{} {}", indent, checkbox(row), row.title),
    }
}

/// Format rows one per line.
pub fn format_rows(rows: &[Row<'_>]) -> String {
    let mut output = String::new();
    for row in rows {
        output.push_str(&format_row(row));
        output.push('\n');
    }
    output
}
