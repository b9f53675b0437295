//! Text grid helpers shared by both board formats

use std::fmt::Display;

/// Non-blank block of grid rows: trailing whitespace stripped, leading and
/// trailing blank lines dropped
pub(crate) fn grid_rows(text: &str) -> Vec<&str> {
    let rows: Vec<&str> = text.lines().map(str::trim_end).collect();
    let first = rows.iter().position(|line| !line.is_empty());
    let last = rows.iter().rposition(|line| !line.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => rows[first..=last].to_vec(),
        _ => Vec::new(),
    }
}

/// Render boards one block per board, each block followed by a blank line
pub fn render_sequence<T: Display>(boards: &[T]) -> String {
    let mut out = String::new();
    for board in boards {
        out.push_str(&board.to_string());
        out.push('\n');
    }
    out
}
