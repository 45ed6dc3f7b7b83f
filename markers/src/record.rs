//! Plain-text record format: `#` comment lines name a category, every other
//! non-blank line is a marker filename.

use std::fmt::Write as _;

use crate::types::Selection;

pub const COMMENT_MARKER: char = '#';

pub fn render_record(selection: &Selection) -> String {
    let mut out = String::new();
    for (category, names) in selection.iter() {
        let _ = writeln!(out, "{COMMENT_MARKER} {} markers", category.key());
        for name in names {
            let _ = writeln!(out, "{name}");
        }
        out.push('\n');
    }
    out
}

/// Whether `name` reads back unchanged from a record: it must not look like
/// a comment, carry surrounding whitespace, or span lines.
pub fn is_recordable(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(COMMENT_MARKER)
        && name.trim() == name
        && !name.contains(['\n', '\r'])
}

pub fn parse_record(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .map(str::to_string)
        .collect()
}
