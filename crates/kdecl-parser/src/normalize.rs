//! Body text normalization.
//!
//! Bodies are for display and search, never for re-parsing, so the default
//! policy flattens them to a single line.

use crate::types::BodyStyle;

/// Replace every run of whitespace (spaces, tabs, newlines) with one space and
/// trim both ends. Applying it twice gives the same result as applying it once.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Kotlin `trimIndent`: drop a blank first and last line, then strip the
/// smallest indentation shared by all non-blank lines from every line.
#[must_use]
pub fn trim_indent(text: &str) -> String {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let min_indent = lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| indent_width(line))
        .min()
        .unwrap_or(0);

    let last = lines.len().saturating_sub(1);
    lines
        .iter()
        .enumerate()
        .filter(|(index, line)| !((*index == 0 || *index == last) && is_blank(line)))
        .map(|(_, line)| drop_chars(line, min_indent))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn function_body(text: &str, style: BodyStyle) -> String {
    match style {
        BodyStyle::Collapsed => collapse_whitespace(text),
        BodyStyle::Verbatim => trim_indent(text),
    }
}

pub(crate) fn class_body(text: &str, style: BodyStyle) -> String {
    match style {
        BodyStyle::Collapsed => collapse_whitespace(text),
        BodyStyle::Verbatim => text.trim().to_string(),
    }
}

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn drop_chars(line: &str, count: usize) -> &str {
    line.char_indices().nth(count).map_or("", |(index, _)| &line[index..])
}
