// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SGR escape sequence scanner.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching ANSI SGR (Select Graphic Rendition) escape sequences.
/// Matches ESC [ followed by zero or more digits/semicolons, ending with 'm'.
static ANSI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b\[[0-9;]*m").expect("ANSI regex pattern is invalid")
});

/// A run of a line: either a styling sequence or plain visible text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A complete escape sequence, e.g. `\x1b[38;2;255;0;0m`.
    Escape(&'a str),
    /// Text between sequences.
    Text(&'a str),
}

/// Strip all SGR escape sequences, returning plain text.
pub fn strip_ansi(input: &str) -> String {
    ANSI_REGEX.replace_all(input, "").into_owned()
}

/// Number of characters left once every escape sequence is removed.
pub fn visible_width(input: &str) -> usize {
    segments(input)
        .filter_map(|segment| match segment {
            Segment::Text(text) => Some(text.chars().count()),
            Segment::Escape(_) => None,
        })
        .sum()
}

/// Extract the escape sequences with their byte positions.
///
/// Returns pairs of (position, sequence) where position is the byte offset in
/// the original string where the sequence started. Inserting the sequences,
/// in order, at those positions into [`strip_ansi`]'s output reproduces the
/// input exactly.
pub fn extract_sequences(input: &str) -> Vec<(usize, &str)> {
    ANSI_REGEX
        .find_iter(input)
        .map(|m| (m.start(), m.as_str()))
        .collect()
}

/// Split a line into alternating escape and text segments, in order.
///
/// Empty text runs are skipped, so adjacent sequences appear back to back.
pub fn segments(input: &str) -> impl Iterator<Item = Segment<'_>> {
    let mut out = Vec::new();
    let mut last_end = 0;

    for m in ANSI_REGEX.find_iter(input) {
        if m.start() > last_end {
            out.push(Segment::Text(&input[last_end..m.start()]));
        }
        out.push(Segment::Escape(m.as_str()));
        last_end = m.end();
    }

    if last_end < input.len() {
        out.push(Segment::Text(&input[last_end..]));
    }

    out.into_iter()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
