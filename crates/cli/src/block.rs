// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The multi-line, pre-styled text block handed to the renderer.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ansi::{segments, strip_ansi, visible_width, Segment};

/// An immutable, ordered set of lines that may carry embedded SGR codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableBlock {
    lines: Vec<String>,
}

impl RenderableBlock {
    /// Split `text` on `\n` into lines. No validation happens here; the
    /// renderer rejects blank blocks before writing anything.
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
        }
    }

    /// Build a block from already-split lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Visible character count of each line, in order.
    pub fn visible_widths(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines.iter().map(|line| visible_width(line))
    }

    /// Widest line as the viewer sees it; the slide-in sweep starts here.
    pub fn max_visible_width(&self) -> usize {
        self.visible_widths().max().unwrap_or(0)
    }

    /// Widest line in terminal columns (wide glyphs count double).
    pub fn display_width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| strip_ansi(line).width())
            .max()
            .unwrap_or(0)
    }

    /// True when no line has any visible, non-whitespace content.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| {
            segments(line).all(|segment| match segment {
                Segment::Escape(_) => true,
                Segment::Text(text) => text.trim().is_empty(),
            })
        })
    }

    /// Timed units for the typing reveal: every visible grapheme plus one
    /// per line separator.
    pub fn typing_units(&self) -> usize {
        let graphemes: usize = self
            .lines
            .iter()
            .flat_map(|line| segments(line))
            .map(|segment| match segment {
                Segment::Text(text) => text.graphemes(true).count(),
                Segment::Escape(_) => 0,
            })
            .sum();
        graphemes + self.lines.len().saturating_sub(1)
    }

    /// The block exactly as it would be printed without animation.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
#[path = "block_tests.rs"]
mod tests;
