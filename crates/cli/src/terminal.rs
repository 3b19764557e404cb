// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checks whether a block fits the terminal it is about to be animated on.

use crate::animation::AnimationMode;
use crate::block::RenderableBlock;

/// Terminal dimensions in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminalSize {
    pub columns: u16,
    pub rows: u16,
}

impl TerminalSize {
    /// Query the controlling terminal; `None` when there isn't one.
    pub fn detect() -> Option<Self> {
        crossterm::terminal::size()
            .ok()
            .map(|(columns, rows)| Self { columns, rows })
    }
}

/// Problems that will make `mode` misrender on a terminal of `size`.
///
/// The redraw needs the block plus one parking row below it on screen at
/// once; taller blocks scroll and cursor-up no longer reaches the top.
/// Slide-in's first frame pads every line by the widest line's width, so a
/// block that fits can still wrap while it sweeps in.
pub fn fit_warnings(
    block: &RenderableBlock,
    mode: AnimationMode,
    size: TerminalSize,
) -> Vec<String> {
    let mut warnings = Vec::new();

    let height = block.line_count();
    if height >= usize::from(size.rows) {
        warnings.push(format!(
            "block is {} lines tall but the terminal has {} rows; the animation will scroll",
            height, size.rows
        ));
    }

    let columns = usize::from(size.columns);
    let width = block.display_width();
    if width > columns {
        warnings.push(format!(
            "block is {} columns wide but the terminal has {}; lines will wrap",
            width, size.columns
        ));
    } else if mode == AnimationMode::SlideIn {
        let sweep = width + block.max_visible_width();
        if sweep > columns {
            warnings.push(format!(
                "slide-in sweep needs {} columns but the terminal has {}; early frames will wrap",
                sweep, size.columns
            ));
        }
    }

    warnings
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;
