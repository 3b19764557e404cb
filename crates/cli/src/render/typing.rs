// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typing: reveal the block one visible character at a time.

use std::io::{self, Write};
use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use super::escape::{ERASE_LINE, NEWLINE};
use super::pacer::Pacer;
use crate::ansi::{segments, Segment};
use crate::block::RenderableBlock;
use crate::time::Clock;

/// The delay per unit is taken over the whole block (graphemes plus line
/// separators), not per line. Styling codes ride along with the next
/// grapheme so a sequence is never split across waits.
pub async fn typing<W, C>(
    out: &mut W,
    clock: &C,
    block: &RenderableBlock,
    duration: Duration,
) -> io::Result<()>
where
    W: Write,
    C: Clock + ?Sized,
{
    let lines = block.lines();
    let pacer = Pacer::new(duration, block.typing_units());
    let mut pending = String::new();

    for (i, line) in lines.iter().enumerate() {
        out.write_all(ERASE_LINE.as_bytes())?;

        for segment in segments(line) {
            let text = match segment {
                Segment::Escape(code) => {
                    pending.push_str(code);
                    continue;
                }
                Segment::Text(text) => text,
            };
            for grapheme in text.graphemes(true) {
                out.write_all(pending.as_bytes())?;
                pending.clear();
                out.write_all(grapheme.as_bytes())?;
                out.flush()?;
                pacer.pause(clock).await;
            }
        }

        // Trailing codes (usually a reset) close out the line.
        out.write_all(pending.as_bytes())?;
        pending.clear();

        if i + 1 < lines.len() {
            out.write_all(NEWLINE.as_bytes())?;
            out.flush()?;
            pacer.pause(clock).await;
        }
    }

    out.write_all(NEWLINE.as_bytes())?;
    out.flush()
}

#[cfg(test)]
#[path = "typing_tests.rs"]
mod tests;
