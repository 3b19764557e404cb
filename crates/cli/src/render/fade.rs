// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fade-in: reveal the block one line at a time, top to bottom.

use std::io::{self, Write};
use std::time::Duration;

use super::escape::{write_line, NEWLINE};
use super::pacer::Pacer;
use crate::block::RenderableBlock;
use crate::time::Clock;

/// Each line is written once, then the renderer waits `duration / lines`.
/// Earlier lines are never redrawn.
pub async fn fade_in<W, C>(
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
    let pacer = Pacer::new(duration, lines.len());

    for (i, line) in lines.iter().enumerate() {
        write_line(out, 0, line)?;
        if i + 1 < lines.len() {
            out.write_all(NEWLINE.as_bytes())?;
        }
        out.flush()?;
        pacer.pause(clock).await;
    }

    out.write_all(NEWLINE.as_bytes())?;
    out.flush()
}

#[cfg(test)]
#[path = "fade_tests.rs"]
mod tests;
