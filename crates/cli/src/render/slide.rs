// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Slide-in: redraw the whole block every frame while sweeping a left
//! padding from the widest line's width down to zero.

use std::io::{self, Write};
use std::time::Duration;

use super::escape::{cursor_up, write_line, NEWLINE};
use super::pacer::Pacer;
use crate::block::RenderableBlock;
use crate::time::Clock;

/// Fixed redraw cadence.
pub const FRAMES_PER_SECOND: u64 = 30;

/// Offsets and timing for one slide-in run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePlan {
    max_width: usize,
    total_frames: usize,
    pacer: Pacer,
}

impl FramePlan {
    /// Plan `floor(duration_secs * 30)` frames after the initial one. Under
    /// one frame's worth of time the plan collapses to a single frame drawn
    /// at its final position.
    pub fn new(max_width: usize, duration: Duration) -> Self {
        let frames = duration.as_millis() * u128::from(FRAMES_PER_SECOND) / 1000;
        let total_frames = usize::try_from(frames).unwrap_or(usize::MAX);
        Self {
            max_width,
            total_frames,
            pacer: Pacer::new(duration, total_frames),
        }
    }

    /// Index of the last frame; frames run from 0 to this inclusive.
    pub fn last_frame(&self) -> usize {
        self.total_frames
    }

    pub fn frame_delay(&self) -> Duration {
        self.pacer.delay()
    }

    /// Left padding for `frame`: `floor(max_width * (1 - frame / total))`.
    pub fn offset(&self, frame: usize) -> usize {
        if self.total_frames == 0 {
            return 0;
        }
        let remaining = self.total_frames.saturating_sub(frame) as u128;
        (self.max_width as u128 * remaining / self.total_frames as u128) as usize
    }

    /// Offsets for every frame, first to last.
    pub fn offsets(&self) -> impl Iterator<Item = usize> + '_ {
        (0..=self.total_frames).map(|frame| self.offset(frame))
    }
}

/// Every frame writes each line followed by a newline, which leaves the
/// cursor on the reserved row under the block; the next frame moves up
/// `line_count` rows to redraw in place. The final frame is the block at
/// offset 0, and its last newline is the one that ends the render.
pub async fn slide_in<W, C>(
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
    let plan = FramePlan::new(block.max_visible_width(), duration);
    let home = cursor_up(lines.len());

    for (frame, offset) in plan.offsets().enumerate() {
        if frame > 0 {
            out.write_all(home.as_bytes())?;
        }
        for line in lines {
            write_line(out, offset, line)?;
            out.write_all(NEWLINE.as_bytes())?;
        }
        out.flush()?;
        if frame < plan.last_frame() {
            plan.pacer.pause(clock).await;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "slide_tests.rs"]
mod tests;
