// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal animation renderer.
//!
//! [`render`] turns a [`RenderableBlock`] and an [`AnimationSpec`] into a
//! sequence of timed cursor-control writes. The renderer holds no state
//! between calls; the only shared resource is the terminal itself, so callers
//! must not run two renders against the same terminal at once.

pub mod escape;
mod fade;
mod pacer;
mod reserve;
mod slide;
mod typing;

#[cfg(test)]
mod test_helpers;

pub use fade::fade_in;
pub use pacer::Pacer;
pub use reserve::reserve_lines;
pub use slide::{slide_in, FramePlan, FRAMES_PER_SECOND};
pub use typing::typing;

use std::io::{self, Write};

use thiserror::Error;

use crate::animation::{AnimationMode, AnimationSpec};
use crate::block::RenderableBlock;
use crate::time::Clock;

/// Errors from a render.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The block has no lines or no visible content. Raised before any write.
    #[error("Text cannot be empty")]
    InvalidInput,

    /// Writing to the terminal failed; whatever was flushed stays on screen.
    #[error("Failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

/// Render `block` to `out`, optionally clearing the screen first.
///
/// Unanimated output is the block verbatim with no trailing newline. Animated
/// output reserves the block's height first and ends with the cursor on the
/// line just below the block. Returns once the animation has finished.
pub async fn render<W, C>(
    out: &mut W,
    clock: &C,
    block: &RenderableBlock,
    spec: &AnimationSpec,
) -> Result<(), RenderError>
where
    W: Write,
    C: Clock + ?Sized,
{
    if block.line_count() == 0 || block.is_blank() {
        return Err(RenderError::InvalidInput);
    }

    if spec.clear_screen_before {
        escape::clear_screen(out)?;
    }

    let duration = spec.duration();
    match spec.mode {
        AnimationMode::None => {
            out.write_all(block.to_text().as_bytes())?;
            out.flush()?;
        }
        AnimationMode::FadeIn => {
            reserve_lines(out, block.line_count())?;
            fade_in(out, clock, block, duration).await?;
        }
        AnimationMode::SlideIn => {
            reserve_lines(out, block.line_count())?;
            slide_in(out, clock, block, duration).await?;
        }
        AnimationMode::Typing => {
            reserve_lines(out, block.line_count())?;
            typing(out, clock, block, duration).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
