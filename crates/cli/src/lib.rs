// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timed reveal animations for pre-styled ASCII art.
//!
//! Takes a multi-line block, possibly colored with ANSI SGR codes, and plays
//! it to the terminal as a fade-in, slide-in or typing animation:
//!
//! ```no_run
//! use ascii_reveal::animation::{AnimationMode, AnimationSpec};
//! use ascii_reveal::block::RenderableBlock;
//! use ascii_reveal::render::render;
//! use ascii_reveal::time::SystemClock;
//!
//! # async fn demo() -> Result<(), ascii_reveal::render::RenderError> {
//! let block = RenderableBlock::new("\x1b[35m█▀▀ █▀█\x1b[0m\n\x1b[36m█▄▄ █▄█\x1b[0m");
//! let spec = AnimationSpec::new(AnimationMode::SlideIn).with_duration_ms(1500);
//! render(&mut std::io::stdout(), &SystemClock, &block, &spec).await
//! # }
//! ```

pub mod animation;
pub mod ansi;
pub mod block;
#[doc(hidden)]
pub mod cli;
pub mod config;
#[doc(hidden)]
pub mod env;
#[doc(hidden)]
pub mod input;
#[doc(hidden)]
pub mod output;
pub mod render;
pub mod terminal;
pub mod time;
