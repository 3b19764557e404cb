// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Animation selection and timing settings.

use std::fmt;
use std::time::Duration;

use clap::ValueEnum;
use serde::Deserialize;

/// Default wall-clock time for a whole animation.
pub const DEFAULT_DURATION_MS: u64 = 2000;

/// Which reveal to play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum AnimationMode {
    /// Print the block once, unanimated
    #[default]
    None,
    /// Reveal one line at a time, top to bottom
    FadeIn,
    /// Sweep every line in from the right
    SlideIn,
    /// Type the block character by character
    Typing,
}

impl AnimationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationMode::None => "none",
            AnimationMode::FadeIn => "fade-in",
            AnimationMode::SlideIn => "slide-in",
            AnimationMode::Typing => "typing",
        }
    }

    pub fn is_animated(&self) -> bool {
        !matches!(self, AnimationMode::None)
    }
}

impl fmt::Display for AnimationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the renderer needs besides the block itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationSpec {
    pub mode: AnimationMode,
    pub duration_ms: u64,
    pub clear_screen_before: bool,
}

impl AnimationSpec {
    /// Settings for `mode` with the default duration and screen clear.
    pub fn new(mode: AnimationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen_before = clear;
        self
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            mode: AnimationMode::None,
            duration_ms: DEFAULT_DURATION_MS,
            clear_screen_before: true,
        }
    }
}

#[cfg(test)]
#[path = "animation_tests.rs"]
mod tests;
