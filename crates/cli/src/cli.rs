// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::animation::{AnimationMode, AnimationSpec};
use crate::config::{ConfigError, Settings};
use crate::env;

/// Play a timed reveal animation for a pre-styled block of text.
///
/// The block is read verbatim, ANSI colors included, e.g. the output of a
/// figlet-style banner generator piped through a gradient colorizer.
#[derive(Parser, Debug, Clone)]
#[command(name = "ascii-reveal", version)]
pub struct Cli {
    /// File holding the block; omit or pass "-" to read stdin
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Reveal animation to play
    #[arg(short = 'a', long, value_enum, env = env::ASCII_REVEAL_ANIMATION)]
    pub animation: Option<AnimationMode>,

    /// Total animation time in milliseconds [default: 2000]
    #[arg(short = 'd', long = "duration", value_name = "MS", env = env::ASCII_REVEAL_DURATION_MS)]
    pub duration_ms: Option<u64>,

    /// Keep the current screen contents instead of clearing first
    #[arg(long)]
    pub no_clear: bool,

    /// TOML settings file
    #[arg(short = 'c', long, value_name = "PATH", env = env::ASCII_REVEAL_CONFIG)]
    pub config: Option<PathBuf>,

    /// Print the resolved settings to stderr before rendering
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the settings file if one was given.
    pub fn load_settings(&self) -> Result<Settings, ConfigError> {
        match &self.config {
            Some(path) => Settings::load(path),
            None => Ok(Settings::default()),
        }
    }

    /// Merge flags over file settings over defaults.
    pub fn animation_spec(&self, settings: &Settings) -> AnimationSpec {
        let base = settings.animation_spec();
        AnimationSpec {
            mode: self.animation.unwrap_or(base.mode),
            duration_ms: self.duration_ms.unwrap_or(base.duration_ms),
            clear_screen_before: base.clear_screen_before && !self.no_clear,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
