// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Optional TOML settings file.
//!
//! ```toml
//! [animation]
//! mode = "slide-in"
//! duration_ms = 1500
//! clear_screen = false
//! ```
//!
//! Every field is optional; anything left out falls back to the built-in
//! defaults. CLI flags and environment variables override the file.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::animation::{AnimationMode, AnimationSpec};

/// Errors that can occur when loading a settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Top-level settings file
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub animation: AnimationSettings,
}

/// `[animation]` table
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationSettings {
    /// Reveal to play (default: none)
    #[serde(default)]
    pub mode: Option<AnimationMode>,

    /// Whole-animation duration in milliseconds (default: 2000)
    #[serde(default)]
    pub duration_ms: Option<u64>,

    /// Clear the screen before rendering (default: true)
    #[serde(default)]
    pub clear_screen: Option<bool>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Animation settings from the file alone, defaults filling the gaps.
    pub fn animation_spec(&self) -> AnimationSpec {
        let defaults = AnimationSpec::default();
        AnimationSpec {
            mode: self.animation.mode.unwrap_or(defaults.mode),
            duration_ms: self.animation.duration_ms.unwrap_or(defaults.duration_ms),
            clear_screen_before: self
                .animation
                .clear_screen
                .unwrap_or(defaults.clear_screen_before),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
