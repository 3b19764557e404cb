// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable names.
//!
//! Every variable ascii-reveal reads is named here; the CLI binds them to its
//! flags so a flag on the command line always wins over the environment.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

pub use names::*;

/// Every variable the CLI honours, for help text and test isolation.
pub const ALL: &[&str] = &[
    ASCII_REVEAL_ANIMATION,
    ASCII_REVEAL_DURATION_MS,
    ASCII_REVEAL_CONFIG,
];
