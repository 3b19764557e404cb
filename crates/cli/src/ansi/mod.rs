// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI styling sequence handling.
//!
//! Separates embedded color/style codes from the text a viewer actually sees,
//! so width math and per-character reveals operate on visible content only.

mod parser;

pub use parser::{extract_sequences, segments, strip_ansi, visible_width, Segment};
