// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Vertical space reservation ahead of an animated render.

use std::io::{self, Write};

use super::escape::{cursor_up, NEWLINE};

/// Print `line_count - 1` blank lines plus the reservation's own line
/// terminator, then move back up to the first reserved row.
///
/// Afterwards the cursor sits at column 0 of a region exactly `line_count`
/// rows tall, with one more row below it that redraws may park on.
/// `line_count` must be at least 1.
pub fn reserve_lines<W: Write>(out: &mut W, line_count: usize) -> io::Result<()> {
    out.write_all(NEWLINE.repeat(line_count).as_bytes())?;
    out.write_all(cursor_up(line_count).as_bytes())
}

#[cfg(test)]
#[path = "reserve_tests.rs"]
mod tests;
