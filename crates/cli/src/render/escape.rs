// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raw terminal control writes used by the renderer.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

/// Erase the entire current line. The cursor column is unchanged.
pub const ERASE_LINE: &str = "\x1b[2K";

/// Line advance.
pub const NEWLINE: &str = "\n";

/// Move the cursor up `rows` rows.
pub fn cursor_up(rows: usize) -> String {
    format!("\x1b[{}A", rows)
}

/// Clear the whole screen and home the cursor to the top-left cell.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Write one line of a frame: erase, left padding, then the styled content.
pub fn write_line<W: Write>(out: &mut W, padding: usize, line: &str) -> io::Result<()> {
    write!(out, "{}{:padding$}{}", ERASE_LINE, "", line, padding = padding)
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
