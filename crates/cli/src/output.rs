// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/warning formatting.
//!
//! Diagnostics go to stderr so they never interleave with the animation on
//! stdout. Color is used only when stderr is a terminal.

use std::io::{self, IsTerminal, Write};

/// Process exit codes
pub mod exit_codes {
    /// Successful execution
    pub const SUCCESS: i32 = 0;
    /// Invalid input, unreadable file or failed terminal write
    pub const ERROR: i32 = 1;
}

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

/// Write a warning message to a writer with explicit terminal flag.
fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

/// Print a verbose status line to stderr.
pub fn print_verbose(msg: impl std::fmt::Display) {
    write_verbose(&mut io::stderr(), msg);
}

fn write_verbose<W: Write>(writer: &mut W, msg: impl std::fmt::Display) {
    let _ = writeln!(writer, "ascii-reveal: {}", msg);
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
