// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;
use yare::parameterized;

#[parameterized(
    untouched = { "AB\nCD", "AB\nCD" },
    trailing_newline = { "AB\nCD\n", "AB\nCD" },
    many_trailing = { "AB\n\n\n", "AB" },
    crlf = { "AB\r\nCD\r\n", "AB\nCD" },
    leading_kept = { "\nAB", "\nAB" },
    trailing_spaces_kept = { "AB  \n   \n", "AB  \n   " },
)]
fn normalize_cases(input: &str, expected: &str) {
    assert_eq!(normalize(input), expected);
}

#[test]
fn reads_block_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "\x1b[31m██\x1b[0m\n ██\n").unwrap();
    file.flush().unwrap();

    let block = read_block(Some(file.path())).unwrap();
    assert_eq!(block.line_count(), 2);
    assert_eq!(block.lines()[0], "\x1b[31m██\x1b[0m");
}

#[test]
fn missing_file_names_the_path() {
    let err = read_block(Some(Path::new("/nonexistent/logo.txt"))).unwrap_err();
    assert!(matches!(err, InputError::File { .. }));
    assert!(err.to_string().contains("/nonexistent/logo.txt"), "{}", err);
}
