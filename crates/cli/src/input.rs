// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading the block to animate from a file or stdin.

use std::io::{self, Read};
use std::path::Path;

use thiserror::Error;

use crate::block::RenderableBlock;

/// Errors that can occur when reading the block
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    File { path: String, source: io::Error },

    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// Read the block from `path`, or from stdin when `path` is absent or `-`.
pub fn read_block(path: Option<&Path>) -> Result<RenderableBlock, InputError> {
    let text = match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| InputError::File {
                path: path.display().to_string(),
                source,
            })?
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(InputError::Stdin)?;
            text
        }
    };
    Ok(RenderableBlock::new(&normalize(&text)))
}

/// Normalise CRLF endings and drop trailing line terminators, which would
/// otherwise become empty rows at the bottom of the block.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").trim_end_matches('\n').to_string()
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
