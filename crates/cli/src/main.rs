// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ascii-reveal binary entry point.

use std::io::{self, IsTerminal, Write};

use clap::Parser;

use ascii_reveal::cli::Cli;
use ascii_reveal::input::read_block;
use ascii_reveal::output::{exit_codes, print_error, print_verbose, print_warning};
use ascii_reveal::render::render;
use ascii_reveal::terminal::{fit_warnings, TerminalSize};
use ascii_reveal::time::SystemClock;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let code = match run(&cli).await {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            print_error(e);
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = cli.load_settings()?;
    let spec = cli.animation_spec(&settings);
    let block = read_block(cli.input.as_deref())?;

    if cli.verbose {
        print_verbose(format_args!(
            "animation={} duration={}ms clear={} lines={} width={}",
            spec.mode,
            spec.duration_ms,
            spec.clear_screen_before,
            block.line_count(),
            block.max_visible_width(),
        ));
    }

    let stdout = io::stdout();
    if spec.mode.is_animated() && stdout.is_terminal() {
        if let Some(size) = TerminalSize::detect() {
            for warning in fit_warnings(&block, spec.mode, size) {
                print_warning(warning);
            }
        }
    }

    let mut out = stdout.lock();
    render(&mut out, &SystemClock, &block, &spec).await?;

    // Animated renders already leave the cursor below the block.
    if !spec.mode.is_animated() {
        writeln!(out)?;
    }
    Ok(())
}
