// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::render::escape::ERASE_LINE;
use crate::time::FakeClock;

async fn run(block: &RenderableBlock, duration_ms: u64) -> (String, Vec<Duration>) {
    let clock = FakeClock::default();
    let mut buf = Vec::new();
    fade_in(&mut buf, &clock, block, Duration::from_millis(duration_ms))
        .await
        .unwrap();
    (String::from_utf8(buf).unwrap(), clock.sleeps())
}

#[tokio::test(flavor = "current_thread")]
async fn reveals_each_line_once() {
    let block = RenderableBlock::from_lines(["AB", "CD", "EF"]);
    let (output, sleeps) = run(&block, 300).await;

    assert_eq!(output, "\x1b[2KAB\n\x1b[2KCD\n\x1b[2KEF\n");
    assert_eq!(sleeps, vec![Duration::from_millis(100); 3]);
}

#[tokio::test(flavor = "current_thread")]
async fn n_erases_and_n_newlines() {
    let block = RenderableBlock::from_lines(["1", "2", "3", "4", "5"]);
    let (output, _) = run(&block, 50).await;

    assert_eq!(output.matches(ERASE_LINE).count(), 5);
    // Four between lines plus the trailing one.
    assert_eq!(output.matches('\n').count(), 5);
    assert!(output.ends_with("5\n"));
}

#[tokio::test(flavor = "current_thread")]
async fn single_line_waits_whole_duration() {
    let block = RenderableBlock::new("HI");
    let (output, sleeps) = run(&block, 100).await;

    assert_eq!(output, "\x1b[2KHI\n");
    assert_eq!(sleeps, vec![Duration::from_millis(100)]);
}

#[tokio::test(flavor = "current_thread")]
async fn styling_is_written_verbatim() {
    let block = RenderableBlock::from_lines(["\x1b[31mAB\x1b[0m"]);
    let (output, _) = run(&block, 0).await;
    assert_eq!(output, "\x1b[2K\x1b[31mAB\x1b[0m\n");
}

#[tokio::test(flavor = "current_thread")]
async fn zero_duration_never_sleeps() {
    let block = RenderableBlock::from_lines(["A", "B"]);
    let (_, sleeps) = run(&block, 0).await;
    assert!(sleeps.is_empty());
}
