// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for renderer tests.

use std::future::Future;
use std::io::{self, Write};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::animation::AnimationSpec;
use crate::block::RenderableBlock;
use crate::time::{Clock, FakeClock};

use super::{render, RenderError};

/// Everything a render produced: the bytes written and the waits requested.
pub struct Capture {
    pub output: String,
    pub sleeps: Vec<Duration>,
}

impl Capture {
    pub fn count(&self, needle: &str) -> usize {
        self.output.matches(needle).count()
    }
}

/// Run the controller against an in-memory terminal and a fake clock.
pub async fn capture(
    block: &RenderableBlock,
    spec: &AnimationSpec,
) -> (Result<(), RenderError>, Capture) {
    let clock = FakeClock::default();
    let mut buf = Vec::new();
    let result = render(&mut buf, &clock, block, spec).await;
    let capture = Capture {
        output: String::from_utf8(buf).unwrap(),
        sleeps: clock.sleeps(),
    };
    (result, capture)
}

/// One observable step of a render, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Write(usize),
    Flush,
    Sleep(Duration),
}

/// Event log shared by a [`LoggingWriter`] and a [`LoggingClock`].
#[derive(Clone, Debug, Default)]
pub struct EventLog(Arc<Mutex<Vec<Event>>>);

impl EventLog {
    fn push(&self, event: Event) {
        self.0.lock().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().clone()
    }
}

/// Writer that logs every write and flush instead of storing bytes.
pub struct LoggingWriter(pub EventLog);

impl Write for LoggingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.push(Event::Write(buf.len()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.push(Event::Flush);
        Ok(())
    }
}

/// Clock that logs every sleep into the same log as the writer.
pub struct LoggingClock(pub EventLog);

impl Clock for LoggingClock {
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        self.0.push(Event::Sleep(duration));
        Box::pin(async {})
    }
}

/// Run the controller and return the interleaving of writes, flushes and sleeps.
pub async fn record(block: &RenderableBlock, spec: &AnimationSpec) -> Vec<Event> {
    let log = EventLog::default();
    let mut out = LoggingWriter(log.clone());
    let clock = LoggingClock(log.clone());
    render(&mut out, &clock, block, spec).await.unwrap();
    log.events()
}

/// Millisecond shorthand.
pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
