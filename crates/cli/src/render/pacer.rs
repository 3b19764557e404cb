// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Splits a total duration into equal waits between timed units.

use std::time::Duration;

use crate::time::Clock;

/// Per-unit delay for one animation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    /// Divide `total` over `units`. Zero units collapse to a single unit with
    /// no delay, as does a zero total.
    pub fn new(total: Duration, units: usize) -> Self {
        if units == 0 {
            return Self {
                delay: Duration::ZERO,
            };
        }
        let nanos = total.as_nanos() / units as u128;
        Self {
            delay: Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait one unit. Zero delays return without touching the clock.
    pub async fn pause<C: Clock + ?Sized>(&self, clock: &C) {
        if !self.delay.is_zero() {
            clock.sleep(self.delay).await;
        }
    }
}

#[cfg(test)]
#[path = "pacer_tests.rs"]
mod tests;
