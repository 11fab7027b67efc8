//! Wall-clock tick scheduling.
//!
//! The scheduler only answers "is a tick due now?". Callers pass the current
//! instant in, which keeps it trivially testable.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    last_tick: Instant,
}

impl TickScheduler {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_tick(&self) -> Instant {
        self.last_tick
    }

    /// Returns true at most once per elapsed interval.
    ///
    /// On a tick the timestamp is reset to `now` rather than advanced by the
    /// interval, so late ticks push every later tick back.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
            true
        } else {
            false
        }
    }

    /// Time left until the next tick; zero when one is already due.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }
}
