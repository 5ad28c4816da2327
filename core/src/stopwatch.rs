//! Monotonic stopwatch
//!
//! A [`Stopwatch`] starts exactly once and is then only read. Time comes from a
//! [`Clock`] so the source can be swapped out; the default [`MonotonicClock`]
//! follows tokio's clock, which tests can pause and advance.

use std::time::Duration;
use tokio::time::Instant;

use crate::error::StopwatchError;

/// Source of monotonic instants.
pub trait Clock {
    fn now(&self) -> Result<Instant, StopwatchError>;
}

/// The runtime's monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Result<Instant, StopwatchError> {
        Ok(Instant::now())
    }
}

/// A stopwatch that has not been started yet
#[derive(Debug)]
pub struct Stopwatch<C> {
    clock: C,
}

impl<C: Clock> Stopwatch<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Capture the current instant as the epoch.
    pub fn start(self) -> Result<StartedStopwatch<C>, StopwatchError> {
        let epoch = self.clock.now()?;
        tracing::debug!("stopwatch started");
        Ok(StartedStopwatch {
            clock: self.clock,
            epoch,
        })
    }
}

/// A running stopwatch. The epoch never changes after start.
#[derive(Debug)]
pub struct StartedStopwatch<C> {
    clock: C,
    epoch: Instant,
}

impl<C: Clock> StartedStopwatch<C> {
    /// Time elapsed since start. Never negative.
    pub fn elapsed(&self) -> Result<Duration, StopwatchError> {
        let now = self.clock.now()?;
        Ok(now.saturating_duration_since(self.epoch))
    }

    pub fn started_at(&self) -> Instant {
        self.epoch
    }
}
