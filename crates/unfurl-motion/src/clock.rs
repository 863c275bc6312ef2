//! Frame clock capability.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of monotonic elapsed time for animations.
///
/// The engine never reads wall-clock time directly; every update takes a
/// `now` sampled from one of these, so tests can drive animations with a
/// [`ManualClock`].
pub trait FrameClock {
    /// Elapsed time since the clock's epoch.
    fn now(&self) -> Duration;
}

/// Real clock measuring from the instant it was created.
#[derive(Debug)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    /// Create a clock with its epoch at the current instant.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for MonotonicClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Settable clock for driving animations by hand in tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// Create a clock at zero elapsed time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the elapsed time.
    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    /// Advance the elapsed time.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
