//! Time sources used to seed draws.
//!
//! Sampling reads two clocks: the wall clock (for the millisecond within the
//! current second) and a high-resolution monotonic clock. Both sit behind
//! [`TimeSource`] so tests can pin them to fixed values.

use std::time::Instant;

use chrono::{DateTime, TimeDelta, Utc};

/// A source of wall-clock and monotonic time.
pub trait TimeSource {
    /// The current wall-clock instant.
    fn now(&self) -> DateTime<Utc>;

    /// Milliseconds elapsed since this source's origin, with sub-millisecond
    /// resolution. Never decreases between calls.
    fn monotonic(&self) -> f64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn monotonic(&self) -> f64 {
        (**self).monotonic()
    }
}

/// Production clock: `Utc::now()` and an [`Instant`] captured at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose monotonic origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn monotonic(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// A clock frozen at a given instant and monotonic reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    now: DateTime<Utc>,
    monotonic: f64,
}

impl FixedClock {
    /// Freeze the clock at `now` with the given monotonic reading.
    pub fn new(now: DateTime<Utc>, monotonic: f64) -> Self {
        Self { now, monotonic }
    }

    /// A clock whose wall time sits `millisecond` ms past the Unix epoch.
    pub fn at_millisecond(millisecond: u32, monotonic: f64) -> Self {
        let now = DateTime::<Utc>::default() + TimeDelta::milliseconds(i64::from(millisecond));
        Self::new(now, monotonic)
    }

    /// Replace the monotonic reading.
    pub fn with_monotonic(mut self, monotonic: f64) -> Self {
        self.monotonic = monotonic;
        self
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn monotonic(&self) -> f64 {
        self.monotonic
    }
}
