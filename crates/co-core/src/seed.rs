//! Seed sampling from sub-second timing.
//!
//! A [`SeedBundle`] captures the millisecond within the current second and a
//! high-resolution monotonic reading at the moment of a draw. Divination
//! derives three sub-seeds from the same sample with distinct multipliers so
//! the two trigrams and the moving line do not move in lockstep.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::clock::TimeSource;

/// Timing sample taken at the moment of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeedBundle {
    /// Millisecond within the current wall-clock second (0-999).
    pub millisecond: u32,
    /// Monotonic clock reading in milliseconds.
    pub monotonic: f64,
}

impl SeedBundle {
    /// Build a bundle from raw values. The millisecond is clamped into 0-999.
    pub fn new(millisecond: u32, monotonic: f64) -> Self {
        Self {
            millisecond: millisecond.min(999),
            monotonic,
        }
    }

    /// Derive the trigram and moving-line sub-seeds used by divination.
    pub fn divination(&self) -> DivinationSeed {
        let ms = f64::from(self.millisecond);
        let t = self.monotonic;

        let lower = (ms * 1.5 + t).floor().rem_euclid(8.0) as u8;
        let upper = (ms * 2.7 + t * 0.5).floor().rem_euclid(8.0) as u8;
        let active_line = (ms * 3.1 + t * 1.1).floor().rem_euclid(6.0) as u8 + 1;

        DivinationSeed {
            lower,
            upper,
            active_line,
        }
    }
}

/// Sub-seeds for a hexagram draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivinationSeed {
    /// Lower trigram, 0-7.
    pub lower: u8,
    /// Upper trigram, 0-7.
    pub upper: u8,
    /// Moving line, 1 (bottom) to 6 (top).
    pub active_line: u8,
}

impl DivinationSeed {
    /// Lower trigram as a zero-padded 3-character binary string.
    pub fn lower_bits(&self) -> String {
        format!("{:03b}", self.lower & 0b111)
    }

    /// Upper trigram as a zero-padded 3-character binary string.
    pub fn upper_bits(&self) -> String {
        format!("{:03b}", self.upper & 0b111)
    }
}

/// Reads a [`TimeSource`] to produce seed bundles.
#[derive(Debug, Clone, Default)]
pub struct SeedSampler<C> {
    clock: C,
}

impl<C: TimeSource> SeedSampler<C> {
    /// Create a sampler over the given clock.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// The underlying clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Take a timing sample now.
    pub fn sample(&self) -> SeedBundle {
        // Leap seconds surface as nanosecond values past 1e9.
        let millisecond = self.clock.now().nanosecond() / 1_000_000;
        SeedBundle::new(millisecond, self.clock.monotonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, SystemClock};

    #[test]
    fn zero_sample_gives_lowest_values() {
        let seed = SeedBundle::new(0, 0.0).divination();
        assert_eq!(seed.lower_bits(), "000");
        assert_eq!(seed.upper_bits(), "000");
        assert_eq!(seed.active_line, 1);
    }

    #[test]
    fn known_sample() {
        // lower: floor(750 + 2) % 8 = 0
        // upper: floor(1350 + 1) % 8 = 7
        // line:  floor(1550 + 2.2) % 6 + 1 = 5
        let seed = SeedBundle::new(500, 2.0).divination();
        assert_eq!(seed.lower, 0);
        assert_eq!(seed.upper, 7);
        assert_eq!(seed.active_line, 5);
        assert_eq!(seed.upper_bits(), "111");
    }

    #[test]
    fn sub_seeds_stay_in_domain() {
        for ms in 0..1000 {
            for t in [0.0, 0.37, 15.9, 1234.56, 98_765.4321] {
                let seed = SeedBundle::new(ms, t).divination();
                assert!(seed.lower < 8);
                assert!(seed.upper < 8);
                assert!((1..=6).contains(&seed.active_line));
                assert_eq!(seed.lower_bits().len(), 3);
                assert_eq!(seed.upper_bits().len(), 3);
            }
        }
    }

    #[test]
    fn sampling_is_pure_over_injected_clock() {
        let clock = FixedClock::at_millisecond(321, 4567.891);
        let a = SeedSampler::new(clock).sample();
        let b = SeedSampler::new(clock).sample();
        assert_eq!(a, b);
        assert_eq!(a.millisecond, 321);
        assert_eq!(a.monotonic, 4567.891);
    }

    #[test]
    fn system_sample_in_range() {
        let sampler = SeedSampler::new(SystemClock::new());
        let seed = sampler.sample();
        assert!(seed.millisecond < 1000);
        assert!(seed.monotonic >= 0.0);
    }

    #[test]
    fn leap_second_millisecond_clamped() {
        assert_eq!(SeedBundle::new(1500, 0.0).millisecond, 999);
        assert_eq!(SeedBundle::new(999, 0.0).millisecond, 999);
    }
}
