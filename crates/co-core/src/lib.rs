//! Deterministic core for Chronos Oracle.
//!
//! Derives low-entropy seeds from sub-second timing, then resolves them into
//! a bounded number, a pick from a list of options, or an I-Ching hexagram
//! with a moving line. Everything here is synchronous and pure given an
//! injected [`TimeSource`].

pub mod clock;
pub mod error;
pub mod history;
pub mod iching;
pub mod mode;
pub mod resolve;
pub mod seed;

pub use clock::{FixedClock, SystemClock, TimeSource};
pub use error::{FateError, FateResult};
pub use history::{DrawOutcome, HistoryItem};
pub use iching::HexagramReading;
pub use mode::{DrawRequest, RandomConfig, SelectionMode};
pub use seed::{DivinationSeed, SeedBundle, SeedSampler};
