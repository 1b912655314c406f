//! Turning a seed bundle into a result.
//!
//! Each mode has its own pure resolver. The numeric and option paths mix the
//! millisecond with the monotonic reading through fixed multipliers; the
//! divination path reads a hexagram from the bundle's trigram sub-seeds.

use crate::error::{FateError, FateResult};
use crate::history::DrawOutcome;
use crate::iching::{HexagramReading, UNKNOWN_HEXAGRAM, hexagram, line_name};
use crate::mode::DrawRequest;
use crate::seed::SeedBundle;

const ENTROPY_MODULUS: u64 = 1_000_000;

fn entropy(seed: &SeedBundle, ms_weight: u64, clock_weight: f64) -> u64 {
    // Negative readings saturate to zero on the cast.
    let clock = (seed.monotonic * clock_weight).floor() as u64;
    u64::from(seed.millisecond)
        .wrapping_mul(ms_weight)
        .wrapping_add(clock)
        % ENTROPY_MODULUS
}

/// Pick an integer in `min..=max`.
pub fn resolve_numeric(min: i64, max: i64, seed: &SeedBundle) -> FateResult<i64> {
    if max < min {
        return Err(FateError::InvalidBounds { min, max });
    }
    let range = i128::from(max) - i128::from(min) + 1;
    let offset = i128::from(entropy(seed, 1337, 100.0)) % range;
    // min + offset never exceeds max, so it always fits.
    Ok((i128::from(min) + offset) as i64)
}

/// Pick one entry of `options`.
pub fn resolve_option(options: &[String], seed: &SeedBundle) -> FateResult<String> {
    if options.is_empty() {
        return Err(FateError::EmptyOptions);
    }
    let index = entropy(seed, 997, 150.0) % options.len() as u64;
    Ok(options[index as usize].clone())
}

/// Read a hexagram from trigram bit strings and a moving line.
///
/// The code is `upper` followed by `lower`. The moving line's value sits at
/// index `6 - active_line`, since index 0 is the top line.
pub fn resolve_hexagram(lower: &str, upper: &str, active_line: u8) -> HexagramReading {
    let binary_code = format!("{upper}{lower}");
    let entry = hexagram(&binary_code);

    let active_line = active_line.clamp(1, 6);
    let bit = binary_code
        .as_bytes()
        .get(6 - usize::from(active_line))
        .map_or(0, |b| u8::from(*b == b'1'));

    HexagramReading {
        hexagram_name: entry.map_or(UNKNOWN_HEXAGRAM, |h| h.name).to_string(),
        number: entry.map(|h| h.number),
        line_name: line_name(bit, active_line),
        active_line,
        binary_code,
    }
}

/// Resolve a request against a seed bundle.
pub fn resolve(request: &DrawRequest, seed: &SeedBundle) -> FateResult<DrawOutcome> {
    match request {
        DrawRequest::Numeric { min, max } => {
            resolve_numeric(*min, *max, seed).map(DrawOutcome::Number)
        }
        DrawRequest::Options { options } => {
            resolve_option(options, seed).map(DrawOutcome::Choice)
        }
        DrawRequest::Divination { question } => {
            if question.trim().is_empty() {
                return Err(FateError::EmptyQuestion);
            }
            let sub = seed.divination();
            Ok(DrawOutcome::Hexagram(resolve_hexagram(
                &sub.lower_bits(),
                &sub.upper_bits(),
                sub.active_line,
            )))
        }
    }
}
