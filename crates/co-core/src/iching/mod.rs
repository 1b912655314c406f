//! I-Ching lookup tables and hexagram readings.

pub mod hexagrams;
pub mod lines;
pub mod trigrams;

pub use hexagrams::{
    HEXAGRAMS, Hexagram, UNKNOWN_HEXAGRAM, hexagram, hexagram_by_number, hexagram_name,
};
pub use lines::line_name;
pub use trigrams::{TRIGRAMS, Trigram, trigram};

use serde::{Deserialize, Serialize};

/// A resolved hexagram with its moving line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramReading {
    /// Six-character code, upper trigram first.
    pub binary_code: String,
    /// Hexagram name, or [`UNKNOWN_HEXAGRAM`].
    pub hexagram_name: String,
    /// Classical name of the moving line.
    pub line_name: String,
    /// Moving line position, 1 (bottom) to 6 (top).
    pub active_line: u8,
    /// King Wen number, absent when the code is not in the table.
    pub number: Option<u8>,
}

impl HexagramReading {
    /// Upper trigram bits (first three characters).
    pub fn upper_bits(&self) -> &str {
        self.binary_code.get(..3).unwrap_or("")
    }

    /// Lower trigram bits (last three characters).
    pub fn lower_bits(&self) -> &str {
        self.binary_code.get(3..).unwrap_or("")
    }

    /// Upper trigram, if the code is well formed.
    pub fn upper_trigram(&self) -> Option<&'static Trigram> {
        trigram(self.upper_bits())
    }

    /// Lower trigram, if the code is well formed.
    pub fn lower_trigram(&self) -> Option<&'static Trigram> {
        trigram(self.lower_bits())
    }

    /// Lines from top (position 6) to bottom (position 1) as
    /// `(position, solid, moving)`.
    pub fn lines(&self) -> Vec<(u8, bool, bool)> {
        self.binary_code
            .bytes()
            .zip((1..=6u8).rev())
            .map(|(bit, position)| (position, bit == b'1', position == self.active_line))
            .collect()
    }
}

impl std::fmt::Display for HexagramReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.hexagram_name, self.line_name)
    }
}
