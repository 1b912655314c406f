//! The eight trigrams.
//!
//! Bits are written top line first, `1` for a solid (yang) line and `0` for a
//! broken (yin) line.

/// One of the eight three-line figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigram {
    /// Three-character bit pattern, top line first.
    pub bits: &'static str,
    /// Chinese name.
    pub name: &'static str,
    /// Unicode trigram symbol.
    pub symbol: char,
    /// Natural image associated with the trigram.
    pub image: &'static str,
}

/// All eight trigrams, indexed by their 3-bit value.
pub static TRIGRAMS: [Trigram; 8] = [
    Trigram {
        bits: "000",
        name: "坤",
        symbol: '☷',
        image: "Earth",
    },
    Trigram {
        bits: "001",
        name: "震",
        symbol: '☳',
        image: "Thunder",
    },
    Trigram {
        bits: "010",
        name: "坎",
        symbol: '☵',
        image: "Water",
    },
    Trigram {
        bits: "011",
        name: "兑",
        symbol: '☱',
        image: "Lake",
    },
    Trigram {
        bits: "100",
        name: "艮",
        symbol: '☶',
        image: "Mountain",
    },
    Trigram {
        bits: "101",
        name: "离",
        symbol: '☲',
        image: "Fire",
    },
    Trigram {
        bits: "110",
        name: "巽",
        symbol: '☴',
        image: "Wind",
    },
    Trigram {
        bits: "111",
        name: "乾",
        symbol: '☰',
        image: "Heaven",
    },
];

/// Look up a trigram by its 3-character bit pattern.
pub fn trigram(bits: &str) -> Option<&'static Trigram> {
    TRIGRAMS.iter().find(|t| t.bits == bits)
}
