//! The sixty-four hexagrams in King Wen order.
//!
//! Each code is the upper trigram's bits followed by the lower trigram's,
//! so the first character is the top line and the last is the bottom line.

/// A named six-line figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hexagram {
    /// King Wen sequence number (1-64).
    pub number: u8,
    /// Six-character bit pattern, top line first.
    pub code: &'static str,
    /// Chinese name, image pair first (e.g. "水火既济").
    pub name: &'static str,
    /// English title.
    pub title: &'static str,
}

/// All sixty-four hexagrams (64 entries).
pub static HEXAGRAMS: [Hexagram; 64] = [
    Hexagram {
        number: 1,
        code: "111111",
        name: "乾为天",
        title: "The Creative",
    },
    Hexagram {
        number: 2,
        code: "000000",
        name: "坤为地",
        title: "The Receptive",
    },
    Hexagram {
        number: 3,
        code: "010001",
        name: "水雷屯",
        title: "Difficulty at the Beginning",
    },
    Hexagram {
        number: 4,
        code: "100010",
        name: "山水蒙",
        title: "Youthful Folly",
    },
    Hexagram {
        number: 5,
        code: "010111",
        name: "水天需",
        title: "Waiting",
    },
    Hexagram {
        number: 6,
        code: "111010",
        name: "天水讼",
        title: "Conflict",
    },
    Hexagram {
        number: 7,
        code: "000010",
        name: "地水师",
        title: "The Army",
    },
    Hexagram {
        number: 8,
        code: "010000",
        name: "水地比",
        title: "Holding Together",
    },
    Hexagram {
        number: 9,
        code: "110111",
        name: "风天小畜",
        title: "Small Taming",
    },
    Hexagram {
        number: 10,
        code: "111011",
        name: "天泽履",
        title: "Treading",
    },
    Hexagram {
        number: 11,
        code: "000111",
        name: "地天泰",
        title: "Peace",
    },
    Hexagram {
        number: 12,
        code: "111000",
        name: "天地否",
        title: "Standstill",
    },
    Hexagram {
        number: 13,
        code: "111101",
        name: "天火同人",
        title: "Fellowship",
    },
    Hexagram {
        number: 14,
        code: "101111",
        name: "火天大有",
        title: "Great Possession",
    },
    Hexagram {
        number: 15,
        code: "000100",
        name: "地山谦",
        title: "Modesty",
    },
    Hexagram {
        number: 16,
        code: "001000",
        name: "雷地豫",
        title: "Enthusiasm",
    },
    Hexagram {
        number: 17,
        code: "011001",
        name: "泽雷随",
        title: "Following",
    },
    Hexagram {
        number: 18,
        code: "100110",
        name: "山风蛊",
        title: "Work on the Decayed",
    },
    Hexagram {
        number: 19,
        code: "000011",
        name: "地泽临",
        title: "Approach",
    },
    Hexagram {
        number: 20,
        code: "110000",
        name: "风地观",
        title: "Contemplation",
    },
    Hexagram {
        number: 21,
        code: "101001",
        name: "火雷噬嗑",
        title: "Biting Through",
    },
    Hexagram {
        number: 22,
        code: "100101",
        name: "山火贲",
        title: "Grace",
    },
    Hexagram {
        number: 23,
        code: "100000",
        name: "山地剥",
        title: "Splitting Apart",
    },
    Hexagram {
        number: 24,
        code: "000001",
        name: "地雷复",
        title: "Return",
    },
    Hexagram {
        number: 25,
        code: "111001",
        name: "天雷无妄",
        title: "Innocence",
    },
    Hexagram {
        number: 26,
        code: "100111",
        name: "山天大畜",
        title: "Great Taming",
    },
    Hexagram {
        number: 27,
        code: "100001",
        name: "山雷颐",
        title: "Nourishment",
    },
    Hexagram {
        number: 28,
        code: "011110",
        name: "泽风大过",
        title: "Great Preponderance",
    },
    Hexagram {
        number: 29,
        code: "010010",
        name: "坎为水",
        title: "The Abysmal",
    },
    Hexagram {
        number: 30,
        code: "101101",
        name: "离为火",
        title: "The Clinging",
    },
    Hexagram {
        number: 31,
        code: "011100",
        name: "泽山咸",
        title: "Influence",
    },
    Hexagram {
        number: 32,
        code: "001110",
        name: "雷风恒",
        title: "Duration",
    },
    Hexagram {
        number: 33,
        code: "111100",
        name: "天山遯",
        title: "Retreat",
    },
    Hexagram {
        number: 34,
        code: "001111",
        name: "雷天大壮",
        title: "Great Power",
    },
    Hexagram {
        number: 35,
        code: "101000",
        name: "火地晋",
        title: "Progress",
    },
    Hexagram {
        number: 36,
        code: "000101",
        name: "地火明夷",
        title: "Darkening of the Light",
    },
    Hexagram {
        number: 37,
        code: "110101",
        name: "风火家人",
        title: "The Family",
    },
    Hexagram {
        number: 38,
        code: "101011",
        name: "火泽睽",
        title: "Opposition",
    },
    Hexagram {
        number: 39,
        code: "010100",
        name: "水山蹇",
        title: "Obstruction",
    },
    Hexagram {
        number: 40,
        code: "001010",
        name: "雷水解",
        title: "Deliverance",
    },
    Hexagram {
        number: 41,
        code: "100011",
        name: "山泽损",
        title: "Decrease",
    },
    Hexagram {
        number: 42,
        code: "110001",
        name: "风雷益",
        title: "Increase",
    },
    Hexagram {
        number: 43,
        code: "011111",
        name: "泽天夬",
        title: "Breakthrough",
    },
    Hexagram {
        number: 44,
        code: "111110",
        name: "天风姤",
        title: "Coming to Meet",
    },
    Hexagram {
        number: 45,
        code: "011000",
        name: "泽地萃",
        title: "Gathering Together",
    },
    Hexagram {
        number: 46,
        code: "000110",
        name: "地风升",
        title: "Pushing Upward",
    },
    Hexagram {
        number: 47,
        code: "011010",
        name: "泽水困",
        title: "Oppression",
    },
    Hexagram {
        number: 48,
        code: "010110",
        name: "水风井",
        title: "The Well",
    },
    Hexagram {
        number: 49,
        code: "011101",
        name: "泽火革",
        title: "Revolution",
    },
    Hexagram {
        number: 50,
        code: "101110",
        name: "火风鼎",
        title: "The Cauldron",
    },
    Hexagram {
        number: 51,
        code: "001001",
        name: "震为雷",
        title: "The Arousing",
    },
    Hexagram {
        number: 52,
        code: "100100",
        name: "艮为山",
        title: "Keeping Still",
    },
    Hexagram {
        number: 53,
        code: "110100",
        name: "风山渐",
        title: "Development",
    },
    Hexagram {
        number: 54,
        code: "001011",
        name: "雷泽归妹",
        title: "The Marrying Maiden",
    },
    Hexagram {
        number: 55,
        code: "001101",
        name: "雷火丰",
        title: "Abundance",
    },
    Hexagram {
        number: 56,
        code: "101100",
        name: "火山旅",
        title: "The Wanderer",
    },
    Hexagram {
        number: 57,
        code: "110110",
        name: "巽为风",
        title: "The Gentle",
    },
    Hexagram {
        number: 58,
        code: "011011",
        name: "兑为泽",
        title: "The Joyous",
    },
    Hexagram {
        number: 59,
        code: "110010",
        name: "风水涣",
        title: "Dispersion",
    },
    Hexagram {
        number: 60,
        code: "010011",
        name: "水泽节",
        title: "Limitation",
    },
    Hexagram {
        number: 61,
        code: "110011",
        name: "风泽中孚",
        title: "Inner Truth",
    },
    Hexagram {
        number: 62,
        code: "001100",
        name: "雷山小过",
        title: "Small Preponderance",
    },
    Hexagram {
        number: 63,
        code: "010101",
        name: "水火既济",
        title: "After Completion",
    },
    Hexagram {
        number: 64,
        code: "101010",
        name: "火水未济",
        title: "Before Completion",
    },
];

/// Name returned when a code is missing from the table.
pub const UNKNOWN_HEXAGRAM: &str = "未知之卦";

/// Look up a hexagram by its 6-character code.
pub fn hexagram(code: &str) -> Option<&'static Hexagram> {
    HEXAGRAMS.iter().find(|h| h.code == code)
}

/// Look up a hexagram by King Wen number.
pub fn hexagram_by_number(number: u8) -> Option<&'static Hexagram> {
    HEXAGRAMS.get(usize::from(number).checked_sub(1)?)
}

/// Name for a code, falling back to [`UNKNOWN_HEXAGRAM`].
pub fn hexagram_name(code: &str) -> &'static str {
    hexagram(code).map_or(UNKNOWN_HEXAGRAM, |h| h.name)
}
