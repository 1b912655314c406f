//! Classical names for the six line positions.
//!
//! A solid line is called 九 (nine), a broken line 六 (six). The bottom line
//! is 初 and the top line is 上; these two lead with the position word
//! (初九, 上六) while the middle four lead with the value word (九二, 六五).

/// Position words for lines 1-6.
const POSITIONS: [&str; 6] = ["初", "二", "三", "四", "五", "上"];

/// Name of the moving line.
///
/// `bit` is the line's value (`1` solid, anything else broken) and `line`
/// its position from 1 (bottom) to 6 (top). Out-of-range positions clamp to
/// the nearest end.
pub fn line_name(bit: u8, line: u8) -> String {
    let value = if bit == 1 { "九" } else { "六" };
    let index = usize::from(line.clamp(1, 6)) - 1;
    let position = POSITIONS[index];
    match index {
        0 | 5 => format!("{position}{value}"),
        _ => format!("{value}{position}"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ends_lead_with_position() {
        assert_eq!(line_name(1, 1), "初九");
        assert_eq!(line_name(0, 1), "初六");
        assert_eq!(line_name(1, 6), "上九");
        assert_eq!(line_name(0, 6), "上六");
    }

    #[test]
    fn middle_lines_lead_with_value() {
        assert_eq!(line_name(1, 2), "九二");
        assert_eq!(line_name(0, 3), "六三");
        assert_eq!(line_name(1, 4), "九四");
        assert_eq!(line_name(0, 5), "六五");
    }

    #[test]
    fn twelve_distinct_labels() {
        let labels: HashSet<_> = (1..=6)
            .flat_map(|line| [line_name(0, line), line_name(1, line)])
            .collect();
        assert_eq!(labels.len(), 12);
    }
}
