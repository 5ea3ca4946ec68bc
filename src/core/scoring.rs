//! Scoring module - line-clear points, level progression, fall speed
//!
//! Level is derived from total cleared lines (one level per 10 lines) and the
//! fall interval follows an exponential-decay curve with a floor:
//! `max(80ms, 1000ms * 0.9^level)`.

use crate::types::{BASE_FALL_INTERVAL_MS, FALL_INTERVAL_FLOOR_MS, LINE_SCORES};

/// Points for clearing `lines` rows in one lock. Clears beyond four rows are
/// impossible with a four-cell piece but score as four.
pub fn line_clear_score(lines: usize) -> u32 {
    match lines {
        0 => 0,
        n => LINE_SCORES[n.min(4) - 1],
    }
}

/// One level per ten cleared lines.
pub fn level_for_lines(lines_total: u32) -> u32 {
    lines_total / 10
}

/// Milliseconds between gravity steps at the given level.
pub fn fall_interval_ms(level: u32) -> u32 {
    let ms = BASE_FALL_INTERVAL_MS as f64 * 0.9f64.powi(level as i32);
    let floored = ms.max(FALL_INTERVAL_FLOOR_MS as f64);
    floored as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_scores_match_table() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 500);
        assert_eq!(line_clear_score(4), 800);
        // Defined for completeness even though unreachable in play.
        assert_eq!(line_clear_score(6), 800);
    }

    #[test]
    fn level_progression() {
        assert_eq!(level_for_lines(0), 0);
        assert_eq!(level_for_lines(9), 0);
        assert_eq!(level_for_lines(10), 1);
        assert_eq!(level_for_lines(25), 2);
    }

    #[test]
    fn fall_interval_decays_to_floor() {
        assert_eq!(fall_interval_ms(0), 1000);
        assert_eq!(fall_interval_ms(1), 900);
        assert_eq!(fall_interval_ms(2), 810);
        // Monotonically non-increasing down to the floor.
        let mut prev = fall_interval_ms(0);
        for level in 1..40 {
            let cur = fall_interval_ms(level);
            assert!(cur <= prev);
            assert!(cur >= 80);
            prev = cur;
        }
        assert_eq!(fall_interval_ms(30), 80);
    }
}
