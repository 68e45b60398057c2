//! Scoring module - arcade line-clear scoring and speed progression
//!
//! Rules:
//! - A clear scores `rows * 100 * combo`, where `combo` is the streak length
//!   *including* the current clear (first clear in a streak multiplies by 1).
//! - Level is `lines / 10 + 1`.
//! - Every speed-up period the fall interval shrinks to 85%, floored at 100ms.

use crate::types::{LINES_PER_LEVEL, LINE_SCORE_BASE, TETRIS_ROWS};

/// Points for clearing `rows` rows with the post-increment combo multiplier
pub fn line_clear_score(rows: usize, combo: u32) -> u32 {
    (rows as u32)
        .saturating_mul(LINE_SCORE_BASE)
        .saturating_mul(combo)
}

/// Level for a total number of cleared lines (1-based)
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Whether a single lock cleared enough rows to count as a tetris
pub fn is_tetris(rows: usize) -> bool {
    rows == TETRIS_ROWS
}

/// Next fall interval after a speed-up
///
/// Returns `None` once the interval has reached `floor_ms` (no further speed-up).
pub fn next_fall_interval(current_ms: u32, percent: u32, floor_ms: u32) -> Option<u32> {
    if current_ms <= floor_ms {
        return None;
    }
    let scaled = (current_ms as u64 * percent as u64 / 100) as u32;
    Some(scaled.max(floor_ms))
}
