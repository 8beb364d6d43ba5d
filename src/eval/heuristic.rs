//! Heuristic evaluation for positions at the search horizon
//!
//! Deliberately simple: every stone starts a forward streak along each of
//! the four axes and the streak length is looked up in [`ScoreConfig`].
//! Whether the ends of a streak are open or blocked is not considered, so
//! `WBBB.` scores the same as `.BBB.`.

use crate::board::{Board, Stone};
use crate::rules::DIRECTIONS;

use super::weights::ScoreConfig;

/// Evaluate the board for `ai` against `opponent`.
///
/// Positive values favor `ai`. Streaks long enough to win are not scored
/// here; the search catches them as terminal positions first. Sums
/// saturate at the `i32` bounds instead of wrapping.
#[must_use]
pub fn evaluate(board: &Board, ai: Stone, opponent: Stone, scores: &ScoreConfig) -> i32 {
    score_streaks(board, ai, scores).saturating_sub(score_streaks(board, opponent, scores))
}

/// Sum of streak weights for one color.
///
/// Overlapping streaks are all counted: `BBB` in a row yields one three
/// (from the first stone) and one two (from the second).
pub fn score_streaks(board: &Board, color: Stone, scores: &ScoreConfig) -> i32 {
    if color == Stone::Empty {
        return 0;
    }
    let max_streak = board.win_length();
    let mut score: i32 = 0;

    for pos in board.positions() {
        if board.get(pos) != Some(color) {
            continue;
        }
        let (row, col) = (i32::from(pos.row), i32::from(pos.col));
        for (dr, dc) in DIRECTIONS {
            let mut streak = 1;
            while streak < max_streak {
                let step = streak as i32;
                if board.stone_at(row + dr * step, col + dc * step) != Some(color) {
                    break;
                }
                streak += 1;
            }
            score = score.saturating_add(scores.streak_score(streak));
        }
    }
    score
}
