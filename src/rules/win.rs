//! Win condition checking
//!
//! A player wins with `win_length` (normally five) or more stones in a row
//! along any of the four axes.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count `color` stones stepping from `pos` by `(dr, dc)`, not counting
/// `pos` itself. Stops at the edge, the first other cell, or `limit` steps.
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone, limit: usize) -> usize {
    let mut r = i32::from(pos.row);
    let mut c = i32::from(pos.col);
    let mut count = 0;
    while count < limit {
        r += dr;
        c += dc;
        if board.stone_at(r, c) != Some(color) {
            break;
        }
        count += 1;
    }
    count
}

/// Line check through a single cell.
///
/// Only checks the 4 axes through `pos`, each direction at most
/// `win_length - 1` steps out. Returns false when `pos` does not hold
/// `color`, so it is only meaningful for the cell that was just played.
#[inline]
pub fn has_line_at(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty || board.get(pos) != Some(color) {
        return false;
    }
    let need = board.win_length();
    let reach = need - 1;
    for (dr, dc) in DIRECTIONS {
        let count = 1
            + run_length(board, pos, dr, dc, color, reach)
            + run_length(board, pos, -dr, -dc, color, reach);
        if count >= need {
            return true;
        }
    }
    false
}

/// Whether `color` has a winning line anywhere on the board.
///
/// Tries [`has_line_at`] from every cell holding `color`. Search nodes
/// have no "last move", so this full O(N² · K) scan is what decides
/// terminal positions.
pub fn has_line_anywhere(board: &Board, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    board
        .positions()
        .any(|pos| board.get(pos) == Some(color) && has_line_at(board, pos, color))
}

/// Check for a winner
///
/// Returns `Some(Stone)` if either side has a line, `None` otherwise.
/// Black is checked first; both having lines cannot arise in real play.
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| has_line_anywhere(board, stone))
}
