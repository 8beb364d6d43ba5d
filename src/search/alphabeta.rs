//! Minimax search with alpha-beta pruning
//!
//! This module implements the recursive evaluator behind the move selector.
//! Scores are always from the AI's point of view: the AI is the maximizing
//! side, the opponent the minimizing side.
//!
//! # Node order
//!
//! 1. Terminal check over the whole board (AI line, opponent line, full)
//! 2. Depth limit: streak heuristic
//! 3. Children: every empty cell in row-major order
//!
//! Every child is played through [`Board::simulate`], so the stone is gone
//! again before the score is compared and before any cutoff returns.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::eval::ScoreConfig;
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::default();
//! for col in 0..4 {
//!     board.place(Pos::new(0, col), Stone::Black);
//! }
//!
//! let mut searcher = Searcher::new(Stone::Black, Stone::White, ScoreConfig::default());
//! let score = searcher.evaluate(&mut board, 1, true, i32::MIN, i32::MAX);
//! assert_eq!(score, ScoreConfig::WIN);
//! ```

use crate::board::{Board, Stone};
use crate::eval::{evaluate, ScoreConfig};
use crate::rules::has_line_anywhere;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls to `evaluate`, root children included
    pub nodes: u64,
    /// Nodes that ended on a win, loss or draw
    pub terminal_hits: u64,
    /// Nodes scored by the heuristic at the depth limit
    pub heuristic_leaves: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
}

/// Depth-limited minimax evaluator for one AI/opponent pairing.
#[derive(Debug, Clone)]
pub struct Searcher {
    ai: Stone,
    opponent: Stone,
    scores: ScoreConfig,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(ai: Stone, opponent: Stone, scores: ScoreConfig) -> Self {
        Self {
            ai,
            opponent,
            scores,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn ai(&self) -> Stone {
        self.ai
    }

    #[inline]
    pub fn opponent(&self) -> Stone {
        self.opponent
    }

    #[inline]
    pub fn scores(&self) -> &ScoreConfig {
        &self.scores
    }

    /// Counters accumulated since the last [`Searcher::reset_stats`]
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Score of a finished game, or `None` while play can continue.
    ///
    /// Scans the entire board for both colors; nodes carry no "last move",
    /// so the local check alone cannot tell who won.
    pub fn terminal_score(&self, board: &Board) -> Option<i32> {
        if has_line_anywhere(board, self.ai) {
            Some(self.scores.win)
        } else if has_line_anywhere(board, self.opponent) {
            Some(self.scores.loss)
        } else if board.is_full() {
            Some(self.scores.draw)
        } else {
            None
        }
    }

    /// Minimax value of `board` searched `depth` plies deep.
    ///
    /// `maximizing` selects whose turn it is (true: AI). `alpha`/`beta`
    /// bound the window; pass `i32::MIN`/`i32::MAX` for an exact score.
    /// The board is mutated during the call and restored before it returns.
    pub fn evaluate(
        &mut self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if let Some(score) = self.terminal_score(board) {
            self.stats.terminal_hits += 1;
            return score;
        }
        if depth == 0 {
            self.stats.heuristic_leaves += 1;
            return evaluate(board, self.ai, self.opponent, &self.scores);
        }

        if maximizing {
            let mut max_eval = i32::MIN;
            for pos in board.positions() {
                let eval = {
                    let Some(mut child) = board.simulate(pos, self.ai) else {
                        continue;
                    };
                    self.evaluate(&mut child, depth - 1, false, alpha, beta)
                };

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    return max_eval;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for pos in board.positions() {
                let eval = {
                    let Some(mut child) = board.simulate(pos, self.opponent) else {
                        continue;
                    };
                    self.evaluate(&mut child, depth - 1, true, alpha, beta)
                };

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    return min_eval;
                }
            }
            min_eval
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::eval::score_streaks;
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn searcher() -> Searcher {
        Searcher::new(Stone::Black, Stone::White, ScoreConfig::default())
    }

    /// Plain minimax over every child, no pruning.
    fn minimax(searcher: &Searcher, board: &mut Board, depth: u32, maximizing: bool) -> i32 {
        if let Some(score) = searcher.terminal_score(board) {
            return score;
        }
        if depth == 0 {
            return evaluate(board, searcher.ai(), searcher.opponent(), searcher.scores());
        }
        let stone = if maximizing {
            searcher.ai()
        } else {
            searcher.opponent()
        };
        let mut values = Vec::new();
        for pos in board.positions() {
            if let Some(mut child) = board.simulate(pos, stone) {
                values.push(minimax(searcher, &mut child, depth - 1, !maximizing));
            }
        }
        if maximizing {
            values.into_iter().max().unwrap_or(i32::MIN)
        } else {
            values.into_iter().min().unwrap_or(i32::MAX)
        }
    }

    /// Board with `stones` alternating stones at random empty cells.
    fn random_board(size: usize, win_length: usize, stones: usize, seed: u64) -> Board {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut board = Board::with_win_length(size, win_length);
        let mut color = Stone::Black;
        let mut placed = 0;
        while placed < stones && !board.is_full() {
            let pos = Pos::new(rng.gen_range(0..size as u8), rng.gen_range(0..size as u8));
            if board.place(pos, color) {
                color = color.opponent();
                placed += 1;
            }
        }
        board
    }

    #[test]
    fn test_depth_zero_is_heuristic() {
        let mut board = Board::default();
        board.place(Pos::new(4, 4), Stone::Black);
        board.place(Pos::new(4, 5), Stone::Black);
        board.place(Pos::new(3, 3), Stone::White);

        let mut s = searcher();
        let expected = score_streaks(&board, Stone::Black, s.scores())
            - score_streaks(&board, Stone::White, s.scores());
        assert_eq!(s.evaluate(&mut board, 0, true, i32::MIN, i32::MAX), expected);
        assert_eq!(s.evaluate(&mut board, 0, false, i32::MIN, i32::MAX), expected);
        assert_eq!(s.stats().heuristic_leaves, 2);
    }

    #[test]
    fn test_terminal_checked_before_depth() {
        let mut board = Board::default();
        for c in 0..5 {
            board.place(Pos::new(2, c), Stone::White);
        }
        let mut s = searcher();
        assert_eq!(s.evaluate(&mut board, 0, true, i32::MIN, i32::MAX), ScoreConfig::LOSS);
        assert_eq!(s.evaluate(&mut board, 3, true, i32::MIN, i32::MAX), ScoreConfig::LOSS);
        assert_eq!(s.stats().terminal_hits, 2);
        assert_eq!(s.stats().heuristic_leaves, 0);
    }

    #[test]
    fn test_ai_line_wins_over_opponent_line() {
        let mut board = Board::default();
        for c in 0..5 {
            board.place(Pos::new(0, c), Stone::Black);
            board.place(Pos::new(8, c), Stone::White);
        }
        assert_eq!(searcher().terminal_score(&board), Some(ScoreConfig::WIN));
    }

    #[test]
    fn test_full_board_is_draw() {
        // No three in a row anywhere
        let mut board = Board::from_rows(&["BBW", "WWB", "BBW"], 3).unwrap();
        let mut s = searcher();
        assert_eq!(s.terminal_score(&board), Some(ScoreConfig::DRAW));
        assert_eq!(s.evaluate(&mut board, 2, true, i32::MIN, i32::MAX), ScoreConfig::DRAW);
    }

    #[test]
    fn test_immediate_win_found_at_depth_one() {
        let mut board = Board::default();
        for c in 0..4 {
            board.place(Pos::new(0, c), Stone::Black);
        }
        let mut s = searcher();
        assert_eq!(s.evaluate(&mut board, 1, true, i32::MIN, i32::MAX), ScoreConfig::WIN);
    }

    #[test]
    fn test_opponent_threat_seen_when_minimizing() {
        let mut board = Board::default();
        for c in 0..4 {
            board.place(Pos::new(8, c), Stone::White);
        }
        let mut s = searcher();
        assert_eq!(s.evaluate(&mut board, 1, false, i32::MIN, i32::MAX), ScoreConfig::LOSS);
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = Board::from_rows(
            &["......", "......", "..BW..", "..WB..", "......", "......"],
            4,
        )
        .unwrap();
        let before = board.clone();
        let mut s = Searcher::new(Stone::White, Stone::Black, ScoreConfig::default());
        s.evaluate(&mut board, 3, true, i32::MIN, i32::MAX);
        assert_eq!(board, before);
        assert!(s.stats().cutoffs > 0);
    }

    #[test]
    fn test_narrow_window_cuts_off() {
        let mut board = Board::with_win_length(5, 3);
        board.place(Pos::new(2, 2), Stone::Black);
        let mut s = Searcher::new(Stone::Black, Stone::White, ScoreConfig::default());
        // Already-decided window: first child settles it
        s.evaluate(&mut board, 2, true, 10, 10);
        assert!(s.stats().cutoffs >= 1);
        assert!(s.stats().nodes < 1 + 24 * 24);
    }

    #[test]
    fn test_pruning_matches_minimax_small_boards() {
        for seed in 0..20 {
            for stones in [0, 2, 4, 6] {
                let mut board = random_board(5, 3, stones, seed);
                for maximizing in [true, false] {
                    let s_plain = searcher();
                    let expected = minimax(&s_plain, &mut board, 2, maximizing);
                    let mut s = searcher();
                    let got = s.evaluate(&mut board, 2, maximizing, i32::MIN, i32::MAX);
                    assert_eq!(got, expected, "seed {seed}, stones {stones}, max {maximizing}");
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_pruning_matches_minimax(
            seed in any::<u64>(),
            stones in 0usize..8,
            depth in 1u32..=3,
            maximizing in any::<bool>(),
        ) {
            let mut board = random_board(4, 3, stones, seed);
            let before = board.clone();
            let expected = minimax(&searcher(), &mut board, depth, maximizing);
            let got = searcher().evaluate(&mut board, depth, maximizing, i32::MIN, i32::MAX);
            prop_assert_eq!(got, expected);
            prop_assert_eq!(board, before);
        }

        #[test]
        fn prop_depth_zero_is_heuristic(
            seed in any::<u64>(),
            stones in 0usize..24,
            maximizing in any::<bool>(),
        ) {
            let mut board = random_board(7, 4, stones, seed);
            let mut s = searcher();
            prop_assume!(s.terminal_score(&board).is_none());

            let expected = score_streaks(&board, Stone::Black, s.scores())
                - score_streaks(&board, Stone::White, s.scores());
            prop_assert_eq!(s.evaluate(&mut board, 0, maximizing, i32::MIN, i32::MAX), expected);
            prop_assert_eq!(s.stats().heuristic_leaves, 1);
            prop_assert_eq!(s.stats().nodes, 1);
        }
    }
}
