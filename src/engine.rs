//! Root move selection
//!
//! The engine tries every empty cell for the AI, scores each with the
//! minimax [`Searcher`] one ply down (opponent to move, full window), and
//! picks uniformly at random among the moves tied for the best score.
//!
//! The board is borrowed mutably for the duration of the call and handed
//! back with exactly the content it had. Placing the chosen stone is left
//! to the caller.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let mut engine = AIEngine::new(EngineConfig::for_stone(Stone::White).with_depth(1)).unwrap();
//! let mut board = Board::default();
//! board.place(Pos::new(4, 4), Stone::Black);
//!
//! if let Some(pos) = engine.find_best_move(&mut board) {
//!     board.place(pos, Stone::White);
//!     println!("AI plays at {pos}");
//! }
//! ```

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument, warn};

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::search::{SearchStats, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Score shared by all tied best moves
    pub score: i32,
    /// Root moves evaluated
    pub candidates: usize,
    /// Root moves tied for the best score
    pub tied: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Search counters for this decision
    pub stats: SearchStats,
}

impl MoveResult {
    /// Nothing to play
    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            candidates: 0,
            tied: 0,
            time_ms,
            stats: SearchStats::default(),
        }
    }
}

/// Minimax AI player.
///
/// One engine per AI participant. Holds the searcher, the search depth and
/// the tie-break RNG; the board always comes from the caller.
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
    depth: u32,
    rng: ChaCha8Rng,
}

impl AIEngine {
    /// Create an engine from a validated configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            searcher: Searcher::new(config.ai, config.opponent, config.scores),
            depth: config.depth,
            rng,
        })
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn ai(&self) -> Stone {
        self.searcher.ai()
    }

    #[inline]
    pub fn opponent(&self) -> Stone {
        self.searcher.opponent()
    }

    /// Best move for the AI, or `None` if the board is full.
    pub fn find_best_move(&mut self, board: &mut Board) -> Option<Pos> {
        self.find_best_move_with_stats(board).best_move
    }

    /// Like [`AIEngine::find_best_move`], with score and search statistics.
    #[instrument(skip_all, fields(ai = %self.searcher.ai(), depth = self.depth))]
    pub fn find_best_move_with_stats(&mut self, board: &mut Board) -> MoveResult {
        let start = Instant::now();
        self.searcher.reset_stats();
        debug!("AI is thinking");

        let ai = self.searcher.ai();
        let mut best_score = i32::MIN;
        let mut best_moves: Vec<Pos> = Vec::new();
        let mut candidates = 0;

        for pos in board.positions() {
            let score = {
                let Some(mut child) = board.simulate(pos, ai) else {
                    continue;
                };
                self.searcher
                    .evaluate(&mut child, self.depth - 1, false, i32::MIN, i32::MAX)
            };
            candidates += 1;

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(pos);
            } else if score == best_score {
                best_moves.push(pos);
            }
        }

        let time_ms = start.elapsed().as_millis() as u64;
        let Some(&best_move) = best_moves.choose(&mut self.rng) else {
            warn!("no empty cell left, cannot pick a move");
            return MoveResult::no_move(time_ms);
        };

        let stats = self.searcher.stats();
        debug!(
            %best_move,
            score = best_score,
            tied = best_moves.len(),
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            time_ms,
            "AI decision"
        );

        MoveResult {
            best_move: Some(best_move),
            score: best_score,
            candidates,
            tied: best_moves.len(),
            time_ms,
            stats,
        }
    }
}
