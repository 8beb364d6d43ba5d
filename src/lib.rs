//! Five-in-a-row decision core
//!
//! Board model and minimax AI for a two-player connection game on a square
//! grid (9x9 by default, five in a row wins):
//! - No captures, no forbidden moves
//! - A full board without a line is a draw
//! - The AI searches a fixed number of plies with alpha-beta pruning
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and scoped simulated moves
//! - [`rules`]: Line detection (local and whole-board)
//! - [`eval`]: Score table and streak heuristic
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Root move selection with random tie-break
//! - [`config`]: Engine configuration
//!
//! Turn order, I/O and rendering belong to the caller. The caller owns the
//! [`Board`], asks [`AIEngine::find_best_move`] for a move and places it.
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let mut board = Board::default();
//! let mut engine = AIEngine::new(
//!     EngineConfig::new(Stone::White, Stone::Black).with_depth(2).with_seed(7),
//! )
//! .unwrap();
//!
//! board.place(Pos::new(4, 4), Stone::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.find_best_move(&mut board) {
//!     board.place(pos, Stone::White);
//!     assert!(!board.check_win(pos, Stone::White));
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Simulated, Stone, DEFAULT_BOARD_SIZE, WIN_LENGTH};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{Error, Result};
pub use eval::ScoreConfig;
