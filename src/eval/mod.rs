//! Evaluation module
//!
//! Terminal outcomes and depth-limit estimates share one scoring table,
//! [`ScoreConfig`]. The estimate counts streaks of 2, 3 and 4 only.

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, score_streaks};
pub use weights::ScoreConfig;
