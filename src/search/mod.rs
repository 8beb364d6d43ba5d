//! Search module
//!
//! Contains the depth-limited minimax search with alpha-beta pruning.
//! Root move selection lives in [`crate::engine`].

pub mod alphabeta;

pub use alphabeta::{SearchStats, Searcher};
