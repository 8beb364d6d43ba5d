//! Game rules for five-in-a-row
//!
//! Only line completion ends a game here: no captures, no forbidden moves.
//! A draw is a full board with no line.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, has_line_anywhere, has_line_at, DIRECTIONS};
