//! Board representation for five-in-a-row

pub mod board;
pub mod simulate;


// Re-exports
pub use board::Board;
pub use simulate::Simulated;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default board size (9x9)
pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Largest supported board side; coordinates are stored as `u8`
pub const MAX_BOARD_SIZE: usize = u8::MAX as usize;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Character used for this stone in board diagrams
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'B',
            Stone::White => 'W',
        }
    }
}

impl TryFrom<char> for Stone {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '.' => Ok(Stone::Empty),
            'B' => Ok(Stone::Black),
            'W' => Ok(Stone::White),
            _ => Err(Error::InvalidSymbol { symbol }),
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Position on the board, ordered row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Flat row-major index on a board with `size` columns
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
