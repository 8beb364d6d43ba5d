//! Square game board with placement, removal and local win checks

use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, WIN_LENGTH};
use crate::error::{Error, Result};
use crate::rules::has_line_at;

/// Game board: an N x N grid of stones plus the streak length that wins.
///
/// Cells only ever move Empty -> occupied (`place`) and occupied -> Empty
/// (`remove`). Coordinates outside the grid are rejected, never clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_length: usize,
    /// Row-major cell storage
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty `size` x `size` board with the standard win length.
    ///
    /// # Panics
    /// If `size` is zero or larger than [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Self {
        Self::with_win_length(size, WIN_LENGTH)
    }

    /// Create an empty board where `win_length` in a row wins.
    ///
    /// # Panics
    /// On the inputs [`Board::try_new`] rejects.
    pub fn with_win_length(size: usize, win_length: usize) -> Self {
        Self::try_new(size, win_length).expect("board size in 1..=255 and positive win length")
    }

    /// Fallible constructor for sizes that come from outside the program.
    pub fn try_new(size: usize, win_length: usize) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(Error::board(format!(
                "size {size} outside 1..={MAX_BOARD_SIZE}"
            )));
        }
        if win_length == 0 {
            return Err(Error::board("win length must be positive"));
        }
        Ok(Self {
            size,
            win_length,
            cells: vec![Stone::Empty; size * size],
        })
    }

    /// Build a board from rows of `.`, `B` and `W`.
    ///
    /// ```
    /// use gomoku::{Board, Pos, Stone};
    ///
    /// let board = Board::from_rows(&["B..", ".W.", "..B"], 3).unwrap();
    /// assert_eq!(board.get(Pos::new(1, 1)), Some(Stone::White));
    /// ```
    pub fn from_rows(rows: &[&str], win_length: usize) -> Result<Self> {
        let mut board = Self::try_new(rows.len(), win_length)?;
        for (r, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != board.size {
                return Err(Error::board(format!(
                    "row {r} has {} cells, expected {}",
                    symbols.len(),
                    board.size
                )));
            }
            for (c, symbol) in symbols.into_iter().enumerate() {
                let stone = Stone::try_from(symbol)?;
                board.cells[r * board.size + c] = stone;
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Reset every cell to Empty
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
    }

    /// True iff `0 <= row, col < size`
    #[inline]
    pub fn is_within_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Stone at signed coordinates, `None` outside the board.
    /// Line walkers step off the edge, hence the signed form.
    #[inline]
    pub(crate) fn stone_at(&self, row: i32, col: i32) -> Option<Stone> {
        if self.is_within_bounds(row, col) {
            Some(self.cells[row as usize * self.size + col as usize])
        } else {
            None
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        self.stone_at(i32::from(pos.row), i32::from(pos.col))
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Stone::Empty)
    }

    /// Place a stone. Returns false and leaves the board untouched when
    /// the position is off the board, already occupied, or `stone` is Empty.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> bool {
        if stone == Stone::Empty || !self.is_empty(pos) {
            return false;
        }
        let idx = pos.to_index(self.size);
        self.cells[idx] = stone;
        true
    }

    /// Clear a cell. Idempotent; ignored outside the board.
    /// Only meant for undoing a placement made by the caller.
    pub fn remove(&mut self, pos: Pos) {
        if self.get(pos).is_some() {
            let idx = pos.to_index(self.size);
            self.cells[idx] = Stone::Empty;
        }
    }

    /// No empty cell left
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Stone::Empty)
    }

    /// Whether `stone` has a winning line through `pos`.
    ///
    /// Local check: only reports "the mover just won" when `pos` is the
    /// cell just placed. Returns false if `pos` does not hold `stone`.
    #[inline]
    pub fn check_win(&self, pos: Pos, stone: Stone) -> bool {
        has_line_at(self, pos, stone)
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// All positions in row-major order. Does not borrow the board, so
    /// callers may mutate it while iterating.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size * size).map(move |idx| Pos::from_index(idx, size))
    }

    /// Empty positions in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&pos| self.is_empty(pos))
    }

    /// Deep copy of the grid, row by row. Never aliases the live board.
    pub fn snapshot(&self) -> Vec<Vec<Stone>> {
        self.cells.chunks(self.size).map(<[Stone]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}
