//! Scoped simulated moves for search backtracking

use std::ops::{Deref, DerefMut};

use super::{Board, Pos, Stone};

/// A stone placed for look-ahead. Removed again when the guard drops,
/// whichever way the scope is left (normal return, cutoff, unwinding).
#[derive(Debug)]
pub struct Simulated<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Board {
    /// Place `stone` at `pos` until the returned guard is dropped.
    ///
    /// Returns `None` (and changes nothing) if the placement is rejected.
    ///
    /// ```
    /// use gomoku::{Board, Pos, Stone};
    ///
    /// let mut board = Board::default();
    /// let pos = Pos::new(4, 4);
    /// {
    ///     let sim = board.simulate(pos, Stone::Black).unwrap();
    ///     assert_eq!(sim.get(pos), Some(Stone::Black));
    /// }
    /// assert!(board.is_empty(pos));
    /// ```
    pub fn simulate(&mut self, pos: Pos, stone: Stone) -> Option<Simulated<'_>> {
        if self.place(pos, stone) {
            Some(Simulated { board: self, pos })
        } else {
            None
        }
    }
}

impl Simulated<'_> {
    /// Where the simulated stone sits
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Simulated<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Simulated<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Simulated<'_> {
    fn drop(&mut self) {
        self.board.remove(self.pos);
    }
}
