//! Scoped trial placement for search backtracking

use std::ops::{Deref, DerefMut};

use super::{Board, Pos, Side};

/// A stone placed for evaluation only.
///
/// The guard dereferences to the board it was placed on and clears the cell
/// when dropped, so every path out of a search branch (including a pruning
/// `break`) leaves the board as it found it.
pub struct TrialStone<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> TrialStone<'a> {
    /// Place `side` at `pos`, which must be empty.
    #[inline]
    pub fn place(board: &'a mut Board, pos: Pos, side: Side) -> Self {
        board.set(pos.x, pos.y, side);
        Self { board, pos }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for TrialStone<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialStone<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialStone<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos.x, self.pos.y);
    }
}
