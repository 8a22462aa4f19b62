//! Candidate move generation
//!
//! Only frontier cells are considered: empty cells touching at least one
//! stone in their 8-neighbourhood.

use crate::board::{Board, Pos};

/// Check if any of the 8 neighbours of `(x, y)` holds a stone
#[inline]
pub fn has_neighbor(board: &Board, x: usize, y: usize) -> bool {
    let pos = Pos::new(x, y);
    for dy in -1i32..=1 {
        for dx in -1i32..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if let Some(n) = pos.offset(dx, dy, 1, board.size()) {
                if !board.at(n).is_empty() {
                    return true;
                }
            }
        }
    }
    false
}

/// Every empty cell adjacent to a stone, in row-major order.
///
/// An empty board has no candidates.
#[must_use]
pub fn get_valid_moves(board: &Board) -> Vec<Pos> {
    let n = board.size();
    let mut moves = Vec::with_capacity(64);
    for y in 0..n {
        for x in 0..n {
            if board.is_empty_at(x, y) && has_neighbor(board, x, y) {
                moves.push(Pos::new(x, y));
            }
        }
    }
    moves
}
