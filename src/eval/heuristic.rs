//! Heuristic evaluation function for Gomoku board positions
//!
//! The board is cut into lines (every row, every column, and every diagonal
//! long enough to hold five) and each line is scored window by window. The
//! same score serves as the minimax leaf value and as the greedy one-ply
//! score.

use crate::board::{Board, Cell, Pos, Side, WIN_LENGTH};

use super::patterns::window_score;

/// Score `WIN_LENGTH` consecutive cells for `side`.
#[must_use]
pub fn evaluate_window(window: &[Cell], side: Side) -> i32 {
    debug_assert_eq!(window.len(), WIN_LENGTH);

    let (mut own, mut opp, mut empty) = (0, 0, 0);
    for &cell in window {
        match cell {
            Cell::Empty => empty += 1,
            Cell::Occupied(s) if s == side => own += 1,
            Cell::Occupied(_) => opp += 1,
        }
    }
    window_score(own, opp, empty)
}

/// Sum of [`evaluate_window`] over every contiguous window of `line`.
///
/// Lines shorter than a window score 0.
#[must_use]
pub fn evaluate_line(line: &[Cell], side: Side) -> i32 {
    line.windows(WIN_LENGTH)
        .map(|window| evaluate_window(window, side))
        .sum()
}

/// Evaluate the whole board from the perspective of `side`.
///
/// Positive values favour `side`. Every row, column and diagonal of length
/// at least five is scored exactly once.
#[must_use]
pub fn evaluate_position(board: &Board, side: Side) -> i32 {
    let mut score = 0;
    scan_lines(board, |line| score += evaluate_line(line, side));
    score
}

/// Call `f` with each scoring line of the board.
///
/// Order: rows top to bottom, columns left to right, ↘ diagonals, then ↗
/// diagonals. Diagonals shorter than five are skipped. One buffer is reused
/// for every non-row line.
pub fn scan_lines(board: &Board, mut f: impl FnMut(&[Cell])) {
    let n = board.size();
    let mut buf = Vec::with_capacity(n);

    for y in 0..n {
        f(board.row(y));
    }

    for x in 0..n {
        collect_line(board, Pos::new(x, 0), 0, 1, &mut buf);
        f(&buf);
    }

    for (start, (dx, dy)) in diagonal_starts(n) {
        collect_line(board, start, dx, dy, &mut buf);
        f(&buf);
    }
}

/// Starting cells of all diagonals with at least five cells.
///
/// ↘ diagonals start on the top row or the left column; ↗ diagonals start on
/// the bottom row or the left column. The corner start is shared by both
/// halves, so the left-column offsets begin at 1.
fn diagonal_starts(n: usize) -> impl Iterator<Item = (Pos, (i32, i32))> {
    let span = n + 1 - WIN_LENGTH;
    let down_top = (0..span).map(|k| (Pos::new(k, 0), (1, 1)));
    let down_left = (1..span).map(|k| (Pos::new(0, k), (1, 1)));
    let up_bottom = (0..span).map(move |k| (Pos::new(k, n - 1), (1, -1)));
    let up_left = (1..span).map(move |k| (Pos::new(0, n - 1 - k), (1, -1)));
    down_top.chain(down_left).chain(up_bottom).chain(up_left)
}

fn collect_line(board: &Board, start: Pos, dx: i32, dy: i32, buf: &mut Vec<Cell>) {
    buf.clear();
    let mut k = 0;
    while let Some(pos) = start.offset(dx, dy, k, board.size()) {
        buf.push(board.at(pos));
        k += 1;
    }
}
