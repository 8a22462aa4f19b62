//! Win condition checking
//!
//! A side wins by placing five or more of its stones contiguously along a
//! row, a column, or either diagonal. Overlines count.

use crate::board::{Board, Cell, Pos, WIN_LENGTH};

/// Direction vectors for line checking (4 axes)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal ↘
    (1, -1), // Diagonal ↗
];

/// Count same-colored stones from `pos` along `(dx, dy)`, excluding `pos`.
///
/// Stops at the first differing or off-board cell, or after `limit` steps.
#[inline]
fn run_length(board: &Board, pos: Pos, dx: i32, dy: i32, limit: usize) -> usize {
    let cell = board.at(pos);
    let mut count = 0;
    for k in 1..=limit as i32 {
        match pos.offset(dx, dy, k, board.size()) {
            Some(next) if board.at(next) == cell => count += 1,
            _ => break,
        }
    }
    count
}

/// Check whether the stone at `pos` is part of five or more in a row.
///
/// Only the 4 axes through `pos` are scanned, at most 4 cells each way.
/// An empty cell never wins.
#[inline]
pub fn check_win(board: &Board, pos: Pos) -> bool {
    if board.at(pos) == Cell::Empty {
        return false;
    }
    let reach = WIN_LENGTH - 1;
    DIRECTIONS.iter().any(|&(dx, dy)| {
        1 + run_length(board, pos, dx, dy, reach) + run_length(board, pos, -dx, -dy, reach)
            >= WIN_LENGTH
    })
}

/// Check whether any stone on the board is part of a winning line.
///
/// O(N²); the search uses it as a terminal test on synthetic positions.
pub fn check_win_board(board: &Board) -> bool {
    board.occupied().any(|(pos, _)| check_win(board, pos))
}

/// Find the full winning run through `pos`, ordered from one end to the other.
///
/// Returns `None` if `pos` is empty or not part of five in a row.
pub fn winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    if board.at(pos) == Cell::Empty {
        return None;
    }
    let size = board.size();

    for &(dx, dy) in &DIRECTIONS {
        let back = run_length(board, pos, -dx, -dy, size);
        let forward = run_length(board, pos, dx, dy, size);
        if 1 + back + forward < WIN_LENGTH {
            continue;
        }

        let start = pos.offset(-dx, -dy, back as i32, size)?;
        let line = (0..=(back + forward) as i32)
            .filter_map(|k| start.offset(dx, dy, k, size))
            .collect();
        return Some(line);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;

    fn place_line(board: &mut Board, start: Pos, dx: i32, dy: i32, len: usize, side: Side) {
        for k in 0..len as i32 {
            let pos = start.offset(dx, dy, k, board.size()).unwrap();
            board.set(pos.x, pos.y, side);
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new(15);
        place_line(&mut board, Pos::new(3, 9), 1, 0, 5, Side::Black);
        for x in 3..8 {
            assert!(check_win(&board, Pos::new(x, 9)));
        }
        assert!(!check_win(&board, Pos::new(8, 9)));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new(15);
        place_line(&mut board, Pos::new(9, 0), 0, 1, 5, Side::White);
        assert!(check_win(&board, Pos::new(9, 4)));
        assert!(check_win(&board, Pos::new(9, 0)));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new(15);
        place_line(&mut board, Pos::new(2, 2), 1, 1, 5, Side::White);
        assert!(check_win(&board, Pos::new(4, 4)));
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        let mut board = Board::new(15);
        // From (4, 8) up to (8, 4)
        place_line(&mut board, Pos::new(4, 8), 1, -1, 5, Side::Black);
        assert!(check_win(&board, Pos::new(6, 6)));
        assert!(check_win(&board, Pos::new(8, 4)));
    }

    #[test]
    fn test_four_in_row_not_win() {
        for &(dx, dy) in &DIRECTIONS {
            let mut board = Board::new(15);
            place_line(&mut board, Pos::new(5, 7), dx, dy, 4, Side::Black);
            for k in 0..4 {
                let pos = Pos::new(5, 7).offset(dx, dy, k, 15).unwrap();
                assert!(!check_win(&board, pos), "four along ({dx}, {dy}) must not win");
            }
        }
    }

    #[test]
    fn test_exactly_five_wins_on_every_axis() {
        for &(dx, dy) in &DIRECTIONS {
            let mut board = Board::new(15);
            place_line(&mut board, Pos::new(5, 7), dx, dy, 5, Side::White);
            let last = Pos::new(5, 7).offset(dx, dy, 4, 15).unwrap();
            assert!(check_win(&board, last), "five along ({dx}, {dy}) must win");
        }
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new(15);
        place_line(&mut board, Pos::new(0, 9), 1, 0, 6, Side::Black);
        assert!(check_win(&board, Pos::new(0, 9)));
        assert!(check_win(&board, Pos::new(5, 9)));
    }

    #[test]
    fn test_gap_breaks_line() {
        let mut board = Board::new(15);
        place_line(&mut board, Pos::new(0, 0), 1, 0, 2, Side::Black);
        place_line(&mut board, Pos::new(3, 0), 1, 0, 3, Side::Black);
        assert!(!check_win(&board, Pos::new(3, 0)));
        assert!(!check_win_board(&board));
    }

    #[test]
    fn test_opponent_stone_breaks_line() {
        let mut board = Board::new(15);
        place_line(&mut board, Pos::new(0, 0), 1, 0, 4, Side::Black);
        board.set(4, 0, Side::White);
        board.set(5, 0, Side::Black);
        assert!(!check_win(&board, Pos::new(3, 0)));
        assert!(!check_win(&board, Pos::new(5, 0)));
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new(15);
        place_line(&mut board, Pos::new(10, 10), 1, 1, 5, Side::White);
        assert!(check_win(&board, Pos::new(14, 14)));
        assert!(check_win_board(&board));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let mut board = Board::new(15);
        place_line(&mut board, Pos::new(0, 3), 1, 0, 5, Side::Black);
        assert!(!check_win(&board, Pos::new(5, 3)));
        assert!(!check_win(&Board::new(15), Pos::new(7, 7)));
    }

    #[test]
    fn test_completing_four_wins() {
        let mut board = Board::new(15);
        for y in 5..9 {
            board.set(5, y, Side::Black);
        }
        assert!(board.is_empty_at(5, 4));
        assert!(board.is_empty_at(5, 9));
        assert!(!check_win_board(&board));

        board.set(5, 9, Side::Black);
        assert!(check_win(&board, Pos::new(5, 9)));
    }

    #[test]
    fn test_check_win_board() {
        let mut board = Board::new(15);
        assert!(!check_win_board(&board));

        place_line(&mut board, Pos::new(7, 2), 0, 1, 4, Side::White);
        board.set(0, 0, Side::Black);
        assert!(!check_win_board(&board));

        board.set(7, 6, Side::White);
        assert!(check_win_board(&board));
    }

    #[test]
    fn test_winning_line_positions() {
        let mut board = Board::new(15);
        place_line(&mut board, Pos::new(4, 8), 1, -1, 6, Side::Black);

        let line = winning_line(&board, Pos::new(6, 6)).unwrap();
        assert_eq!(line.len(), 6);
        assert_eq!(line[0], Pos::new(4, 8));
        assert_eq!(line[5], Pos::new(9, 3));
        assert!(line.windows(2).all(|w| w[0].distance(w[1]) == 1));
    }

    #[test]
    fn test_winning_line_none() {
        let mut board = Board::new(15);
        place_line(&mut board, Pos::new(0, 0), 0, 1, 4, Side::Black);
        assert!(winning_line(&board, Pos::new(0, 1)).is_none());
        assert!(winning_line(&board, Pos::new(1, 1)).is_none());
    }
}
