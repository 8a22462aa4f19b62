//! Game rules for Gomoku
//!
//! Free-style rules: five or more in a row wins, no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, check_win_board, winning_line, DIRECTIONS};
