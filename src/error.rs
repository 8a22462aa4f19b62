//! Errors reported to the player by a game session

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("position ({x}, {y}) is outside the {size}x{size} board")]
    OutOfRange { x: usize, y: usize, size: usize },
    #[error("position ({x}, {y}) is already occupied")]
    CellOccupied { x: usize, y: usize },
    #[error("the game is over")]
    GameOver,
    #[error("it is not the human player's turn")]
    NotHumanTurn,
}
