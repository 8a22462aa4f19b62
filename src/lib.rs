//! Gomoku (five in a row) against an automated opponent
//!
//! Free-style Gomoku on an N×N board (15×15 by default):
//! - Black (the human) moves first
//! - Five or more in a row on any axis wins
//! - A full board without a five is a draw
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation and scoped trial placement
//! - [`rules`]: Win detection
//! - [`eval`]: Window-based position evaluation
//! - [`search`]: Candidate generation and alpha-beta minimax
//! - [`engine`]: Easy / Medium / Hard move policies
//! - [`game`]: Game session with turn order and outcome
//! - [`config`]: `config.json` loading
//! - [`ui`]: eframe/egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Difficulty, GameSession, Side};
//!
//! let mut session = GameSession::with_seed(15, Difficulty::Medium, 1);
//!
//! // Human plays Black in the centre
//! assert_eq!(session.apply_human_move(7, 7), Ok(false));
//!
//! // Engine answers as White next to it
//! let reply = session.play_automated_turn().unwrap();
//! println!("AI plays at {reply}");
//! assert_eq!(session.current_turn(), Side::Black);
//! assert_eq!(session.history().len(), 2);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, Side, DEFAULT_BOARD_SIZE};
pub use config::{ConfigError, GameConfig};
pub use engine::{AIEngine, Difficulty, MoveResult};
pub use error::GameError;
pub use game::{GameOutcome, GameSession};
