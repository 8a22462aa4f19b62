//! Move policies for the automated opponent
//!
//! The engine always plays White and offers three difficulty levels:
//!
//! 1. **Easy**: a uniformly random frontier cell
//! 2. **Medium**: the frontier cell with the best one-ply evaluation
//! 3. **Hard**: minimax with alpha-beta pruning at a configurable depth
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Side};
//!
//! let mut engine = AIEngine::with_seed(7);
//! let mut board = Board::new(15);
//! board.set(7, 7, Side::Black);
//!
//! let result = engine.get_move_with_stats(&mut board, Difficulty::Hard).unwrap();
//! println!("Best move: {}", result.pos);
//! println!("Time: {}ms", result.time_ms);
//! assert_eq!(board.stone_count(), 2);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Pos, Side, TrialStone};
use crate::eval::evaluate_position;
use crate::search::{get_valid_moves, Searcher, DEFAULT_SEARCH_DEPTH};

/// Strength of the automated opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels in cycling order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Next level, wrapping from Hard back to Easy
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Case-insensitive level name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// An applied automated move with search statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Cell where White's stone was placed
    pub pos: Pos,
    /// Evaluation backing the choice; `None` for Easy
    pub score: Option<i32>,
    /// Policy that produced the move
    pub difficulty: Difficulty,
    /// Positions evaluated or searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Automated opponent for Gomoku.
///
/// Owns the RNG used by the Easy choice and the Hard shuffle. Seed it with
/// [`AIEngine::with_seed`] for reproducible play.
pub struct AIEngine<R: Rng = StdRng> {
    rng: R,
    /// Plies searched by Hard
    search_depth: u8,
}

impl AIEngine<StdRng> {
    /// Create an engine seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an engine with a fixed seed.
    ///
    /// ```
    /// use gomoku::{AIEngine, Board, Difficulty, Side};
    ///
    /// let mut board_a = Board::new(15);
    /// board_a.set(7, 7, Side::Black);
    /// let mut board_b = board_a.clone();
    ///
    /// let a = AIEngine::with_seed(3).get_move(&mut board_a, Difficulty::Easy);
    /// let b = AIEngine::with_seed(3).get_move(&mut board_b, Difficulty::Easy);
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for AIEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AIEngine<R> {
    /// Side played by the engine
    pub const SIDE: Side = Side::White;

    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }

    /// Set the Hard search depth (at least 1).
    pub fn set_search_depth(&mut self, depth: u8) {
        self.search_depth = depth.max(1);
    }

    #[must_use]
    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    /// Choose and apply White's move.
    ///
    /// Returns `None`, leaving the board untouched, when no frontier cell
    /// exists (an empty board, or one with no empty cell next to a stone).
    pub fn get_move(&mut self, board: &mut Board, difficulty: Difficulty) -> Option<Pos> {
        self.get_move_with_stats(board, difficulty).map(|result| result.pos)
    }

    /// Choose and apply White's move, returning search statistics.
    pub fn get_move_with_stats(
        &mut self,
        board: &mut Board,
        difficulty: Difficulty,
    ) -> Option<MoveResult> {
        let start = Instant::now();

        let (pos, score, nodes) = match difficulty {
            Difficulty::Easy => (self.easy_move(board)?, None, 1),
            Difficulty::Medium => {
                let (pos, score, nodes) = Self::medium_move(board)?;
                (pos, Some(score), nodes)
            }
            Difficulty::Hard => {
                let (pos, score, nodes) = self.hard_move(board)?;
                (pos, Some(score), nodes)
            }
        };

        board.set(pos.x, pos.y, Self::SIDE);

        let result = MoveResult {
            pos,
            score,
            difficulty,
            nodes,
            time_ms: start.elapsed().as_millis() as u64,
        };
        debug!(
            "{} plays {} ({}, score {:?}, {} nodes, {}ms)",
            Self::SIDE,
            result.pos,
            difficulty,
            result.score,
            result.nodes,
            result.time_ms
        );
        Some(result)
    }

    fn easy_move(&mut self, board: &Board) -> Option<Pos> {
        get_valid_moves(board).choose(&mut self.rng).copied()
    }

    /// Greedy one-ply choice; ties keep the earliest move in row-major order.
    fn medium_move(board: &mut Board) -> Option<(Pos, i32, u64)> {
        let moves = get_valid_moves(board);
        let nodes = moves.len() as u64;

        let mut best: Option<(Pos, i32)> = None;
        for mov in moves {
            let score = {
                let trial = TrialStone::place(board, mov, Self::SIDE);
                evaluate_position(&trial, Self::SIDE)
            };
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mov, score));
            }
        }

        best.map(|(pos, score)| (pos, score, nodes))
    }

    fn hard_move(&mut self, board: &mut Board) -> Option<(Pos, i32, u64)> {
        let mut searcher = Searcher::with_perspective(&mut self.rng, Self::SIDE);
        let result = searcher.search(board, self.search_depth);
        let nodes = searcher.stats().nodes;
        result.best_move.map(|pos| (pos, result.score, nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::check_win;

    fn board_with_center() -> Board {
        let mut board = Board::new(15);
        board.set(7, 7, Side::Black);
        board
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::with_seed(1);
        assert_eq!(engine.search_depth(), DEFAULT_SEARCH_DEPTH);
        assert_eq!(AIEngine::<StdRng>::SIDE, Side::White);
    }

    #[test]
    fn test_engine_set_depth() {
        let mut engine = AIEngine::with_seed(1);
        engine.set_search_depth(3);
        assert_eq!(engine.search_depth(), 3);
        engine.set_search_depth(0);
        assert_eq!(engine.search_depth(), 1);
    }

    #[test]
    fn test_easy_responds_next_to_stone() {
        let mut board = board_with_center();
        let mut engine = AIEngine::with_seed(123);

        let pos = engine.get_move(&mut board, Difficulty::Easy).unwrap();

        assert_eq!(pos.distance(Pos::new(7, 7)), 1);
        assert_eq!(board.at(pos), crate::board::Cell::Occupied(Side::White));
        assert_eq!(board.stone_count(), 2);
    }

    #[test]
    fn test_easy_has_no_score() {
        let mut board = board_with_center();
        let result = AIEngine::with_seed(0)
            .get_move_with_stats(&mut board, Difficulty::Easy)
            .unwrap();
        assert_eq!(result.score, None);
        assert_eq!(result.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_engine_empty_board() {
        let mut engine = AIEngine::with_seed(5);
        for difficulty in Difficulty::ALL {
            let mut board = Board::new(15);
            assert_eq!(engine.get_move(&mut board, difficulty), None);
            assert!(board.is_board_empty());
        }
    }

    #[test]
    fn test_medium_completes_five() {
        let mut board = Board::new(15);
        for x in 5..9 {
            board.set(x, 4, Side::White);
        }
        board.set(4, 4, Side::Black);
        board.set(6, 5, Side::Black);

        let pos = AIEngine::with_seed(0).get_move(&mut board, Difficulty::Medium).unwrap();
        assert_eq!(pos, Pos::new(9, 4));
        assert!(check_win(&board, pos));
    }

    #[test]
    fn test_medium_blocks_open_four() {
        let mut board = Board::new(15);
        for y in 3..7 {
            board.set(2, y, Side::Black);
        }
        board.set(2, 2, Side::White);
        board.set(9, 9, Side::White);

        let pos = AIEngine::with_seed(0).get_move(&mut board, Difficulty::Medium).unwrap();
        assert_eq!(pos, Pos::new(2, 7));
    }

    #[test]
    fn test_medium_is_deterministic() {
        let mut board_a = board_with_center();
        let mut board_b = board_with_center();
        let a = AIEngine::with_seed(1).get_move(&mut board_a, Difficulty::Medium);
        let b = AIEngine::with_seed(2).get_move(&mut board_b, Difficulty::Medium);
        // No randomness on Medium: the first maximal move in row-major order
        assert_eq!(a, b);
        assert_eq!(a, Some(Pos::new(6, 6)));
    }

    #[test]
    fn test_hard_completes_five() {
        let mut board = Board::new(15);
        for y in 8..12 {
            board.set(3, y, Side::White);
        }
        board.set(3, 7, Side::Black);
        board.set(4, 8, Side::Black);

        let result = AIEngine::with_seed(9)
            .get_move_with_stats(&mut board, Difficulty::Hard)
            .unwrap();
        assert_eq!(result.pos, Pos::new(3, 12));
        assert!(check_win(&board, result.pos));
        assert!(result.score.is_some());
        assert!(result.nodes > 1);
    }

    #[test]
    fn test_hard_leaves_one_new_stone() {
        let mut board = board_with_center();
        board.set(8, 8, Side::White);
        board.set(6, 7, Side::Black);
        let before = board.clone();

        let pos = AIEngine::with_seed(4).get_move(&mut board, Difficulty::Hard).unwrap();

        assert!(before.at(pos).is_empty());
        assert_eq!(board.stone_count(), before.stone_count() + 1);
        for (p, side) in before.occupied() {
            assert_eq!(board.at(p), crate::board::Cell::Occupied(side));
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let play = |seed| {
            let mut board = board_with_center();
            let mut engine = AIEngine::with_seed(seed);
            let mut moves = Vec::new();
            for difficulty in [Difficulty::Easy, Difficulty::Hard, Difficulty::Easy] {
                moves.push(engine.get_move(&mut board, difficulty));
            }
            moves
        };
        assert_eq!(play(77), play(77));
    }

    #[test]
    fn test_difficulty_cycle() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.next(), Difficulty::Medium);
        assert_eq!(Difficulty::Medium.next(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
        for d in Difficulty::ALL {
            assert_eq!(d.next().next().next(), d);
        }
    }

    #[test]
    fn test_difficulty_parse_and_display() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }

    #[test]
    fn test_difficulty_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"medium\"");
        let d: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(d, Difficulty::Hard);
        assert!(serde_json::from_str::<Difficulty>("\"Hard\"").is_err());
    }
}
