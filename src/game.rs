//! Game session: board, turn order, outcome and the automated opponent
//!
//! The human plays Black and moves first; the engine answers as White.
//! The session owns every piece of game state so the UI only forwards input
//! and renders.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use crate::board::{Board, Pos, Side};
use crate::config::GameConfig;
use crate::engine::{AIEngine, Difficulty, MoveResult};
use crate::error::GameError;
use crate::rules::{check_win, winning_line};

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// `line` is the winning run, end to end
    Won { winner: Side, line: Vec<Pos> },
    Draw,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameOutcome::Won { winner, .. } => Some(*winner),
            GameOutcome::Draw => None,
        }
    }
}

pub struct GameSession<R: Rng = StdRng> {
    board: Board,
    engine: AIEngine<R>,
    difficulty: Difficulty,
    current_turn: Side,
    outcome: Option<GameOutcome>,
    last_move: Option<Pos>,
    history: Vec<(Pos, Side)>,
    last_ai_result: Option<MoveResult>,
}

impl GameSession<StdRng> {
    /// Session on a `size`×`size` board with an entropy-seeded engine.
    pub fn new(size: usize, difficulty: Difficulty) -> Self {
        Self::with_engine(size, difficulty, AIEngine::new())
    }

    /// Session whose engine is seeded with `seed`.
    pub fn with_seed(size: usize, difficulty: Difficulty, seed: u64) -> Self {
        Self::with_engine(size, difficulty, AIEngine::with_seed(seed))
    }

    /// Session using the configured board size, difficulty and search depth.
    pub fn from_config(config: &GameConfig) -> Self {
        let mut engine = AIEngine::new();
        engine.set_search_depth(config.ai.search_depth);
        Self::with_engine(config.board.size, config.ai.default_difficulty, engine)
    }
}

impl<R: Rng> GameSession<R> {
    /// Side played by the human
    pub const HUMAN: Side = Side::Black;

    pub fn with_engine(size: usize, difficulty: Difficulty, engine: AIEngine<R>) -> Self {
        info!("new {size}x{size} game, difficulty {difficulty}");
        Self {
            board: Board::new(size),
            engine,
            difficulty,
            current_turn: Self::HUMAN,
            outcome: None,
            last_move: None,
            history: Vec::new(),
            last_ai_result: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            info!("difficulty {} -> {}", self.difficulty, difficulty);
            self.difficulty = difficulty;
        }
    }

    /// Advance Easy -> Medium -> Hard -> Easy and return the new level.
    pub fn cycle_difficulty(&mut self) -> Difficulty {
        self.set_difficulty(self.difficulty.next());
        self.difficulty
    }

    /// Side to move
    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Every move played so far, in order
    pub fn history(&self) -> &[(Pos, Side)] {
        &self.history
    }

    /// Statistics of the engine's most recent move
    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Whether the stone at `(x, y)` is part of a five. Off-board is `false`.
    pub fn check_win(&self, x: usize, y: usize) -> bool {
        x < self.board.size() && y < self.board.size() && check_win(&self.board, Pos::new(x, y))
    }

    /// Place the human's stone at `(x, y)`.
    ///
    /// Returns `Ok(true)` when the move ended the game and `Ok(false)` when
    /// the turn passed to the engine.
    pub fn apply_human_move(&mut self, x: usize, y: usize) -> Result<bool, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_turn != Self::HUMAN {
            return Err(GameError::NotHumanTurn);
        }
        let size = self.board.size();
        if x >= size || y >= size {
            return Err(GameError::OutOfRange { x, y, size });
        }
        if !self.board.is_empty_at(x, y) {
            return Err(GameError::CellOccupied { x, y });
        }

        self.board.set(x, y, Self::HUMAN);
        debug!("{} plays {}", Self::HUMAN, Pos::new(x, y));
        Ok(self.finish_move(Pos::new(x, y), Self::HUMAN))
    }

    /// Let the engine play White at `difficulty`.
    ///
    /// Returns `None`, with the board unchanged, when the game is over, it is
    /// Black's turn or there is no legal move. A full board without a five is
    /// a draw.
    pub fn request_automated_move(&mut self, difficulty: Difficulty) -> Option<Pos> {
        if self.is_over() || self.current_turn != AIEngine::<R>::SIDE {
            return None;
        }

        let Some(result) = self.engine.get_move_with_stats(&mut self.board, difficulty) else {
            if self.board.is_full() {
                self.end(GameOutcome::Draw);
            }
            return None;
        };

        self.last_ai_result = Some(result);
        self.finish_move(result.pos, AIEngine::<R>::SIDE);
        Some(result.pos)
    }

    /// Engine move at the session's difficulty
    pub fn play_automated_turn(&mut self) -> Option<Pos> {
        self.request_automated_move(self.difficulty)
    }

    /// Clear the board for a new game. The difficulty is kept.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Self::HUMAN;
        self.outcome = None;
        self.last_move = None;
        self.history.clear();
        self.last_ai_result = None;
        info!("game reset, difficulty {}", self.difficulty);
    }

    /// Record a placed stone and either end the game or pass the turn.
    fn finish_move(&mut self, pos: Pos, side: Side) -> bool {
        self.history.push((pos, side));
        self.last_move = Some(pos);

        if check_win(&self.board, pos) {
            let line = winning_line(&self.board, pos).unwrap_or_else(|| vec![pos]);
            self.end(GameOutcome::Won { winner: side, line });
            return true;
        }
        if self.board.is_full() {
            self.end(GameOutcome::Draw);
            return true;
        }

        self.current_turn = side.opponent();
        false
    }

    fn end(&mut self, outcome: GameOutcome) {
        match &outcome {
            GameOutcome::Won { winner, .. } => {
                info!("{winner} wins after {} moves", self.history.len())
            }
            GameOutcome::Draw => info!("draw after {} moves", self.history.len()),
        }
        self.outcome = Some(outcome);
    }
}
