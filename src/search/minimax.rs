//! Depth-limited minimax with alpha-beta pruning
//!
//! The search plays out candidate moves in place on the caller's board and
//! takes each one back before trying the next, so no board is cloned per
//! branch. Candidates are shuffled with an injected RNG before each node is
//! expanded; a seeded RNG makes pruning and tie-breaking reproducible.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Side};
//! use gomoku::search::Searcher;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut board = Board::new(15);
//! board.set(7, 7, Side::Black);
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut searcher = Searcher::new(&mut rng);
//! let result = searcher.search(&mut board, 2);
//! assert!(result.best_move.is_some());
//! assert_eq!(board.stone_count(), 1);
//! ```

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pos, Side, TrialStone};
use crate::eval::evaluate_position;
use crate::rules::check_win_board;

use super::movegen::get_valid_moves;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = i32::MAX;

/// Search depth used by the hardest difficulty
pub const DEFAULT_SEARCH_DEPTH: u8 = 2;

/// Search result: the score of the position and the move that reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimax value from the perspective side's point of view
    pub score: i32,
    /// Best move found; `None` only when there were no candidates
    pub best_move: Option<Pos>,
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Branches abandoned on `beta <= alpha`
    pub cutoffs: u64,
    /// Candidate moves at the root
    pub root_candidates: usize,
}

/// Alpha-beta searcher borrowing a move-ordering RNG.
pub struct Searcher<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
    perspective: Side,
    stats: SearchStats,
}

impl<'r, R: Rng + ?Sized> Searcher<'r, R> {
    /// Searcher that maximizes for White.
    pub fn new(rng: &'r mut R) -> Self {
        Self::with_perspective(rng, Side::White)
    }

    /// Searcher that maximizes for `perspective`.
    ///
    /// Leaves are scored with `evaluate_position(board, perspective)`;
    /// maximizing nodes place `perspective`, minimizing nodes its opponent.
    pub fn with_perspective(rng: &'r mut R, perspective: Side) -> Self {
        Self {
            rng,
            perspective,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn perspective(&self) -> Side {
        self.perspective
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `depth` plies with the perspective side to move.
    pub fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.stats = SearchStats {
            root_candidates: get_valid_moves(board).len(),
            ..SearchStats::default()
        };
        let result = self.minimax(board, depth, -INF, INF, true);
        trace!(
            "search depth {}, {} candidates -> {:?} score {} ({} nodes, {} cutoffs)",
            depth,
            self.stats.root_candidates,
            result.best_move,
            result.score,
            self.stats.nodes,
            self.stats.cutoffs
        );
        result
    }

    /// Classic minimax with alpha-beta pruning.
    ///
    /// Terminal nodes (`depth == 0`, a five anywhere on the board, or no
    /// candidates) return the static score and no move. The board is
    /// identical before and after the call.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if depth == 0 || check_win_board(board) {
            return self.leaf(board);
        }

        let mut moves = get_valid_moves(board);
        if moves.is_empty() {
            return self.leaf(board);
        }
        moves.shuffle(&mut *self.rng);

        let side = if maximizing {
            self.perspective
        } else {
            self.perspective.opponent()
        };

        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mov in moves {
            let score = {
                let mut trial = TrialStone::place(board, mov, side);
                self.minimax(&mut trial, depth - 1, alpha, beta, !maximizing).score
            };

            if maximizing {
                if best_move.is_none() || score > best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(score);
            } else {
                if best_move.is_none() || score < best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        SearchResult {
            score: best_score,
            best_move,
        }
    }

    #[inline]
    fn leaf(&self, board: &Board) -> SearchResult {
        SearchResult {
            score: evaluate_position(board, self.perspective),
            best_move: None,
        }
    }
}
