//! Search module for Gomoku AI
//!
//! Contains:
//! - Frontier move generation
//! - Minimax with alpha-beta pruning

pub mod minimax;
pub mod movegen;

pub use minimax::{SearchResult, SearchStats, Searcher, DEFAULT_SEARCH_DEPTH, INF};
pub use movegen::{get_valid_moves, has_neighbor};
