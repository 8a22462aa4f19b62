//! Evaluation module for Gomoku positions
//!
//! This module provides window scoring for board positions.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_line, evaluate_position, evaluate_window, scan_lines};
pub use patterns::{window_score, WindowScore};
