//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod fonts;
mod theme;

pub use app::GomokuApp;
pub use board_view::BoardGeometry;
pub use fonts::{find_font_file, install_font};
pub use theme::Theme;
