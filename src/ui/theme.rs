//! Colours and sizes for the Gomoku GUI

use egui::Color32;

use crate::config::{ColorConfig, Rgb};

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(200, 40, 40);

pub fn hover_preview(side_color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(side_color.r(), side_color.g(), side_color.b(), 90)
}

// Sizes
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const WHITE_OUTLINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Configured palette, converted once at startup
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub board: Color32,
    pub black: Color32,
    pub white: Color32,
    pub text: Color32,
    pub win_text: Color32,
}

fn rgb([r, g, b]: Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}

impl From<&ColorConfig> for Theme {
    fn from(colors: &ColorConfig) -> Self {
        Self {
            board: rgb(colors.board),
            black: rgb(colors.black),
            white: rgb(colors.white),
            text: rgb(colors.text),
            win_text: rgb(colors.win_text),
        }
    }
}

impl Theme {
    /// Grid lines and the white-stone outline use the black stone colour.
    pub fn grid_line(&self) -> Color32 {
        self.black
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_default_colors() {
        let theme = Theme::from(&ColorConfig::default());
        assert_eq!(theme.board, Color32::from_rgb(220, 179, 92));
        assert_eq!(theme.white, Color32::WHITE);
        assert_eq!(theme.win_text, Color32::from_rgb(255, 0, 0));
        assert_eq!(theme.grid_line(), Color32::BLACK);
    }
}
