//! Board rendering for the Gomoku GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Pos, Side};

use super::theme::*;

/// Mapping between grid intersections and screen points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    /// Screen point of intersection (0, 0)
    pub origin: Pos2,
    /// Pixels between grid lines
    pub cell: f32,
    /// Intersections per side
    pub size: usize,
}

impl BoardGeometry {
    /// Centre a grid of `size` lines in `area`, shrinking `cell` if it does not fit.
    pub fn fit(area: Rect, size: usize, cell: f32) -> Self {
        let span = (size - 1) as f32;
        let max_cell = (area.width().min(area.height()) - cell) / span;
        let cell = cell.min(max_cell).max(1.0);
        let extent = cell * span;
        let origin = area.center() - Vec2::splat(extent / 2.0);
        Self { origin, cell, size }
    }

    /// Width of the grid between the outer lines
    pub fn extent(&self) -> f32 {
        self.cell * (self.size - 1) as f32
    }

    pub fn to_screen(&self, pos: Pos) -> Pos2 {
        self.origin + Vec2::new(pos.x as f32, pos.y as f32) * self.cell
    }

    /// Nearest intersection to `point`, or `None` off the board.
    pub fn to_board(&self, point: Pos2) -> Option<Pos> {
        let rel = (point - self.origin) / self.cell;
        let (x, y) = (rel.x.round(), rel.y.round());
        let limit = (self.size - 1) as f32;
        if (0.0..=limit).contains(&x) && (0.0..=limit).contains(&y) {
            Some(Pos::new(x as usize, y as usize))
        } else {
            None
        }
    }
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Preferred spacing from the config
    cell_size: f32,
}

impl BoardView {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Render the board and return the clicked intersection, if any
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        board: &Board,
        theme: &Theme,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        accepting_input: bool,
    ) -> Option<Pos> {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let geometry = BoardGeometry::fit(response.rect, board.size(), self.cell_size);

        let margin = geometry.cell / 2.0;
        let board_rect = Rect::from_min_size(
            geometry.origin - Vec2::splat(margin),
            Vec2::splat(geometry.extent() + 2.0 * margin),
        );
        painter.rect_filled(board_rect, CornerRadius::same(4), theme.board);

        Self::draw_grid(&painter, &geometry, theme);
        Self::draw_stones(&painter, &geometry, board, theme);

        if let Some(pos) = last_move {
            painter.circle_filled(
                geometry.to_screen(pos),
                LAST_MOVE_MARKER_RADIUS,
                LAST_MOVE_MARKER,
            );
        }

        if let Some(line) = winning_line {
            Self::draw_winning_line(&painter, &geometry, line);
        }

        if !accepting_input {
            return None;
        }

        let target = response
            .hover_pos()
            .and_then(|point| geometry.to_board(point))
            .filter(|pos| board.at(*pos).is_empty())?;

        painter.circle_filled(
            geometry.to_screen(target),
            geometry.cell * STONE_RADIUS_RATIO,
            hover_preview(theme.black),
        );

        response.clicked().then_some(target)
    }

    fn draw_grid(painter: &Painter, geometry: &BoardGeometry, theme: &Theme) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, theme.grid_line());
        let extent = geometry.extent();

        for i in 0..geometry.size {
            let offset = i as f32 * geometry.cell;

            // Vertical line
            let start = geometry.origin + Vec2::new(offset, 0.0);
            painter.line_segment([start, start + Vec2::new(0.0, extent)], stroke);

            // Horizontal line
            let start = geometry.origin + Vec2::new(0.0, offset);
            painter.line_segment([start, start + Vec2::new(extent, 0.0)], stroke);
        }
    }

    fn draw_stones(painter: &Painter, geometry: &BoardGeometry, board: &Board, theme: &Theme) {
        let radius = geometry.cell * STONE_RADIUS_RATIO;

        for (pos, side) in board.occupied() {
            let center = geometry.to_screen(pos);
            match side {
                Side::Black => {
                    painter.circle_filled(center, radius, theme.black);
                }
                Side::White => {
                    painter.circle_filled(center, radius, theme.white);
                    painter.circle_stroke(
                        center,
                        radius,
                        Stroke::new(WHITE_OUTLINE_WIDTH, theme.grid_line()),
                    );
                }
            }
        }
    }

    fn draw_winning_line(painter: &Painter, geometry: &BoardGeometry, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([geometry.to_screen(pair[0]), geometry.to_screen(pair[1])], stroke);
        }

        let radius = geometry.cell * STONE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(geometry.to_screen(*pos), radius, stroke);
        }
    }
}
