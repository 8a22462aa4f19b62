//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, FontId, RichText, TopBottomPanel};
use log::warn;

use crate::config::GameConfig;
use crate::game::{GameOutcome, GameSession};

use super::board_view::BoardView;
use super::fonts::install_font;
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    session: GameSession,
    board_view: BoardView,
    theme: Theme,
    font_size: f32,
    /// Last rejected move, shown until the next accepted one
    message: Option<String>,
}

impl GomokuApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &GameConfig) -> Self {
        install_font(&cc.egui_ctx, &config.font.name);

        Self {
            session: GameSession::from_config(config),
            board_view: BoardView::new(config.board.cell_size as f32),
            theme: Theme::from(&config.colors),
            font_size: config.font.size as f32,
            message: None,
        }
    }

    fn restart(&mut self) {
        self.session.reset();
        self.message = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Restart (R)").clicked() {
                    self.restart();
                }

                let label = format!("Difficulty: {} (D)", self.session.difficulty());
                if ui.button(label).clicked() {
                    self.session.cycle_difficulty();
                }

                if ui.button("Quit (Q)").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(result) = self.session.last_ai_result() {
                        ui.label(
                            RichText::new(format!("AI {} ms, {} nodes", result.time_ms, result.nodes))
                                .size(11.0)
                                .color(self.theme.text),
                        );
                    }
                });
            });
        });
    }

    /// Status line: whose turn, the result, or the last rejected move
    fn render_status(&self, ctx: &Context) {
        TopBottomPanel::bottom("status").show(ctx, |ui| {
            let (text, color) = match self.session.outcome() {
                Some(GameOutcome::Won { winner, .. }) => {
                    (format!("{winner} wins!"), self.theme.win_text)
                }
                Some(GameOutcome::Draw) => ("Draw".to_string(), self.theme.win_text),
                None => (
                    format!("Current player: {}", self.session.current_turn()),
                    self.theme.text,
                ),
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(text).font(FontId::proportional(self.font_size)).color(color));
                if let Some(msg) = &self.message {
                    ui.label(RichText::new(msg).size(self.font_size * 0.6).color(ERROR_TEXT));
                }
            });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = match self.session.outcome() {
                Some(GameOutcome::Won { line, .. }) => Some(line.as_slice()),
                _ => None,
            };

            let clicked = self.board_view.show(
                ui,
                self.session.board(),
                &self.theme,
                self.session.last_move(),
                winning_line,
                !self.session.is_over(),
            );

            if let Some(pos) = clicked {
                self.handle_click(pos.x, pos.y);
            }
        });
    }

    /// Human move, then the engine's reply in the same frame
    fn handle_click(&mut self, x: usize, y: usize) {
        match self.session.apply_human_move(x, y) {
            Ok(false) => {
                self.message = None;
                self.session.play_automated_turn();
            }
            Ok(true) => self.message = None,
            Err(err) => {
                warn!("move rejected: {err}");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (restart, difficulty, quit) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::Q),
            )
        });

        if restart {
            self.restart();
        }
        if difficulty {
            self.session.cycle_difficulty();
        }
        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_status(ctx);
        self.render_board(ctx);
    }
}
