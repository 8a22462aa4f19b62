//! Gomoku against an automated opponent
//!
//! Usage: `gomoku [config.json]`. Set `RUST_LOG=debug` to log every move.

use gomoku::config::GameConfig;
use gomoku::ui::GomokuApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config = GameConfig::load_or_default(&path)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width as f32, config.window.height as f32])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)))),
    )?;
    Ok(())
}
