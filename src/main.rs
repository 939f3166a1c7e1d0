//! Renju GUI
//!
//! A graphical interface for playing Renju against the AI or another player.
//! Takes an optional path to a TOML config file (default `renju.toml`).

use std::path::PathBuf;

use renju::ui::RenjuApp;
use renju::GameConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("renju.toml"), PathBuf::from);
    let config = GameConfig::load_or_default(&path)?;
    log::info!("starting {0}x{0} board", config.board_size);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Renju"),
        ..Default::default()
    };

    eframe::run_native(
        "Renju",
        options,
        Box::new(move |cc| Ok(Box::new(RenjuApp::new(cc, config)))),
    )?;
    Ok(())
}
