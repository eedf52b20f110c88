//! Tic-tac-toe GUI
//!
//! Two players take turns clicking cells on a shared board.

use tictactoe::game::WINDOW_SIZE;
use tictactoe::ui::TicTacToeApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size([400.0, 400.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    info!("starting tic-tac-toe");
    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
}
