mod app;
mod color;
mod data;
mod state;
mod stats;
mod ui;

use std::path::PathBuf;

use app::DatalensApp;
use eframe::egui;
use state::AppState;

/// Dataset loaded when no path is given on the command line.
const DEFAULT_DATASET: &str = "data/measurements.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let path: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATASET.to_string())
        .into();

    // One-time load at startup; a failure is shown in the UI.
    let mut state = AppState::default();
    state.load_from_path(&path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Datalens – Data Analysis Tool",
        options,
        Box::new(|_cc| Ok(Box::new(DatalensApp::new(state)))),
    )
}
