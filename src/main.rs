mod app;
mod color;
mod data;
mod state;
mod stats;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::WeatherApp;
use data::model::WeatherDataset;
use eframe::egui;

/// Dataset loaded at startup when no path argument is given.
const DEFAULT_DATA_FILE: &str = "weather.csv";

/// Load the startup dataset from the first CLI argument (or the default
/// path). A missing file is not an error: the dashboard starts empty and
/// File → Open… stays available.
fn startup_dataset() -> anyhow::Result<Option<WeatherDataset>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
    let path = Path::new(&path);

    if !path.exists() {
        log::warn!(
            "{} not found, starting without data (File → Open…)",
            path.display()
        );
        return Ok(None);
    }

    let dataset = data::loader::load_file(path)
        .with_context(|| format!("loading {}", path.display()))?;
    if dataset.is_empty() {
        log::warn!("{} contains no rows", path.display());
    }
    log::info!(
        "Loaded {} observations from {}",
        dataset.len(),
        path.display()
    );
    Ok(Some(dataset))
}

fn main() -> eframe::Result {
    env_logger::init();

    let mut weather_app = WeatherApp::default();
    match startup_dataset() {
        Ok(Some(dataset)) => weather_app.state.set_dataset(dataset),
        Ok(None) => {}
        Err(e) => {
            log::error!("{e:#}");
            weather_app.state.status_message = Some(format!("Error: {e:#}"));
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Weathervane – Forecast Error Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(weather_app))),
    )
}
