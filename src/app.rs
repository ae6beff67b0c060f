use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WeatherApp {
    pub state: AppState,
}

impl Default for WeatherApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for WeatherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(230.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tabbed dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::tab_strip(ui, &mut self.state);
            match self.state.active_tab {
                Tab::Error => panels::error_tab(ui, &mut self.state),
                Tab::Data => table::data_table(ui, &self.state),
            }
        });
    }
}
