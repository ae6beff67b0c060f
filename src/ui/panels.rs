use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use crate::state::{AppState, Tab};
use crate::data::model::COLUMNS;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Date range ----
            ui.strong("Date");
            ui.horizontal(|ui: &mut Ui| {
                ui.add(DatePickerButton::new(&mut state.filters.start).id_salt("start_date"));
                ui.label("to");
                ui.add(DatePickerButton::new(&mut state.filters.end).id_salt("end_date"));
            });
            ui.separator();

            // ---- States (primary selection) ----
            let all_states = state
                .dataset
                .as_ref()
                .map(|ds| ds.states.clone())
                .unwrap_or_default();
            let header = format!("States  ({}/{})", state.states.len(), all_states.len());

            egui::CollapsingHeader::new(RichText::new(header).strong())
                .id_salt("states")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    for name in &all_states {
                        let mut checked = state.states.contains(name);
                        if ui.checkbox(&mut checked, name).changed() {
                            state.toggle_state(name);
                        }
                    }
                });

            // ---- Cities (options follow the state selection) ----
            let options = state.city_options.clone();
            let header = format!("Cities  ({}/{})", state.filters.cities.len(), options.len());

            egui::CollapsingHeader::new(RichText::new(header).strong())
                .id_salt("cities")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_cities();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_cities();
                        }
                    });

                    for city in &options {
                        let mut checked = state.filters.cities.contains(city);
                        let text = RichText::new(city).color(state.color_map.color_for(city));
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_city(city);
                        }
                    }
                });

            // ---- Display columns, only while the Data tab is active ----
            if state.active_tab == Tab::Data {
                ui.separator();
                egui::CollapsingHeader::new(RichText::new("Display columns").strong())
                    .id_salt("columns")
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        for column in COLUMNS {
                            let mut checked = state.columns.contains(column);
                            if ui.checkbox(&mut checked, column).changed() {
                                state.toggle_column(column);
                            }
                        }
                    });
            }
        });

    // The date pickers mutate the range in place, so derive the visible set
    // fresh every frame rather than tracking which widget changed.
    state.refilter();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} observations loaded, {} in view",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – tab strip and tab content
// ---------------------------------------------------------------------------

/// Tab strip above the central panel content.
pub fn tab_strip(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.selectable_value(&mut state.active_tab, Tab::Error, "Error");
        ui.selectable_value(&mut state.active_tab, Tab::Data, "Data");
    });
    ui.separator();
}

/// Error tab: three value boxes over the two plot cards.
pub fn error_tab(ui: &mut Ui, state: &mut AppState) {
    let summary = state.summary();

    ui.columns(3, |cols: &mut [Ui]| {
        value_box(
            &mut cols[0],
            "Hotter than forecast",
            summary.hot_days.to_string(),
        );
        value_box(
            &mut cols[1],
            "Colder than forecast",
            summary.cold_days.to_string(),
        );
        value_box(
            &mut cols[2],
            "Mean Error",
            format!("{:.2}", summary.mean_error_rounded()),
        );
    });

    ui.add_space(8.0);

    ui.columns(2, |cols: &mut [Ui]| {
        card(&mut cols[0], "Distribution", |ui| {
            plot::error_distribution(ui, state);
        });
        card(&mut cols[1], "Error by day", |ui| {
            plot::error_by_day(ui, state);
            ui.add(egui::Slider::new(&mut state.alpha, 0.0..=1.0).text("Plot Alpha"));
        });
    });
}

/// A single scalar summary in a framed box.
fn value_box(ui: &mut Ui, title: &str, value: String) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(title);
            ui.label(RichText::new(value).size(28.0).strong());
        });
    });
}

/// A framed card with a header, matching the value-box styling.
fn card(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.strong(title);
        ui.separator();
        add_contents(ui);
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open weather data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} observations from {}",
                    dataset.len(),
                    path.display()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
