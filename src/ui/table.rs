use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::COLUMNS;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Data tab – filtered rows with the selected display columns
// ---------------------------------------------------------------------------

/// Render the data table over the visible rows.
///
/// Columns always appear in canonical dataset order regardless of the order
/// they were toggled in; rows keep the filtered set's order.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    let columns: Vec<&str> = COLUMNS
        .iter()
        .copied()
        .filter(|c| state.columns.contains(*c))
        .collect();

    if columns.is_empty() {
        ui.label("No columns selected.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true), columns.len())
        .header(20.0, |mut header| {
            for column in &columns {
                header.col(|ui| {
                    ui.strong(*column);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let data = &dataset.rows[state.visible_indices[row.index()]];
                for column in &columns {
                    row.col(|ui| {
                        ui.label(data.column_text(column).unwrap_or_default());
                    });
                }
            });
        });
}
