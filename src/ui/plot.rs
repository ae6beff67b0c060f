use chrono::{Datelike, NaiveDate};
use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::state::AppState;
use crate::stats;

/// Bin count for the error distribution.
const HISTOGRAM_BINS: usize = 20;

// ---------------------------------------------------------------------------
// Distribution plot
// ---------------------------------------------------------------------------

/// Histogram of the forecast error over the visible rows.
pub fn error_distribution(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.label("No data.");
        return;
    };

    let errors: Vec<f64> = state
        .visible_indices
        .iter()
        .map(|&i| dataset.rows[i].error)
        .collect();
    let hist = stats::error_histogram(&errors, HISTOGRAM_BINS);

    let bars: Vec<Bar> = hist
        .bars
        .iter()
        .map(|&(center, count)| Bar::new(center, count as f64).width(hist.bin_width))
        .collect();

    Plot::new("error_distribution")
        .height(260.0)
        .x_axis_label("Forecast error (°F)")
        .y_axis_label("Days")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(Color32::LIGHT_BLUE));
        });
}

// ---------------------------------------------------------------------------
// Error-by-day plot
// ---------------------------------------------------------------------------

/// Per-day error scatter, one series per selected city, with the opacity
/// taken from the alpha slider.
pub fn error_by_day(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.label("No data.");
        return;
    };

    Plot::new("error_by_day")
        .height(240.0)
        .legend(Legend::default())
        .x_axis_label("Date")
        .y_axis_label("Forecast error (°F)")
        .x_axis_formatter(|mark, _range| {
            NaiveDate::from_num_days_from_ce_opt(mark.value as i32)
                .map(|d| d.format("%b %d").to_string())
                .unwrap_or_default()
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            // Iterate the option list so series order and colours stay stable.
            for city in &state.city_options {
                if !state.filters.cities.contains(city) {
                    continue;
                }

                let points: PlotPoints = state
                    .visible_indices
                    .iter()
                    .map(|&i| &dataset.rows[i])
                    .filter(|row| row.city == *city)
                    .map(|row| [row.date.num_days_from_ce() as f64, row.error])
                    .collect();

                let color = state.color_map.color_for(city).gamma_multiply(state.alpha);
                plot_ui.points(Points::new(points).name(city).color(color).radius(3.0));
            }
        });
}
