use std::collections::BTreeSet;

use crate::color::ColorMap;
use crate::data::filter::{city_options, filtered_indices, FilterSelection};
use crate::data::model::{WeatherDataset, COLUMNS};
use crate::stats::{summarize, ErrorSummary};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which view fills the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Error,
    Data,
}

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once and never mutated; every output (value boxes,
/// plots, table) is re-derived from it plus the current widget values here.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<WeatherDataset>,

    /// Current city selection and date range.
    pub filters: FilterSelection,

    /// Primary selection: which states feed the city options.
    pub states: BTreeSet<String>,

    /// City choices derived from the state selection (may be empty).
    pub city_options: Vec<String>,

    /// Indices of rows passing the current filters (recomputed each frame).
    pub visible_indices: Vec<usize>,

    /// Columns shown in the data table.
    pub columns: BTreeSet<String>,

    /// Opacity of the error-by-day plot points.
    pub alpha: f32,

    /// Active central-panel tab.
    pub active_tab: Tab,

    /// City → colour mapping for plots and sidebar labels.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filters: FilterSelection::default(),
            states: BTreeSet::new(),
            city_options: Vec::new(),
            visible_indices: Vec::new(),
            columns: BTreeSet::new(),
            alpha: 0.5,
            active_tab: Tab::Error,
            color_map: ColorMap::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and initialise every selection.
    ///
    /// The date range defaults to the full dataset; the start bound is
    /// exclusive, so it backs off one day to keep the earliest rows in view.
    pub fn set_dataset(&mut self, dataset: WeatherDataset) {
        let (first, last) = dataset.date_bounds().unwrap_or_default();
        self.filters = FilterSelection {
            cities: BTreeSet::new(),
            start: first.pred_opt().unwrap_or(first),
            end: last,
        };

        self.states = dataset.states.first().cloned().into_iter().collect();
        self.columns = COLUMNS.iter().map(|c| c.to_string()).collect();
        self.color_map = ColorMap::new(&dataset.cities);
        self.dataset = Some(dataset);
        self.status_message = None;

        self.rebuild_city_options();
        self.refilter();
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filters);
        } else {
            self.visible_indices.clear();
        }
    }

    /// Value-box summaries over the currently visible rows.
    pub fn summary(&self) -> ErrorSummary {
        match &self.dataset {
            Some(ds) => summarize(ds, &self.visible_indices),
            None => ErrorSummary::default(),
        }
    }

    /// Toggle a state in the primary selection; the city options and city
    /// selection follow.
    pub fn toggle_state(&mut self, state: &str) {
        if !self.states.remove(state) {
            self.states.insert(state.to_string());
        }
        self.rebuild_city_options();
        self.refilter();
    }

    /// Toggle a single city in the filter selection.
    pub fn toggle_city(&mut self, city: &str) {
        if !self.filters.cities.remove(city) {
            self.filters.cities.insert(city.to_string());
        }
        self.refilter();
    }

    /// Select every currently offered city.
    pub fn select_all_cities(&mut self) {
        self.filters.cities = self.city_options.iter().cloned().collect();
        self.refilter();
    }

    /// Deselect all cities (the dashboard then shows an empty view).
    pub fn select_no_cities(&mut self) {
        self.filters.cities.clear();
        self.refilter();
    }

    /// Toggle a display column for the data table.
    pub fn toggle_column(&mut self, column: &str) {
        if !self.columns.remove(column) {
            self.columns.insert(column.to_string());
        }
    }

    /// Recompute the city options from the state selection. Selections that
    /// are no longer offered are dropped; when nothing valid remains, the
    /// first option becomes the default selection.
    fn rebuild_city_options(&mut self) {
        self.city_options = match &self.dataset {
            Some(ds) => city_options(ds, &self.states),
            None => Vec::new(),
        };

        let options = &self.city_options;
        self.filters.cities.retain(|c| options.contains(c));
        if self.filters.cities.is_empty() {
            if let Some(first) = self.city_options.first() {
                self.filters.cities.insert(first.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::WeatherRow;
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, m, d).unwrap()
    }

    fn sample_dataset() -> WeatherDataset {
        WeatherDataset::from_rows(vec![
            WeatherRow::new(date(1, 5), "NY", "BUFFALO", 30.0, 28.0),
            WeatherRow::new(date(1, 15), "NY", "BUFFALO", 25.0, 26.0),
            WeatherRow::new(date(1, 25), "NY", "NEW YORK", 36.0, 36.0),
            WeatherRow::new(date(2, 10), "CO", "DENVER", 40.0, 38.0),
        ])
    }

    #[test]
    fn set_dataset_initialises_every_selection() {
        let mut state = AppState::default();
        state.set_dataset(sample_dataset());

        // First state selected, first of its cities selected by default.
        assert_eq!(state.states, BTreeSet::from(["NY".to_string()]));
        assert_eq!(state.city_options, ["BUFFALO", "NEW YORK"]);
        assert_eq!(
            state.filters.cities,
            BTreeSet::from(["BUFFALO".to_string()])
        );

        // Full date range with an exclusive start backed off one day.
        assert_eq!(state.filters.start, date(1, 4));
        assert_eq!(state.filters.end, date(2, 10));

        // All columns shown, both BUFFALO rows visible.
        assert_eq!(state.columns.len(), COLUMNS.len());
        assert_eq!(state.visible_indices, [0, 1]);
    }

    #[test]
    fn state_toggle_rebuilds_city_options() {
        let mut state = AppState::default();
        state.set_dataset(sample_dataset());

        state.toggle_state("NY"); // deselect the only state
        assert!(state.city_options.is_empty());
        assert!(state.filters.cities.is_empty());
        assert!(state.visible_indices.is_empty());

        state.toggle_state("CO");
        assert_eq!(state.city_options, ["DENVER"]);
        assert_eq!(state.filters.cities, BTreeSet::from(["DENVER".to_string()]));
        assert_eq!(state.visible_indices, [3]);
    }

    #[test]
    fn city_selection_survives_adding_a_state() {
        let mut state = AppState::default();
        state.set_dataset(sample_dataset());

        state.toggle_state("CO"); // NY + CO now selected
        assert_eq!(state.city_options, ["BUFFALO", "NEW YORK", "DENVER"]);
        assert_eq!(
            state.filters.cities,
            BTreeSet::from(["BUFFALO".to_string()])
        );
    }

    #[test]
    fn select_all_and_none_drive_the_visible_set() {
        let mut state = AppState::default();
        state.set_dataset(sample_dataset());

        state.select_all_cities();
        assert_eq!(state.visible_indices, [0, 1, 2]);

        state.select_no_cities();
        assert!(state.visible_indices.is_empty());
        assert!(state.summary().mean_error.is_nan());
    }

    #[test]
    fn summary_follows_the_worked_scenario() {
        let mut state = AppState::default();
        state.set_dataset(sample_dataset());
        state.filters.start = date(1, 1);
        state.filters.end = date(1, 20);
        state.refilter();

        let summary = state.summary();
        assert_eq!(summary.hot_days, 1);
        assert_eq!(summary.cold_days, 1);
        assert_eq!(summary.mean_error_rounded(), 0.5);
    }
}
