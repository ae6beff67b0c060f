use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::model::WeatherDataset;

// ---------------------------------------------------------------------------
// Filter predicate: selected cities + date range
// ---------------------------------------------------------------------------

/// The rows the dashboard is currently looking at: a set of selected city
/// names and a date range. The range is open at the start and closed at the
/// end, i.e. a row passes when `start < date <= end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub cities: BTreeSet<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for FilterSelection {
    fn default() -> Self {
        FilterSelection {
            cities: BTreeSet::new(),
            start: NaiveDate::default(),
            end: NaiveDate::default(),
        }
    }
}

impl FilterSelection {
    /// Build a selection from ISO date strings, propagating parse failures.
    pub fn parse<I, S>(cities: I, start: &str, end: &str) -> Result<Self, chrono::ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(FilterSelection {
            cities: cities.into_iter().map(Into::into).collect(),
            start: parse_date(start)?,
            end: parse_date(end)?,
        })
    }
}

/// Parse an ISO `YYYY-MM-DD` date. Malformed input fails the call rather
/// than being coerced.
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
}

/// Return indices of rows that pass the current selection, in dataset order.
///
/// A row passes when:
/// * its city is in the selected set (an empty set selects nothing), and
/// * its date lies in `(start, end]`.
///
/// Pure and deterministic: identical inputs always yield the same indices,
/// and the dataset is never mutated.
pub fn filtered_indices(dataset: &WeatherDataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            selection.cities.contains(&row.city)
                && row.date > selection.start
                && row.date <= selection.end
        })
        .map(|(i, _)| i)
        .collect()
}

/// City choices for the current state selection, deduplicated in
/// first-appearance order.
///
/// A selection matching zero rows yields an empty list; callers treat that
/// as a valid state with no default selection.
pub fn city_options(dataset: &WeatherDataset, states: &BTreeSet<String>) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for row in &dataset.rows {
        if states.contains(&row.state) && !options.contains(&row.city) {
            options.push(row.city.clone());
        }
    }
    options
}
