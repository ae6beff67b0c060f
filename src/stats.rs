//! Summary reductions over the filtered dataset.
//!
//! Everything here is a pure function of the base table plus a set of row
//! indices; nothing is cached. Empty inputs follow float semantics: the
//! mean of zero rows is NaN and display code tolerates it.

use crate::data::model::WeatherDataset;

// ---------------------------------------------------------------------------
// Value-box summaries
// ---------------------------------------------------------------------------

/// Scalar summaries shown in the value boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorSummary {
    pub count: usize,
    /// Days where the observed temperature beat the forecast (`error > 0`).
    pub hot_days: usize,
    /// Days colder than forecast (`error < 0`).
    pub cold_days: usize,
    pub mean_error: f64,
}

impl Default for ErrorSummary {
    fn default() -> Self {
        ErrorSummary {
            count: 0,
            hot_days: 0,
            cold_days: 0,
            mean_error: f64::NAN,
        }
    }
}

impl ErrorSummary {
    /// Mean error rounded to 2 decimal places (display policy).
    pub fn mean_error_rounded(&self) -> f64 {
        (self.mean_error * 100.0).round() / 100.0
    }
}

/// Reduce the rows at `indices` to their value-box summaries.
pub fn summarize(dataset: &WeatherDataset, indices: &[usize]) -> ErrorSummary {
    if indices.is_empty() {
        return ErrorSummary::default();
    }

    let mut hot_days = 0;
    let mut cold_days = 0;
    let mut sum = 0.0;

    for &i in indices {
        let error = dataset.rows[i].error;
        if error > 0.0 {
            hot_days += 1;
        } else if error < 0.0 {
            cold_days += 1;
        }
        sum += error;
    }

    ErrorSummary {
        count: indices.len(),
        hot_days,
        cold_days,
        mean_error: sum / indices.len() as f64,
    }
}

// ---------------------------------------------------------------------------
// Histogram binning for the distribution plot
// ---------------------------------------------------------------------------

/// Equal-width histogram: bar centers with counts, plus the bin width the
/// plot needs for bar sizing.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bars: Vec<(f64, usize)>,
    pub bin_width: f64,
}

/// Bin `values` into `bins` equal-width buckets over their observed range.
///
/// Empty input yields an empty histogram. A degenerate range (all values
/// equal) collapses into a single bar holding everything.
pub fn error_histogram(values: &[f64], bins: usize) -> Histogram {
    if values.is_empty() || bins == 0 {
        return Histogram {
            bars: Vec::new(),
            bin_width: 1.0,
        };
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range.abs() < f64::EPSILON {
        return Histogram {
            bars: vec![(min, values.len())],
            bin_width: 1.0,
        };
    }

    let bin_width = range / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / bin_width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let bars = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| (min + (i as f64 + 0.5) * bin_width, count))
        .collect();

    Histogram { bars, bin_width }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::WeatherRow;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, d).unwrap()
    }

    /// Errors [2, -1]: the worked scenario after filtering to (01-01, 01-20].
    fn filtered_scenario() -> WeatherDataset {
        WeatherDataset::from_rows(vec![
            WeatherRow::new(date(5), "NY", "BUFFALO", 30.0, 28.0),
            WeatherRow::new(date(15), "NY", "BUFFALO", 25.0, 26.0),
        ])
    }

    #[test]
    fn worked_scenario_summary() {
        let dataset = filtered_scenario();
        let summary = summarize(&dataset, &[0, 1]);

        assert_eq!(summary.count, 2);
        assert_eq!(summary.hot_days, 1);
        assert_eq!(summary.cold_days, 1);
        assert_eq!(summary.mean_error_rounded(), 0.5);
    }

    #[test]
    fn zero_error_days_count_as_neither_hot_nor_cold() {
        let dataset = WeatherDataset::from_rows(vec![WeatherRow::new(
            date(7),
            "NY",
            "BUFFALO",
            20.0,
            20.0,
        )]);
        let summary = summarize(&dataset, &[0]);

        assert_eq!(summary.hot_days, 0);
        assert_eq!(summary.cold_days, 0);
        assert_eq!(summary.mean_error, 0.0);
    }

    #[test]
    fn empty_selection_yields_nan_mean_and_zero_counts() {
        let dataset = filtered_scenario();
        let summary = summarize(&dataset, &[]);

        assert_eq!(summary.count, 0);
        assert_eq!(summary.hot_days, 0);
        assert_eq!(summary.cold_days, 0);
        assert!(summary.mean_error.is_nan());
        assert!(summary.mean_error_rounded().is_nan());
    }

    #[test]
    fn rounding_is_to_two_decimals() {
        let summary = ErrorSummary {
            count: 3,
            hot_days: 2,
            cold_days: 1,
            mean_error: 1.0 / 3.0,
        };
        assert_eq!(summary.mean_error_rounded(), 0.33);
    }

    #[test]
    fn histogram_counts_every_value_once() {
        let values = [-2.0, -1.0, 0.0, 1.0, 2.0, 2.0];
        let hist = error_histogram(&values, 4);

        assert_eq!(hist.bars.len(), 4);
        let total: usize = hist.bars.iter().map(|&(_, c)| c).sum();
        assert_eq!(total, values.len());
        assert!((hist.bin_width - 1.0).abs() < 1e-12);
    }

    #[test]
    fn histogram_handles_degenerate_input() {
        assert!(error_histogram(&[], 10).bars.is_empty());

        let constant = error_histogram(&[1.5, 1.5, 1.5], 10);
        assert_eq!(constant.bars, vec![(1.5, 3)]);
    }
}
