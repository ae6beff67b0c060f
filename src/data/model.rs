use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// WeatherRow – one row of the source table
// ---------------------------------------------------------------------------

/// Canonical column order for the table view: the five source columns plus
/// the derived `error` column.
pub const COLUMNS: [&str; 6] = [
    "date",
    "state",
    "city",
    "observed_temp",
    "forecast_temp",
    "error",
];

/// One day's observation for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRow {
    pub date: NaiveDate,
    pub state: String,
    pub city: String,
    pub observed_temp: f64,
    pub forecast_temp: f64,
    /// Derived once at load time: `observed_temp - forecast_temp`.
    pub error: f64,
}

impl WeatherRow {
    /// Build a row and derive the error column from the two temperatures.
    pub fn new(
        date: NaiveDate,
        state: impl Into<String>,
        city: impl Into<String>,
        observed_temp: f64,
        forecast_temp: f64,
    ) -> Self {
        WeatherRow {
            date,
            state: state.into(),
            city: city.into(),
            observed_temp,
            forecast_temp,
            error: observed_temp - forecast_temp,
        }
    }

    /// Display text for a named column, `None` for unknown column names.
    pub fn column_text(&self, column: &str) -> Option<String> {
        match column {
            "date" => Some(self.date.format("%Y-%m-%d").to_string()),
            "state" => Some(self.state.clone()),
            "city" => Some(self.city.clone()),
            "observed_temp" => Some(format!("{:.1}", self.observed_temp)),
            "forecast_temp" => Some(format!("{:.1}", self.forecast_temp)),
            "error" => Some(format!("{:.1}", self.error)),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// WeatherDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Loaded once and treated as read-only; every
/// view downstream works on index vectors into `rows`.
#[derive(Debug, Clone)]
pub struct WeatherDataset {
    /// All observations (rows), in file order.
    pub rows: Vec<WeatherRow>,
    /// Unique states in first-appearance order.
    pub states: Vec<String>,
    /// Unique cities in first-appearance order.
    pub cities: Vec<String>,
}

impl WeatherDataset {
    /// Build the dataset and its unique-value indices from loaded rows.
    pub fn from_rows(rows: Vec<WeatherRow>) -> Self {
        let mut states: Vec<String> = Vec::new();
        let mut cities: Vec<String> = Vec::new();

        for row in &rows {
            if !states.contains(&row.state) {
                states.push(row.state.clone());
            }
            if !cities.contains(&row.city) {
                cities.push(row.city.clone());
            }
        }

        WeatherDataset {
            rows,
            states,
            cities,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Earliest and latest observation dates, `None` for an empty dataset.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.rows.iter().map(|r| r.date).min()?;
        let last = self.rows.iter().map(|r| r.date).max()?;
        Some((first, last))
    }
}
