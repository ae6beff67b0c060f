use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use super::filter::parse_date;
use super::model::{WeatherDataset, WeatherRow};

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while turning a flat file into a
/// [`WeatherDataset`]. Missing or misnamed columns and malformed cells fail
/// the load; there is no partial recovery.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing '{0}' column")]
    MissingColumn(&'static str),
    #[error("row {row}: invalid date '{value}'")]
    InvalidDate { row: usize, value: String },
    #[error("row {row}: '{value}' is not a number ({column})")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("parsing JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a weather dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with `date,state,city,observed_temp,forecast_temp`
/// * `.json` – records-oriented array, the default `df.to_json(orient='records')`
///
/// The derived `error` column (observed − forecast) is computed here; an
/// `error` column present in the input is ignored and recomputed.
pub fn load_file(path: &Path) -> Result<WeatherDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<WeatherDataset, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let column = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };

    let date_idx = column("date")?;
    let state_idx = column("state")?;
    let city_idx = column("city")?;
    let observed_idx = column("observed_temp")?;
    let forecast_idx = column("forecast_temp")?;

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let date = parse_date_field(field(date_idx), row_no)?;
        let observed = parse_temp_field(field(observed_idx), row_no, "observed_temp")?;
        let forecast = parse_temp_field(field(forecast_idx), row_no, "forecast_temp")?;

        rows.push(WeatherRow::new(
            date,
            field(state_idx),
            field(city_idx),
            observed,
            forecast,
        ));
    }

    Ok(WeatherDataset::from_rows(rows))
}

fn parse_date_field(s: &str, row: usize) -> Result<NaiveDate, LoadError> {
    parse_date(s).map_err(|_| LoadError::InvalidDate {
        row,
        value: s.to_string(),
    })
}

fn parse_temp_field(s: &str, row: usize, column: &'static str) -> Result<f64, LoadError> {
    s.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
        row,
        column,
        value: s.to_string(),
    })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "date": "2022-01-05",
///     "state": "NY",
///     "city": "BUFFALO",
///     "observed_temp": 30.2,
///     "forecast_temp": 28.0
///   },
///   ...
/// ]
/// ```
#[derive(Debug, Deserialize)]
struct RawRecord {
    date: NaiveDate,
    state: String,
    city: String,
    observed_temp: f64,
    forecast_temp: f64,
}

fn load_json(path: &Path) -> Result<WeatherDataset, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let records: Vec<RawRecord> = serde_json::from_str(&text)?;

    let rows = records
        .into_iter()
        .map(|r| WeatherRow::new(r.date, r.state, r.city, r.observed_temp, r.forecast_temp))
        .collect();

    Ok(WeatherDataset::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    const SAMPLE_CSV: &str = "\
date,state,city,observed_temp,forecast_temp
2022-01-05,NY,BUFFALO,30.0,28.0
2022-01-15,NY,BUFFALO,25.0,26.0
2022-01-10,CO,DENVER,40.0,38.5
";

    #[test]
    fn csv_load_derives_the_error_column() {
        let (_dir, path) = write_temp("weather.csv", SAMPLE_CSV);
        let dataset = load_file(&path).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.rows[0].error, 2.0);
        assert_eq!(dataset.rows[1].error, -1.0);
        assert_eq!(dataset.rows[2].error, 1.5);
        for row in &dataset.rows {
            assert!((row.error - (row.observed_temp - row.forecast_temp)).abs() < 1e-12);
        }
    }

    #[test]
    fn missing_column_fails_at_load_time() {
        let (_dir, path) = write_temp(
            "weather.csv",
            "date,state,city,observed_temp\n2022-01-05,NY,BUFFALO,30.0\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("forecast_temp")));
    }

    #[test]
    fn malformed_date_fails_at_load_time() {
        let (_dir, path) = write_temp(
            "weather.csv",
            "date,state,city,observed_temp,forecast_temp\nnot-a-date,NY,BUFFALO,30.0,28.0\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDate { row: 0, .. }));
    }

    #[test]
    fn non_numeric_temperature_fails_at_load_time() {
        let (_dir, path) = write_temp(
            "weather.csv",
            "date,state,city,observed_temp,forecast_temp\n2022-01-05,NY,BUFFALO,cold,28.0\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidNumber {
                row: 0,
                column: "observed_temp",
                ..
            }
        ));
    }

    #[test]
    fn input_error_column_is_recomputed() {
        let (_dir, path) = write_temp(
            "weather.csv",
            "date,state,city,observed_temp,forecast_temp,error\n2022-01-05,NY,BUFFALO,30.0,28.0,99.0\n",
        );
        let dataset = load_file(&path).unwrap();
        assert_eq!(dataset.rows[0].error, 2.0);
    }

    #[test]
    fn json_records_load_like_csv() {
        let (_dir, path) = write_temp(
            "weather.json",
            r#"[
                {"date": "2022-01-05", "state": "NY", "city": "BUFFALO",
                 "observed_temp": 30.0, "forecast_temp": 28.0},
                {"date": "2022-01-10", "state": "CO", "city": "DENVER",
                 "observed_temp": 40.0, "forecast_temp": 41.0}
            ]"#,
        );
        let dataset = load_file(&path).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.states, ["NY", "CO"]);
        assert_eq!(dataset.rows[1].error, -1.0);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let (_dir, path) = write_temp("weather.parquet", "");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension(ext) if ext == "parquet"));
    }
}
