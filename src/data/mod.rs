/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → WeatherDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ WeatherDataset  │  Vec<WeatherRow>, derived error column
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  city + date-range predicate → filtered indices
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
