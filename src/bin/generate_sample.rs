//! Deterministic sample-data generator: writes the `weather.csv` the
//! dashboard loads at startup. One row per city per day over Jan–Mar 2022.

use std::f64::consts::PI;

use chrono::{Duration, NaiveDate};

/// (state, city, typical January temperature in °F)
const CITIES: &[(&str, &str, f64)] = &[
    ("NY", "BUFFALO", 27.0),
    ("NY", "NEW YORK", 35.0),
    ("CO", "DENVER", 32.0),
    ("CO", "BOULDER", 30.0),
    ("CA", "SAN FRANCISCO", 52.0),
    ("CA", "LOS ANGELES", 58.0),
    ("TX", "AUSTIN", 55.0),
];

const DAYS: i64 = 90;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> anyhow::Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "weather.csv".to_string());

    let mut rng = SimpleRng::new(42);
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).expect("valid start date");

    let mut writer = csv::Writer::from_path(&output_path)?;
    writer.write_record(["date", "state", "city", "observed_temp", "forecast_temp"])?;

    let mut rows = 0u32;
    for day in 0..DAYS {
        let date = start + Duration::days(day);
        // Mid-winter dip easing off toward spring.
        let seasonal = -8.0 * (2.0 * PI * day as f64 / 365.0).cos();

        for &(state, city, base) in CITIES {
            let observed = base + seasonal + rng.gauss(0.0, 4.0);
            let forecast = observed - rng.gauss(0.0, 2.5);

            writer.write_record([
                date.format("%Y-%m-%d").to_string(),
                state.to_string(),
                city.to_string(),
                format!("{observed:.1}"),
                format!("{forecast:.1}"),
            ])?;
            rows += 1;
        }
    }

    writer.flush()?;
    println!("Wrote {rows} observations to {output_path}");
    Ok(())
}
