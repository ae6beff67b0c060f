use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: city name → Color32
// ---------------------------------------------------------------------------

/// Maps city names to distinct colours so a city keeps its colour no matter
/// which subset of cities is currently selected.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map for the given cities, in their dataset order.
    pub fn new(cities: &[String]) -> Self {
        let palette = generate_palette(cities.len());
        let mapping = cities
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        ColorMap { mapping }
    }

    /// Look up the colour for a city, gray for unknown names.
    pub fn color_for(&self, city: &str) -> Color32 {
        self.mapping.get(city).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_size_matches_request() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn cities_keep_stable_distinct_colors() {
        let cities = vec!["BUFFALO".to_string(), "DENVER".to_string()];
        let map = ColorMap::new(&cities);

        assert_ne!(map.color_for("BUFFALO"), map.color_for("DENVER"));
        assert_eq!(map.color_for("UNKNOWN"), Color32::GRAY);
    }
}
