use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

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
// Color mapping: variable name → Color32
// ---------------------------------------------------------------------------

/// Assigns each measurement series a stable colour for every chart.
#[derive(Debug, Clone, Default)]
pub struct SeriesColors {
    mapping: BTreeMap<String, Color32>,
}

impl SeriesColors {
    /// Build the mapping from the dataset's column names (load order).
    pub fn new(names: &[&str]) -> Self {
        let palette = generate_palette(names.len());
        SeriesColors {
            mapping: names
                .iter()
                .zip(palette)
                .map(|(n, c)| (n.to_string(), c))
                .collect(),
        }
    }

    pub fn color_for(&self, name: &str) -> Color32 {
        self.mapping.get(name).copied().unwrap_or(Color32::GRAY)
    }

    /// Same colour with the given alpha, for overlaid histograms.
    pub fn translucent(&self, name: &str, alpha: u8) -> Color32 {
        let c = self.color_for(name);
        Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), alpha)
    }
}

// ---------------------------------------------------------------------------
// Diverging ramp for the correlation heatmap
// ---------------------------------------------------------------------------

/// Map a correlation coefficient in `[-1, 1]` onto an RdBu-style ramp:
/// blue for −1, white for 0, red for +1.  `NaN` renders as gray.
pub fn diverging_color(value: f64) -> Color32 {
    if value.is_nan() {
        return Color32::GRAY;
    }
    let v = value.clamp(-1.0, 1.0) as f32;

    let blue: LinSrgb = Srgb::new(0.02_f32, 0.44, 0.69).into_linear();
    let white: LinSrgb = Srgb::new(0.97_f32, 0.97, 0.97).into_linear();
    let red: LinSrgb = Srgb::new(0.79_f32, 0.0, 0.13).into_linear();

    let mixed = if v < 0.0 {
        white.mix(blue, -v)
    } else {
        white.mix(red, v)
    };
    let rgb: Srgb = Srgb::from_linear(mixed);
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Text colour that stays readable on a heatmap cell.
pub fn contrasting_text(cell: Color32) -> Color32 {
    let luma = 0.299 * cell.r() as f32 + 0.587 * cell.g() as f32 + 0.114 * cell.b() as f32;
    if luma > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(3).len(), 3);
    }

    #[test]
    fn series_colors_are_stable_and_distinct() {
        let colors = SeriesColors::new(&["a", "b", "c"]);
        assert_eq!(colors.color_for("a"), colors.color_for("a"));
        assert_ne!(colors.color_for("a"), colors.color_for("b"));
        assert_eq!(colors.color_for("unknown"), Color32::GRAY);
    }

    #[test]
    fn diverging_endpoints() {
        let lo = diverging_color(-1.0);
        let hi = diverging_color(1.0);
        let mid = diverging_color(0.0);
        assert!(lo.b() > lo.r());
        assert!(hi.r() > hi.b());
        assert!(mid.r() > 200 && mid.g() > 200 && mid.b() > 200);
        assert_eq!(diverging_color(f64::NAN), Color32::GRAY);
    }
}
