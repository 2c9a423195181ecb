use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn series_palette(n: usize) -> Vec<RGBColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            // Slightly dark so thin lines stay readable on white.
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length_and_distinct_entries() {
        let colors = series_palette(8);
        assert_eq!(colors.len(), 8);
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert_ne!(
                    (colors[i].0, colors[i].1, colors[i].2),
                    (colors[j].0, colors[j].1, colors[j].2),
                    "colours {i} and {j} collide"
                );
            }
        }
    }

    #[test]
    fn empty_palette() {
        assert!(series_palette(0).is_empty());
    }
}
