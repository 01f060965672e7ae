//! Color ramps for filled-contour rendering.

use crate::error::{MapError, Result};

/// Color value in RGBA format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }
}

/// A named color ramp: evenly spaced stops with linear interpolation
/// between them.
#[derive(Debug, Clone)]
pub struct Colormap {
    stops: Vec<Color>,
}

/// ColorBrewer Spectral, 11 classes, low value first.
const SPECTRAL: [(u8, u8, u8); 11] = [
    (158, 1, 66),
    (213, 62, 79),
    (244, 109, 67),
    (253, 174, 97),
    (254, 224, 139),
    (255, 255, 191),
    (230, 245, 152),
    (171, 221, 164),
    (102, 194, 165),
    (50, 136, 189),
    (94, 79, 162),
];

/// Viridis sampled at 9 points, low value first.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

impl Colormap {
    /// Look up a ramp by name. A `_r` suffix reverses the ramp, so
    /// `spectral_r` runs red (low) to blue (high) reversed — the shading
    /// the original Te maps use.
    pub fn by_name(name: &str) -> Result<Self> {
        let lower = name.to_ascii_lowercase();
        let (base, reversed) = match lower.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (lower.as_str(), false),
        };

        let stops: &[(u8, u8, u8)] = match base {
            "spectral" => &SPECTRAL,
            "viridis" => &VIRIDIS,
            _ => return Err(MapError::InvalidColormap(name.to_string())),
        };

        let mut stops: Vec<Color> = stops
            .iter()
            .map(|&(r, g, b)| Color::opaque(r, g, b))
            .collect();
        if reversed {
            stops.reverse();
        }

        Ok(Self { stops })
    }

    /// Sample the ramp at a normalized position, clamped to [0, 1].
    pub fn sample(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let last = self.stops.len() - 1;
        let scaled = t * last as f64;
        let idx = (scaled.floor() as usize).min(last - 1);
        let frac = scaled - idx as f64;
        interpolate_color(self.stops[idx], self.stops[idx + 1], frac)
    }
}

/// Linear color interpolation.
fn interpolate_color(a: Color, b: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let lerp = |x: u8, y: u8| -> u8 { (x as f64 + (y as f64 - x as f64) * t).round() as u8 };
    Color::new(
        lerp(a.r, b.r),
        lerp(a.g, b.g),
        lerp(a.b, b.b),
        lerp(a.a, b.a),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_endpoints() {
        let cmap = Colormap::by_name("spectral").unwrap();
        assert_eq!(cmap.sample(0.0), Color::opaque(158, 1, 66));
        assert_eq!(cmap.sample(1.0), Color::opaque(94, 79, 162));

        // Out-of-range positions clamp.
        assert_eq!(cmap.sample(-0.5), cmap.sample(0.0));
        assert_eq!(cmap.sample(1.5), cmap.sample(1.0));
    }

    #[test]
    fn test_reversed_ramp() {
        let fwd = Colormap::by_name("spectral").unwrap();
        let rev = Colormap::by_name("spectral_r").unwrap();
        assert_eq!(rev.sample(0.0), fwd.sample(1.0));
        assert_eq!(rev.sample(1.0), fwd.sample(0.0));
    }

    #[test]
    fn test_name_is_case_insensitive() {
        assert!(Colormap::by_name("Spectral_R").is_ok());
        assert!(Colormap::by_name("VIRIDIS").is_ok());
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = Colormap::by_name("plasma").unwrap_err();
        assert!(matches!(err, MapError::InvalidColormap(_)));
    }

    #[test]
    fn test_interpolation_midpoint() {
        let mid = interpolate_color(Color::opaque(0, 0, 0), Color::opaque(100, 200, 50), 0.5);
        assert_eq!((mid.r, mid.g, mid.b), (50, 100, 25));
    }
}
