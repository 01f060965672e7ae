//! Style configuration for rendering the Te grid.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MapError, Result};
use crate::projection::MapProjection;

/// How a Te map is drawn: projection, shading and level count.
///
/// Deserializable from JSON so map styling can live in a config file:
///
/// ```json
/// { "projection": "Mollweide", "colormap": "viridis", "levels": 15 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapStyle {
    /// Projection to draw on.
    #[serde(default = "default_projection")]
    pub projection: MapProjection,

    /// Color ramp name; `_r` suffix reverses the ramp.
    #[serde(default = "default_colormap")]
    pub colormap: String,

    /// Number of filled contour levels the value range is split into.
    #[serde(default = "default_levels")]
    pub levels: usize,

    /// Output image width in pixels; height follows the projection's
    /// aspect ratio.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Draw 30°/15° graticule lines over the map.
    #[serde(default = "default_graticule")]
    pub graticule: bool,
}

fn default_projection() -> MapProjection {
    MapProjection::Robinson
}

fn default_colormap() -> String {
    // Reversed Spectral is the shading the published Te maps use.
    "spectral_r".to_string()
}

fn default_levels() -> usize {
    20
}

fn default_width() -> usize {
    1024
}

fn default_graticule() -> bool {
    true
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            projection: default_projection(),
            colormap: default_colormap(),
            levels: default_levels(),
            width: default_width(),
            graticule: default_graticule(),
        }
    }
}

impl MapStyle {
    /// Parse a style from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    /// Load a style from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Check the style is renderable.
    pub fn validate(&self) -> Result<()> {
        if self.levels < 2 {
            return Err(MapError::Style(format!(
                "at least 2 contour levels required, got {}",
                self.levels
            )));
        }
        if self.width < 16 {
            return Err(MapError::Style(format!(
                "output width must be at least 16 pixels, got {}",
                self.width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = MapStyle::default();
        assert_eq!(style.projection, MapProjection::Robinson);
        assert_eq!(style.colormap, "spectral_r");
        assert_eq!(style.levels, 20);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let style = MapStyle::from_json(r#"{ "projection": "Mollweide" }"#).unwrap();
        assert_eq!(style.projection, MapProjection::Mollweide);
        assert_eq!(style.levels, 20);
        assert!(style.graticule);
    }

    #[test]
    fn test_spec_projection_identifier_in_json() {
        let style =
            MapStyle::from_json(r#"{ "projection": "Interrupted-Goode-Homolosine" }"#).unwrap();
        assert_eq!(
            style.projection,
            MapProjection::InterruptedGoodeHomolosine
        );
    }

    #[test]
    fn test_unknown_projection_fails_parse() {
        assert!(MapStyle::from_json(r#"{ "projection": "Mercator" }"#).is_err());
    }

    #[test]
    fn test_validate_rejects_degenerate_styles() {
        let style = MapStyle {
            levels: 1,
            ..MapStyle::default()
        };
        assert!(style.validate().is_err());

        let style = MapStyle {
            width: 4,
            ..MapStyle::default()
        };
        assert!(style.validate().is_err());
    }
}
