//! World-map projections for rendering the global grid.
//!
//! Implemented from scratch; each projection provides a forward transform
//! (degrees to projection-plane coordinates on a unit sphere) and an
//! inverse (plane back to degrees, `None` outside the map outline). The
//! inverse is what the renderer drives: every output pixel is mapped back
//! to a coordinate and the grid queried there.

pub mod goode;
pub mod mollweide;
pub mod robinson;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MapError;

/// The supported global projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapProjection {
    Robinson,
    Mollweide,
    #[serde(rename = "Interrupted-Goode-Homolosine")]
    InterruptedGoodeHomolosine,
}

impl MapProjection {
    /// Project a coordinate (degrees) onto the plane. Plane units are
    /// sphere radii; the x axis points east, y north.
    pub fn forward(&self, lat_deg: f64, lon_deg: f64) -> (f64, f64) {
        match self {
            MapProjection::Robinson => robinson::forward(lat_deg, lon_deg),
            MapProjection::Mollweide => mollweide::forward(lat_deg, lon_deg),
            MapProjection::InterruptedGoodeHomolosine => goode::forward(lat_deg, lon_deg),
        }
    }

    /// Map a plane coordinate back to (lat, lon) in degrees, or `None`
    /// outside the projection's outline.
    pub fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        match self {
            MapProjection::Robinson => robinson::inverse(x, y),
            MapProjection::Mollweide => mollweide::inverse(x, y),
            MapProjection::InterruptedGoodeHomolosine => goode::inverse(x, y),
        }
    }

    /// Half-extent of the projection plane: (half_width, half_height).
    /// The full map fits in [-hw, hw] × [-hh, hh].
    pub fn extent(&self) -> (f64, f64) {
        match self {
            MapProjection::Robinson => robinson::EXTENT,
            MapProjection::Mollweide => mollweide::EXTENT,
            MapProjection::InterruptedGoodeHomolosine => goode::EXTENT,
        }
    }

    /// Width-to-height ratio of the full map, used to size output images.
    pub fn aspect_ratio(&self) -> f64 {
        let (hw, hh) = self.extent();
        hw / hh
    }

    /// Lowercase label used in deterministic output file names.
    pub fn file_label(&self) -> &'static str {
        match self {
            MapProjection::Robinson => "robinson",
            MapProjection::Mollweide => "mollweide",
            MapProjection::InterruptedGoodeHomolosine => "goode",
        }
    }
}

impl fmt::Display for MapProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MapProjection::Robinson => "Robinson",
            MapProjection::Mollweide => "Mollweide",
            MapProjection::InterruptedGoodeHomolosine => "Interrupted-Goode-Homolosine",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MapProjection {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "robinson" => Ok(MapProjection::Robinson),
            "mollweide" => Ok(MapProjection::Mollweide),
            // "IGH" is the shorthand the original plotting interface took.
            "interrupted-goode-homolosine" | "igh" => {
                Ok(MapProjection::InterruptedGoodeHomolosine)
            }
            _ => Err(MapError::InvalidProjection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifiers() {
        assert_eq!(
            "Robinson".parse::<MapProjection>().unwrap(),
            MapProjection::Robinson
        );
        assert_eq!(
            "mollweide".parse::<MapProjection>().unwrap(),
            MapProjection::Mollweide
        );
        assert_eq!(
            "Interrupted-Goode-Homolosine".parse::<MapProjection>().unwrap(),
            MapProjection::InterruptedGoodeHomolosine
        );
        assert_eq!(
            "IGH".parse::<MapProjection>().unwrap(),
            MapProjection::InterruptedGoodeHomolosine
        );
    }

    #[test]
    fn test_unknown_identifier_is_rejected() {
        let err = "Mercator".parse::<MapProjection>().unwrap_err();
        assert!(matches!(err, MapError::InvalidProjection(_)));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for proj in [
            MapProjection::Robinson,
            MapProjection::Mollweide,
            MapProjection::InterruptedGoodeHomolosine,
        ] {
            assert_eq!(proj.to_string().parse::<MapProjection>().unwrap(), proj);
        }
    }

    #[test]
    fn test_aspect_ratios_are_wide() {
        for proj in [
            MapProjection::Robinson,
            MapProjection::Mollweide,
            MapProjection::InterruptedGoodeHomolosine,
        ] {
            let aspect = proj.aspect_ratio();
            assert!(aspect > 1.5 && aspect < 2.5, "{}: {}", proj, aspect);
        }
    }

    #[test]
    fn test_serde_uses_spec_identifiers() {
        let json = serde_json::to_string(&MapProjection::InterruptedGoodeHomolosine).unwrap();
        assert_eq!(json, "\"Interrupted-Goode-Homolosine\"");
        let back: MapProjection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MapProjection::InterruptedGoodeHomolosine);
    }
}
