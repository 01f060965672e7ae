//! Grid resolution variants of the Te model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The published resolutions of the global Te grid.
///
/// The raster shape is a fixed constant of the variant: row 0 is the
/// northernmost latitude band and column 0 the westernmost (180°W) band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GridVariant {
    /// 90 × 180 grid, 2° × 2° cells.
    Coarse,
    /// 180 × 360 grid, 1° × 1° cells.
    Fine,
    /// Same shape as [`Fine`](GridVariant::Fine), with cells biased by
    /// gravitational noise masked to NaN in the source data.
    FineMasked,
}

impl GridVariant {
    /// Number of latitude bands (raster rows).
    pub fn rows(&self) -> usize {
        match self {
            GridVariant::Coarse => 90,
            GridVariant::Fine | GridVariant::FineMasked => 180,
        }
    }

    /// Number of longitude bands (raster columns).
    pub fn cols(&self) -> usize {
        match self {
            GridVariant::Coarse => 180,
            GridVariant::Fine | GridVariant::FineMasked => 360,
        }
    }

    /// Total number of cells (= required data rows in the source file).
    pub fn cell_count(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Latitude extent of one cell in degrees.
    pub fn cell_height(&self) -> f64 {
        180.0 / self.rows() as f64
    }

    /// Longitude extent of one cell in degrees.
    pub fn cell_width(&self) -> f64 {
        360.0 / self.cols() as f64
    }

    /// Name of the variant's data file inside a data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            GridVariant::Coarse => "te_global.xyz",
            GridVariant::Fine => "te_global_1deg.xyz",
            GridVariant::FineMasked => "te_global_1deg_nobias.xyz",
        }
    }

    /// Whether this variant carries NaN for gravitationally biased cells.
    pub fn masks_biased_cells(&self) -> bool {
        matches!(self, GridVariant::FineMasked)
    }
}

impl fmt::Display for GridVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GridVariant::Coarse => "coarse",
            GridVariant::Fine => "fine",
            GridVariant::FineMasked => "fine-masked",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for GridVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "coarse" => Ok(GridVariant::Coarse),
            "fine" => Ok(GridVariant::Fine),
            "fine-masked" => Ok(GridVariant::FineMasked),
            _ => Err(format!(
                "unknown grid variant: {} (expected coarse, fine or fine-masked)",
                s
            )),
        }
    }
}
