//! The Te grid model: construction and point queries.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, TeModelError};
use crate::raster::TeRaster;
use crate::variant::GridVariant;

/// Default data directory, resolved relative to the process working
/// directory (typically the installation root). Callers that keep the grid
/// files elsewhere pass an explicit directory to [`TeModel::from_dir`].
pub const DEFAULT_DATA_DIR: &str = "data";

/// The global Te model at one resolution variant.
///
/// Immutable after construction: the only operations are read-only point
/// queries and raster access, so a `TeModel` can be shared across threads
/// freely.
#[derive(Debug, Clone)]
pub struct TeModel {
    variant: GridVariant,
    raster: TeRaster,
}

impl TeModel {
    /// Load the variant's data file from [`DEFAULT_DATA_DIR`].
    pub fn open(variant: GridVariant) -> Result<Self> {
        Self::from_dir(DEFAULT_DATA_DIR, variant)
    }

    /// Load the variant's data file (`variant.file_name()`) from an explicit
    /// data directory.
    pub fn from_dir(data_dir: impl AsRef<Path>, variant: GridVariant) -> Result<Self> {
        Self::from_file(data_dir.as_ref().join(variant.file_name()), variant)
    }

    /// Load a grid from a specific data file.
    pub fn from_file(path: impl AsRef<Path>, variant: GridVariant) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TeModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), %variant, "loading Te grid");
        Self::from_reader(BufReader::new(file), variant)
    }

    /// Load a grid from any buffered reader of xyz text.
    pub fn from_reader(reader: impl BufRead, variant: GridVariant) -> Result<Self> {
        let raster = TeRaster::from_xyz(reader, variant)?;
        Ok(Self { variant, raster })
    }

    /// The resolution variant this model was loaded as.
    pub fn variant(&self) -> GridVariant {
        self.variant
    }

    /// Read-only access to the full raster, for bulk consumers such as the
    /// map renderer. Not copied defensively.
    pub fn raster(&self) -> &TeRaster {
        &self.raster
    }

    /// Resolve a coordinate to its enclosing grid cell.
    ///
    /// Longitudes just past the antimeridian get exactly one wraparound
    /// correction (190° reads as -170°); inputs more than 360° outside
    /// [-180, 180] stay out of range, as do latitudes outside [-90, 90].
    /// No clamping is applied, so the returned indices can lie outside the
    /// raster; [`get_value`](TeModel::get_value) rejects those.
    ///
    /// Binning is floor-based, not nearest-center: a coordinate exactly on
    /// a cell boundary lands in the cell whose upper-left corner it is.
    pub fn resolve_index(&self, lat: f64, lon: f64) -> (i64, i64) {
        let mut lon = lon;
        if lon > 180.0 {
            lon -= 360.0;
        }
        if lon < -180.0 {
            lon += 360.0;
        }

        let row = ((90.0 - lat) / self.variant.cell_height()).floor() as i64;
        let col = ((180.0 + lon) / self.variant.cell_width()).floor() as i64;

        (row, col)
    }

    /// Te value in kilometers at a coordinate, by nearest enclosing cell.
    ///
    /// Returns NaN for cells the bias-masked variant excludes. Every call
    /// recomputes the index; there is no caching and no stored query state.
    pub fn get_value(&self, lat: f64, lon: f64) -> Result<f64> {
        let (row, col) = self.resolve_index(lat, lon);
        let (rows, cols) = (self.raster.rows(), self.raster.cols());

        if row < 0 || col < 0 || row >= rows as i64 || col >= cols as i64 {
            return Err(TeModelError::OutOfRange {
                row,
                col,
                rows,
                cols,
            });
        }

        Ok(self.raster.value_at(row as usize, col as usize))
    }
}
