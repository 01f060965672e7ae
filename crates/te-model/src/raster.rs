//! Raster storage for the Te grid.

use std::io::BufRead;

use crate::error::{Result, TeModelError};
use crate::variant::GridVariant;

/// The loaded grid: three parallel 2D arrays of equal shape.
///
/// Each array is stored as a flat row-major `Vec<f64>` with the shape held
/// alongside. Row 0 corresponds to the northernmost latitude band (the 90°N
/// edge), column 0 to the 180°W longitude band. The raster is immutable once
/// constructed; accessors hand out read-only views without copying.
#[derive(Debug, Clone)]
pub struct TeRaster {
    lons: Vec<f64>,
    lats: Vec<f64>,
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl TeRaster {
    /// Parse whitespace-delimited `longitude latitude value` text into a
    /// raster of the given variant's shape.
    ///
    /// One data line per cell, row-major in raster order. Blank lines and
    /// `#` comment lines are skipped. NaN literals (any case) become the
    /// not-a-number sentinel used by the bias-masked variant. Fails if any
    /// line does not hold exactly three numbers, or if the total cell count
    /// does not match the variant shape.
    pub fn from_xyz(reader: impl BufRead, variant: GridVariant) -> Result<Self> {
        let expected = variant.cell_count();
        let mut lons = Vec::with_capacity(expected);
        let mut lats = Vec::with_capacity(expected);
        let mut values = Vec::with_capacity(expected);

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut fields = trimmed.split_whitespace();
            let lon = parse_field(fields.next(), idx + 1, "longitude")?;
            let lat = parse_field(fields.next(), idx + 1, "latitude")?;
            let value = parse_field(fields.next(), idx + 1, "value")?;
            if fields.next().is_some() {
                return Err(TeModelError::MalformedLine {
                    line: idx + 1,
                    reason: "more than three fields".to_string(),
                });
            }

            lons.push(lon);
            lats.push(lat);
            values.push(value);
        }

        if values.len() != expected {
            return Err(TeModelError::ShapeMismatch {
                found: values.len(),
                expected,
                variant,
            });
        }

        tracing::debug!(
            rows = variant.rows(),
            cols = variant.cols(),
            masked = values.iter().filter(|v| v.is_nan()).count(),
            "loaded Te raster"
        );

        Ok(Self {
            lons,
            lats,
            values,
            rows: variant.rows(),
            cols: variant.cols(),
        })
    }

    /// Number of raster rows (latitude bands).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of raster columns (longitude bands).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell longitudes in degrees, row-major.
    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    /// Cell latitudes in degrees, row-major.
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// Te values in kilometers, row-major. Masked cells are NaN.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Te value at a cell, without bounds checking beyond slice indexing.
    pub fn value_at(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// Minimum and maximum of the finite Te values, or `None` if every
    /// cell is masked.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for &v in &self.values {
            if v.is_nan() {
                continue;
            }
            range = Some(match range {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        range
    }
}

fn parse_field(field: Option<&str>, line: usize, name: &str) -> Result<f64> {
    let raw = field.ok_or_else(|| TeModelError::MalformedLine {
        line,
        reason: format!("missing {} field", name),
    })?;
    raw.parse().map_err(|_| TeModelError::MalformedLine {
        line,
        reason: format!("invalid {}: {}", name, raw),
    })
}
