//! Error types for the Te grid model.

use std::path::PathBuf;
use thiserror::Error;

use crate::variant::GridVariant;

/// Errors that can occur when loading or querying the Te grid.
#[derive(Debug, Error)]
pub enum TeModelError {
    /// Data source missing or unreadable.
    #[error("failed to open grid data at {path}: {source}")]
    Io {
        /// Path of the data file that could not be opened.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while reading grid data.
    #[error("failed to read grid data: {0}")]
    Read(#[from] std::io::Error),

    /// A data line that is not three whitespace-separated numbers.
    #[error("malformed grid data at line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number in the data file.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// The file's cell count does not match the variant's raster shape.
    #[error("grid has {found} cells, expected {expected} for the {variant} variant")]
    ShapeMismatch {
        /// Number of data rows actually read.
        found: usize,
        /// rows × cols for the selected variant.
        expected: usize,
        /// The variant the file was loaded as.
        variant: GridVariant,
    },

    /// A query coordinate resolved to a cell outside the raster.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} raster")]
    OutOfRange {
        /// Resolved row index.
        row: i64,
        /// Resolved column index.
        col: i64,
        /// Raster row count.
        rows: usize,
        /// Raster column count.
        cols: usize,
    },
}

/// Result type for Te model operations.
pub type Result<T> = std::result::Result<T, TeModelError>;
