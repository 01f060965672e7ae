//! Error types for map rendering.

use thiserror::Error;

/// Errors that can occur when rendering the Te grid to a map image.
#[derive(Debug, Error)]
pub enum MapError {
    /// Unrecognized projection identifier.
    #[error("unknown projection: {0} (expected Robinson, Mollweide or Interrupted-Goode-Homolosine)")]
    InvalidProjection(String),

    /// Unrecognized colormap name.
    #[error("unknown colormap: {0} (expected spectral or viridis, optionally with a _r suffix)")]
    InvalidColormap(String),

    /// Invalid style configuration.
    #[error("invalid map style: {0}")]
    Style(String),

    /// Rendering produced no drawable data.
    #[error("rendering failed: {0}")]
    Render(String),

    /// PNG encoding failure.
    #[error("PNG encoding failed: {0}")]
    Png(String),

    /// I/O error writing the output image.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        MapError::Style(err.to_string())
    }
}

/// Result type for map rendering operations.
pub type Result<T> = std::result::Result<T, MapError>;
