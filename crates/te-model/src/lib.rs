//! Point access to the global effective elastic thickness (Te) model.
//!
//! The model is a precomputed global raster of Te values (in kilometers)
//! on a regular lat/lon grid, published in two resolutions plus a variant
//! with gravitationally biased cells masked out. This crate loads a grid
//! from its plain-text data file and answers point queries by nearest
//! enclosing cell; map rendering lives in the `te-map` crate.
//!
//! ```no_run
//! use te_model::{GridVariant, TeModel};
//!
//! let model = TeModel::from_dir("data", GridVariant::Coarse)?;
//! let te_km = model.get_value(45.5, -73.6)?;
//! println!("Te at Montreal: {} km", te_km);
//! # Ok::<(), te_model::TeModelError>(())
//! ```

pub mod error;
pub mod model;
pub mod raster;
pub mod variant;

pub use error::{Result, TeModelError};
pub use model::{TeModel, DEFAULT_DATA_DIR};
pub use raster::TeRaster;
pub use variant::GridVariant;
