//! World-map rendering for the global Te grid.
//!
//! Consumes a [`te_model::TeModel`] through its public query interface and
//! produces filled-contour PNG maps on one of three global projections:
//! Robinson, Mollweide or the interrupted Goode homolosine.
//!
//! ```no_run
//! use te_map::{save_map, MapStyle};
//! use te_model::{GridVariant, TeModel};
//!
//! let model = TeModel::open(GridVariant::Coarse)?;
//! let path = save_map(&model, &MapStyle::default(), "maps")?;
//! println!("wrote {}", path.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod colormap;
pub mod error;
pub mod png;
pub mod projection;
pub mod render;
pub mod style;

pub use colormap::{Color, Colormap};
pub use error::{MapError, Result};
pub use projection::MapProjection;
pub use render::{output_file_name, render_map, save_map, MapImage};
pub use style::MapStyle;
