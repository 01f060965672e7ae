//! Render the coarse Te grid on all three projections.
//!
//! Expects the grid data files in ./data (see `te_model::DEFAULT_DATA_DIR`).
//!
//! Run with: cargo run --example render_global

use te_map::{save_map, MapProjection, MapStyle};
use te_model::{GridVariant, TeModel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model = TeModel::open(GridVariant::Coarse)?;

    println!(
        "loaded {} grid: {}x{} cells",
        model.variant(),
        model.raster().rows(),
        model.raster().cols()
    );
    println!("Te at Montreal: {:.1} km", model.get_value(45.5, -73.6)?);

    for projection in [
        MapProjection::Robinson,
        MapProjection::Mollweide,
        MapProjection::InterruptedGoodeHomolosine,
    ] {
        let style = MapStyle {
            projection,
            ..MapStyle::default()
        };
        let path = save_map(&model, &style, "maps")?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
