//! Filled-contour rasterization of the Te grid onto a world map.
//!
//! Every output pixel is inverse-projected to a coordinate and the grid
//! queried there through the model's public point-query path, so the map
//! shows exactly what `get_value` answers. Values are binned into equal
//! contour levels and colored from the style's ramp; masked cells and
//! pixels outside the projection outline stay transparent.

use rayon::prelude::*;
use std::path::{Path, PathBuf};

use te_model::{GridVariant, TeModel};

use crate::colormap::{Color, Colormap};
use crate::error::{MapError, Result};
use crate::png;
use crate::projection::MapProjection;
use crate::style::MapStyle;

/// Graticule line color, close to the muted gray of the usual map grid.
const GRATICULE_COLOR: Color = Color {
    r: 96,
    g: 96,
    b: 96,
    a: 255,
};

/// A rendered RGBA map.
#[derive(Debug, Clone)]
pub struct MapImage {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl MapImage {
    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// RGBA pixel data, 4 bytes per pixel, row-major from the top.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Encode as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        png::encode(&self.pixels, self.width, self.height)
    }
}

/// Deterministic output file name for a variant/projection pair.
pub fn output_file_name(variant: GridVariant, projection: MapProjection) -> String {
    format!("te_{}_{}.png", variant, projection.file_label())
}

/// Render the model with the given style.
pub fn render_map(model: &TeModel, style: &MapStyle) -> Result<MapImage> {
    style.validate()?;
    let colormap = Colormap::by_name(&style.colormap)?;

    let (min, max) = model
        .raster()
        .value_range()
        .ok_or_else(|| MapError::Render("grid holds no finite values".to_string()))?;

    let levels = style.levels;
    let palette: Vec<Color> = (0..levels)
        .map(|bin| colormap.sample((bin as f64 + 0.5) / levels as f64))
        .collect();

    let projection = style.projection;
    let (half_w, half_h) = projection.extent();
    let width = style.width;
    let height = ((width as f64 / projection.aspect_ratio()).round() as usize).max(1);

    tracing::debug!(
        %projection,
        width,
        height,
        levels,
        value_min = min,
        value_max = max,
        "rendering Te map"
    );

    let range = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };

    let mut pixels = vec![0u8; width * height * 4];
    pixels
        .par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(py, row)| {
            let y = half_h - (py as f64 + 0.5) / height as f64 * (2.0 * half_h);
            for px in 0..width {
                let x = -half_w + (px as f64 + 0.5) / width as f64 * (2.0 * half_w);
                let Some((lat, lon)) = projection.inverse(x, y) else {
                    continue;
                };
                // The inverse hands back lon in [-180, 180] and lat in
                // [-90, 90]; fold both closed edges into the raster's
                // half-open domain rather than one past the last cell.
                let lon = if lon >= 180.0 { lon - 360.0 } else { lon };
                let lat = lat.max(-89.999);
                let Ok(value) = model.get_value(lat, lon) else {
                    continue;
                };
                if value.is_nan() {
                    continue;
                }

                let bin = (((value - min) / range * levels as f64).floor() as usize)
                    .min(levels - 1);
                let color = palette[bin];
                let offset = px * 4;
                row[offset] = color.r;
                row[offset + 1] = color.g;
                row[offset + 2] = color.b;
                row[offset + 3] = color.a;
            }
        });

    let mut image = MapImage {
        pixels,
        width,
        height,
    };

    if style.graticule {
        draw_graticule(&mut image, projection);
    }

    Ok(image)
}

/// Render and write `te_<variant>_<projection>.png` into a directory,
/// returning the path written.
pub fn save_map(model: &TeModel, style: &MapStyle, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let image = render_map(model, style)?;
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let path = dir.join(output_file_name(model.variant(), style.projection));
    std::fs::write(&path, image.to_png()?)?;
    tracing::debug!(path = %path.display(), "wrote Te map");
    Ok(path)
}

/// Draw 30° meridians and 15° parallels by forward projection.
fn draw_graticule(image: &mut MapImage, projection: MapProjection) {
    let (half_w, half_h) = projection.extent();
    let mut plot = |lat: f64, lon: f64| {
        let (x, y) = projection.forward(lat, lon);
        let px = ((x + half_w) / (2.0 * half_w) * image.width as f64).floor() as i64;
        let py = ((half_h - y) / (2.0 * half_h) * image.height as f64).floor() as i64;
        if px < 0 || py < 0 || px >= image.width as i64 || py >= image.height as i64 {
            return;
        }
        let offset = (py as usize * image.width + px as usize) * 4;
        image.pixels[offset] = GRATICULE_COLOR.r;
        image.pixels[offset + 1] = GRATICULE_COLOR.g;
        image.pixels[offset + 2] = GRATICULE_COLOR.b;
        image.pixels[offset + 3] = GRATICULE_COLOR.a;
    };

    let mut lon = -180.0;
    while lon <= 180.0 {
        let mut lat = -90.0;
        while lat <= 90.0 {
            plot(lat, lon);
            lat += 0.1;
        }
        lon += 30.0;
    }

    let mut lat = -75.0;
    while lat <= 75.0 {
        let mut lon = -180.0;
        while lon <= 180.0 {
            plot(lat, lon);
            lon += 0.1;
        }
        lat += 15.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name(GridVariant::Coarse, MapProjection::Robinson),
            "te_coarse_robinson.png"
        );
        assert_eq!(
            output_file_name(
                GridVariant::FineMasked,
                MapProjection::InterruptedGoodeHomolosine
            ),
            "te_fine-masked_goode.png"
        );
    }
}
