//! Interrupted Goode homolosine projection.
//!
//! Equal-area composite: sinusoidal equatorward of 40°44'11.8" and
//! Mollweide poleward, glued at that latitude by a constant y offset. The
//! globe is split into the standard six lobes (two northern, four
//! southern), each projected about its own central meridian.

use std::f64::consts::PI;

use super::mollweide;

const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Latitude where sinusoidal and Mollweide meet: 40°44'11.8".
const JOIN_LAT: f64 = 0.710_987_989_993;

/// Offset subtracted from Mollweide y so the pieces meet at the join
/// latitude.
const Y_OFFSET: f64 = 0.052_803_527_368;

/// Half-extent of the plane: x spans ±180° at the equator, y peaks at the
/// offset Mollweide pole.
pub const EXTENT: (f64, f64) = (PI, SQRT_2 - Y_OFFSET);

/// One lobe: its longitude span and central meridian, all in radians.
struct Lobe {
    west: f64,
    east: f64,
    center: f64,
    northern: bool,
}

/// The standard interruption scheme: continents kept whole, oceans split.
static LOBES: [Lobe; 6] = [
    // Northern lobes.
    Lobe { west: -PI, east: -40.0 * DEG, center: -100.0 * DEG, northern: true },
    Lobe { west: -40.0 * DEG, east: PI, center: 30.0 * DEG, northern: true },
    // Southern lobes.
    Lobe { west: -PI, east: -100.0 * DEG, center: -160.0 * DEG, northern: false },
    Lobe { west: -100.0 * DEG, east: -20.0 * DEG, center: -60.0 * DEG, northern: false },
    Lobe { west: -20.0 * DEG, east: 80.0 * DEG, center: 20.0 * DEG, northern: false },
    Lobe { west: 80.0 * DEG, east: PI, center: 140.0 * DEG, northern: false },
];

const DEG: f64 = PI / 180.0;

fn lobe_for(lat: f64, lon: f64) -> &'static Lobe {
    let northern = lat >= 0.0;
    LOBES
        .iter()
        .filter(|l| l.northern == northern)
        .find(|l| lon < l.east)
        .unwrap_or_else(|| {
            // lon == π falls through the strict comparison; it belongs to
            // the easternmost lobe of the hemisphere.
            if northern {
                &LOBES[1]
            } else {
                &LOBES[5]
            }
        })
}

/// Project (degrees) to plane coordinates.
pub fn forward(lat_deg: f64, lon_deg: f64) -> (f64, f64) {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    let lobe = lobe_for(lat, lon);
    let dlon = lon - lobe.center;

    if lat.abs() <= JOIN_LAT {
        // Sinusoidal piece.
        (lobe.center + dlon * lat.cos(), lat)
    } else {
        // Mollweide piece, shifted to meet the sinusoidal at the join.
        let (mx, my) = mollweide::forward(lat_deg, dlon.to_degrees());
        (lobe.center + mx, my - Y_OFFSET * lat.signum())
    }
}

/// Plane coordinates back to (lat, lon) degrees, `None` in the
/// interruption gaps or outside the outline.
pub fn inverse(x: f64, y: f64) -> Option<(f64, f64)> {
    if x.abs() > PI || y.abs() > EXTENT.1 + 1e-12 {
        return None;
    }

    let northern = y >= 0.0;
    let candidates = LOBES.iter().filter(|l| l.northern == northern);

    if y.abs() <= JOIN_LAT {
        // Sinusoidal band.
        let lat = y;
        for lobe in candidates {
            let lon = lobe.center + (x - lobe.center) / lat.cos();
            if lon >= lobe.west - 1e-9 && lon <= lobe.east + 1e-9 {
                return Some((lat.to_degrees(), lon.to_degrees().clamp(-180.0, 180.0)));
            }
        }
        None
    } else {
        // Mollweide cap.
        let my = (y.abs() + Y_OFFSET) * y.signum();
        for lobe in candidates {
            if let Some((lat, dlon)) = mollweide::inverse(x - lobe.center, my) {
                let lon = lobe.center + dlon.to_radians();
                if lon >= lobe.west - 1e-9 && lon <= lobe.east + 1e-9 {
                    return Some((lat, lon.to_degrees().clamp(-180.0, 180.0)));
                }
            }
        }
        None
    }
}
