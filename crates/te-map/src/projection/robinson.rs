//! Robinson projection.
//!
//! A compromise pseudocylindrical projection defined by a coefficient
//! table at 5° latitude intervals rather than closed-form equations.
//! Values between table rows are linearly interpolated.

use std::f64::consts::PI;

/// Parallel length multipliers at 0°, 5°, ..., 90°.
const PLEN: [f64; 19] = [
    1.0000, 0.9986, 0.9954, 0.9900, 0.9822, 0.9730, 0.9600, 0.9427, 0.9216, 0.8962, 0.8679,
    0.8350, 0.7986, 0.7597, 0.7186, 0.6732, 0.6213, 0.5722, 0.5322,
];

/// Parallel distance-from-equator multipliers at 0°, 5°, ..., 90°.
const PDFE: [f64; 19] = [
    0.0000, 0.0620, 0.1240, 0.1860, 0.2480, 0.3100, 0.3720, 0.4340, 0.4958, 0.5571, 0.6176,
    0.6769, 0.7346, 0.7903, 0.8435, 0.8936, 0.9394, 0.9761, 1.0000,
];

/// Scale applied to the parallel length (Snyder's 0.8487 R).
const X_SCALE: f64 = 0.8487;

/// Scale applied to the distance from the equator (Snyder's 1.3523 R).
const Y_SCALE: f64 = 1.3523;

/// Half-extent of the plane: x at (0°, 180°E), y at the pole.
pub const EXTENT: (f64, f64) = (X_SCALE * PI, Y_SCALE);

/// Interpolate a table column at an absolute latitude in [0, 90].
fn table_lookup(table: &[f64; 19], abs_lat: f64) -> f64 {
    let pos = abs_lat / 5.0;
    let idx = (pos.floor() as usize).min(17);
    let frac = pos - idx as f64;
    table[idx] + (table[idx + 1] - table[idx]) * frac
}

/// Project (degrees) to plane coordinates.
pub fn forward(lat_deg: f64, lon_deg: f64) -> (f64, f64) {
    let abs_lat = lat_deg.abs().min(90.0);
    let x = X_SCALE * table_lookup(&PLEN, abs_lat) * lon_deg.to_radians();
    let y = Y_SCALE * table_lookup(&PDFE, abs_lat) * lat_deg.signum();
    (x, y)
}

/// Plane coordinates back to (lat, lon) degrees, `None` outside the
/// map outline.
pub fn inverse(x: f64, y: f64) -> Option<(f64, f64)> {
    let dist = (y / Y_SCALE).abs();
    if dist > 1.0 {
        return None;
    }

    // PDFE is strictly increasing, so walk to the bracketing segment and
    // invert it linearly.
    let mut idx = 17;
    for i in 0..18 {
        if dist <= PDFE[i + 1] {
            idx = i;
            break;
        }
    }
    let frac = (dist - PDFE[idx]) / (PDFE[idx + 1] - PDFE[idx]);
    let abs_lat = 5.0 * (idx as f64 + frac);
    let lat = abs_lat * y.signum();

    let lon = (x / (X_SCALE * table_lookup(&PLEN, abs_lat))).to_degrees();
    if lon.abs() > 180.0 + 1e-9 {
        return None;
    }

    Some((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equator_and_poles() {
        let (x, y) = forward(0.0, 180.0);
        assert!((x - X_SCALE * PI).abs() < 1e-12);
        assert_eq!(y, 0.0);

        let (x, y) = forward(90.0, 0.0);
        assert_eq!(x, 0.0);
        assert!((y - Y_SCALE).abs() < 1e-12);

        let (_, y) = forward(-90.0, 0.0);
        assert!((y + Y_SCALE).abs() < 1e-12);
    }

    #[test]
    fn test_roundtrip_inside_outline() {
        for &lat in &[-80.0, -42.5, -10.0, 0.0, 17.3, 55.0, 88.0] {
            for &lon in &[-179.0, -90.0, -1.0, 0.0, 45.0, 120.0, 179.0] {
                let (x, y) = forward(lat, lon);
                let (rlat, rlon) = inverse(x, y).unwrap();
                assert!((rlat - lat).abs() < 1e-6, "lat {} -> {}", lat, rlat);
                assert!((rlon - lon).abs() < 1e-6, "lon {} -> {}", lon, rlon);
            }
        }
    }

    #[test]
    fn test_outside_outline_is_none() {
        // Above the pole.
        assert!(inverse(0.0, Y_SCALE * 1.01).is_none());
        // Off the east edge at high latitude, where parallels are short.
        let (x, _) = forward(0.0, 180.0);
        assert!(inverse(x, Y_SCALE * 0.97).is_none());
    }

    #[test]
    fn test_parallels_shrink_poleward() {
        let (x_eq, _) = forward(0.0, 100.0);
        let (x_mid, _) = forward(50.0, 100.0);
        let (x_high, _) = forward(80.0, 100.0);
        assert!(x_eq > x_mid && x_mid > x_high);
    }
}
