//! Mollweide projection.
//!
//! Equal-area pseudocylindrical projection mapping the globe onto a 2:1
//! ellipse. The forward transform needs the auxiliary angle θ solving
//! 2θ + sin 2θ = π sin φ, found by Newton–Raphson.

use std::f64::consts::{FRAC_PI_2, PI};

const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Half-extent of the plane: the ellipse semi-axes.
pub const EXTENT: (f64, f64) = (2.0 * SQRT_2, SQRT_2);

/// Solve 2θ + sin 2θ = π sin φ for θ.
///
/// The left side is monotone in θ with a vanishing derivative at the
/// poles, where Newton steps blow up; bisection over [-π/2, π/2] converges
/// unconditionally.
fn auxiliary_angle(lat: f64) -> f64 {
    let target = PI * lat.sin();
    let (mut lo, mut hi) = (-FRAC_PI_2, FRAC_PI_2);
    for _ in 0..64 {
        let mid = 0.5 * (lo + hi);
        if 2.0 * mid + (2.0 * mid).sin() < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// Project (degrees) to plane coordinates.
pub fn forward(lat_deg: f64, lon_deg: f64) -> (f64, f64) {
    let theta = auxiliary_angle(lat_deg.to_radians());
    let x = (2.0 * SQRT_2 / PI) * lon_deg.to_radians() * theta.cos();
    let y = SQRT_2 * theta.sin();
    (x, y)
}

/// Plane coordinates back to (lat, lon) degrees, `None` outside the
/// ellipse.
pub fn inverse(x: f64, y: f64) -> Option<(f64, f64)> {
    let sin_theta = y / SQRT_2;
    if sin_theta.abs() > 1.0 {
        return None;
    }
    let theta = sin_theta.asin();

    let sin_lat = (2.0 * theta + (2.0 * theta).sin()) / PI;
    if sin_lat.abs() > 1.0 {
        return None;
    }
    let lat = sin_lat.asin();

    let cos_theta = theta.cos();
    if cos_theta < 1e-12 {
        // Pole tip: longitude is undefined there, call it the meridian.
        return if x.abs() < 1e-9 {
            Some((lat.to_degrees(), 0.0))
        } else {
            None
        };
    }

    let lon = PI * x / (2.0 * SQRT_2 * cos_theta);
    if lon.abs() > PI + 1e-9 {
        return None;
    }

    Some((lat.to_degrees(), lon.to_degrees()))
}
