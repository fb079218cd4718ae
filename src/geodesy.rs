//! Spherical-Earth helpers for map axes.
//!
//! Angles are in radians, distances in meters.

use std::f64::consts::{PI, TAU};

use crate::error::{Error, Result};

/// Equatorial radius of the Earth (m).
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Number of bearings sampled on a reach circle.
pub const CIRCLE_SAMPLES: usize = 180;

/// Earth central angle between a ground point and the edge of the area where a
/// satellite at altitude `sat_alt` is seen at least `elev_min` above the horizon.
///
/// Assumes a circular orbit.
///
/// # Errors
///
/// [`Error::Unsupported`] for a non-positive altitude or an elevation outside
/// `[0, π/2]`.
pub fn reach_angle(elev_min: f64, sat_alt: f64) -> Result<f64> {
    if sat_alt.is_nan() || sat_alt <= 0.0 {
        return Err(Error::Unsupported(format!("satellite altitude must be positive, got {sat_alt} m")));
    }
    if !(0.0..=PI / 2.0).contains(&elev_min) {
        return Err(Error::Unsupported(format!("minimum elevation must be in [0, pi/2], got {elev_min} rad")));
    }

    let r = EARTH_RADIUS + sat_alt;
    // slant range to the satellite at the minimum elevation
    let d_lim = (r * r - (EARTH_RADIUS * elev_min.cos()).powi(2)).sqrt() - EARTH_RADIUS * elev_min.sin();
    let cos_alpha = (EARTH_RADIUS * EARTH_RADIUS + r * r - d_lim * d_lim) / (2.0 * r * EARTH_RADIUS);

    Ok(cos_alpha.clamp(-1.0, 1.0).acos())
}

/// Point reached from `(lon, lat)` after travelling the central angle `angle`
/// along the initial `bearing` (clockwise from north).
#[must_use]
pub fn destination(center: (f64, f64), angle: f64, bearing: f64) -> (f64, f64) {
    let (lon1, lat1) = center;
    let lat2 = (lat1.sin() * angle.cos() + lat1.cos() * angle.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angle.sin() * lat1.cos()).atan2(angle.cos() - lat1.sin() * lat2.sin());
    (normalize_lon(lon2), lat2)
}

/// Small circle of central angle `angle` around `center`, sampled at
/// `n` bearings going counter-clockwise from north. The last point is not
/// repeated.
#[must_use]
pub fn small_circle(center: (f64, f64), angle: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
    (0..n)
        .map(|k| {
            let bearing = TAU * (1.0 - k as f64 / n as f64);
            destination(center, angle, bearing)
        })
        .unzip()
}

/// Wrap a longitude into `(-π, π]`.
#[must_use]
pub fn normalize_lon(lon: f64) -> f64 {
    let wrapped = (lon + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
