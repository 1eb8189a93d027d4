//! Great-circle distance on a spherical Earth.

use super::point::CoordinatePoint;

/// Earth radius in kilometers used for the km-to-radians conversion.
pub const EARTH_RADIUS_KM: f64 = 6378.1;

/// Converts a linear distance in kilometers to an angular radius in radians.
///
/// The clustering strategies operate entirely in angular units so that no
/// per-pair km conversion is needed.
pub fn km_to_radians(km: f64) -> f64 {
    km / EARTH_RADIUS_KM
}

/// Haversine angular distance between two points, in radians.
///
/// The `asin` argument is clamped to `[-1, 1]` to absorb floating-point
/// overshoot at identical or antipodal coordinates. Identical points are
/// at distance exactly 0.
pub fn haversine(a: &CoordinatePoint, b: &CoordinatePoint) -> f64 {
    haversine_degrees(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Haversine distance between two (lat, lon) pairs given in degrees.
pub fn haversine_degrees(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);

    2.0 * h.sqrt().clamp(-1.0, 1.0).asin()
}
