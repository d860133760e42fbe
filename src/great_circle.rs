//! Great-circle distance on a spherical Earth using the haversine formula.
//!
//! The sphere approximation is off by up to roughly 0.3% against ellipsoidal models.

use crate::domain::{Distance, GeoCoordinate};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Returns the surface distance in kilometers between `origin` and `destination`.
///
/// Inputs are not range checked: out-of-range degrees still produce a finite, non-negative value.
pub fn distance_km(origin: GeoCoordinate, destination: GeoCoordinate) -> f64 {
    let d_lat = (destination.latitude - origin.latitude).to_radians();
    let d_lon = (destination.longitude - origin.longitude).to_radians();

    // Rounding can push the haversine term just past 1 for antipodal points
    let a = ((d_lat / 2.0).sin().powi(2)
        + origin.latitude.to_radians().cos() * destination.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

pub fn distance(origin: GeoCoordinate, destination: GeoCoordinate) -> Distance {
    Distance::from_km(distance_km(origin, destination))
}
