mod fixed;
mod geocoded;

use crate::domain::GeoCoordinate;
use crate::geocoding::Geocoder;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

pub use fixed::{FixedLocation, NoLocation};
pub use geocoded::GeocodedLocation;

/// Where the user is. Reading a position may take a while and may fail.
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn current_position(&self) -> Result<GeoCoordinate, LocationError>;
}

/// Failures a `LocationSource` may report. `PermissionDenied` is for sources backed by a device sensor
/// or an OS location service that the user has not granted access to.
#[derive(Error, Debug, PartialEq)]
pub enum LocationError {
    #[error("geolocation is not supported")]
    NotSupported,
    #[error("permission to read the location was denied")]
    PermissionDenied,
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

impl LocationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::NotSupported => "Geolocation is not supported.",
            LocationError::PermissionDenied | LocationError::Unavailable(_) => "Unable to retrieve your location.",
        }
    }
}

/// Picks the origin source: an explicit coordinate, then a place to geocode, then the configured location.
pub fn origin_source(
    origin: Option<GeoCoordinate>,
    from: Option<&str>,
    configured: Option<GeoCoordinate>,
    geocoder: Arc<dyn Geocoder>,
) -> Box<dyn LocationSource> {
    match (origin, from, configured) {
        (Some(coordinate), _, _) => Box::new(FixedLocation(coordinate)),
        (None, Some(place), _) => Box::new(GeocodedLocation::new(geocoder, place)),
        (None, None, Some(coordinate)) => Box::new(FixedLocation(coordinate)),
        (None, None, None) => Box::new(NoLocation),
    }
}
