use crate::domain::{Distance, GeoCoordinate, Place};
use crate::geocoding::{GeocodeError, Geocoder};
use crate::great_circle;
use crate::locating::{LocationError, LocationSource};
use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub enum OriginStatus {
    #[default]
    Unknown,
    Located(GeoCoordinate),
    NotSupported,
    Unavailable,
}

impl Display for OriginStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OriginStatus::Unknown => write!(f, "Locating..."),
            OriginStatus::Located(coordinate) => write!(f, "{}", coordinate),
            OriginStatus::NotSupported => write!(f, "Not Supported"),
            OriginStatus::Unavailable => write!(f, "Unavailable"),
        }
    }
}

/// The outcome of a successful search: where the user is, where the place is and how far apart they are.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Measurement {
    pub origin: GeoCoordinate,
    pub target: Place,
    pub distance: Distance,
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    #[error("origin unknown, cannot calculate the distance to '{}'", .place.name)]
    OriginUnknown { place: Place },
}

impl SearchError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::Geocode(GeocodeError::NotFound { .. }) => "Location not found. Please try again.",
            SearchError::Geocode(_) => "An error occurred while searching.",
            SearchError::OriginUnknown { .. } => "User location not found. Cannot calculate distance.",
        }
    }
}

/// Everything the application knows between searches.
#[derive(Debug, Default)]
pub struct AppState {
    origin: OriginStatus,
    target: Option<Place>,
    distance: Option<Distance>,
}

impl AppState {
    pub fn new() -> Self {
        AppState::default()
    }

    pub fn origin(&self) -> OriginStatus {
        self.origin
    }

    pub fn target(&self) -> Option<&Place> {
        self.target.as_ref()
    }

    pub fn distance(&self) -> Option<Distance> {
        self.distance
    }

    #[instrument(skip_all)]
    pub async fn locate(&mut self, source: &dyn LocationSource) -> Result<GeoCoordinate, LocationError> {
        info!("Locating...");
        match source.current_position().await {
            Ok(coordinate) => {
                self.origin = OriginStatus::Located(coordinate);
                info!("Locating... OK, {}", coordinate);
                Ok(coordinate)
            }
            Err(e) => {
                self.origin = match &e {
                    LocationError::NotSupported => OriginStatus::NotSupported,
                    LocationError::PermissionDenied | LocationError::Unavailable(_) => OriginStatus::Unavailable,
                };
                warn!("Locating... failed, {}", e);
                Err(e)
            }
        }
    }

    /// Looks up `query` and measures the distance to it from the located origin.
    ///
    /// A blank query is ignored and yields `Ok(None)`. When the origin is not located, the place is still
    /// remembered as the current target.
    #[instrument(skip(self, geocoder))]
    pub async fn search(&mut self, geocoder: &dyn Geocoder, query: &str) -> Result<Option<Measurement>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            debug!("Ignoring empty query");
            return Ok(None);
        }

        let place = geocoder.search(query).await?;
        self.target = Some(place.clone());

        let OriginStatus::Located(origin) = self.origin else {
            self.distance = None;
            return Err(SearchError::OriginUnknown { place });
        };

        let distance = great_circle::distance(origin, place.coordinate);
        self.distance = Some(distance);
        info!("Distance to '{}' is {}", place.name, distance);

        Ok(Some(Measurement {
            origin,
            target: place,
            distance,
        }))
    }
}
