use crate::domain::GeoCoordinate;
use crate::geocoding::Geocoder;
use crate::locating::{LocationError, LocationSource};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

/// Determines the position by geocoding a place name, e.g. the user's home town.
pub struct GeocodedLocation {
    geocoder: Arc<dyn Geocoder>,
    query: String,
}

impl GeocodedLocation {
    pub fn new(geocoder: Arc<dyn Geocoder>, query: impl Into<String>) -> Self {
        GeocodedLocation {
            geocoder,
            query: query.into(),
        }
    }
}

#[async_trait]
impl LocationSource for GeocodedLocation {
    #[instrument(skip(self))]
    async fn current_position(&self) -> Result<GeoCoordinate, LocationError> {
        info!("Locating origin '{}'...", self.query);
        let place = self.geocoder.search(&self.query).await.map_err(|e| LocationError::Unavailable(e.to_string()))?;

        info!("Locating origin '{}'... OK, {}", self.query, place.coordinate);
        Ok(place.coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Place;
    use crate::geocoding::GeocodeError;
    use pretty_assertions::assert_eq;

    struct StubGeocoder;

    #[async_trait]
    impl Geocoder for StubGeocoder {
        async fn search(&self, query: &str) -> Result<Place, GeocodeError> {
            match query {
                "London" => Ok(Place::new("London, Greater London, England, United Kingdom", GeoCoordinate::new(51.5074, -0.1278))),
                _ => Err(GeocodeError::NotFound { query: query.to_string() }),
            }
        }
    }

    #[tokio::test]
    async fn resolves_the_place_coordinate() {
        let source = GeocodedLocation::new(Arc::new(StubGeocoder), "London");

        assert_eq!(source.current_position().await, Ok(GeoCoordinate::new(51.5074, -0.1278)));
    }

    #[tokio::test]
    async fn unknown_places_are_unavailable() {
        let source = GeocodedLocation::new(Arc::new(StubGeocoder), "Atlantis");

        assert_eq!(
            source.current_position().await,
            Err(LocationError::Unavailable("no place found for 'Atlantis'".to_string()))
        );
    }
}
