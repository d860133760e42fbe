use crate::domain::{GeoCoordinate, Place};
use crate::geocoding::GeocodeError;
use serde::Deserialize;

/// One entry of a Nominatim `/search?format=json` response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

impl TryFrom<SearchResult> for Place {
    type Error = GeocodeError;

    fn try_from(result: SearchResult) -> Result<Self, Self::Error> {
        let latitude = parse_degrees(&result.lat)?;
        let longitude = parse_degrees(&result.lon)?;

        Ok(Place::new(result.display_name, GeoCoordinate::new(latitude, longitude)))
    }
}

fn parse_degrees(value: &str) -> Result<f64, GeocodeError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|degrees| degrees.is_finite())
        .ok_or_else(|| GeocodeError::InvalidCoordinate { value: value.to_string() })
}
