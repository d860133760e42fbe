use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A latitude/longitude pair in degrees.
///
/// `new` accepts any value; range checks only happen where coordinates enter the application
/// (`FromStr` for command line input, `Deserialize` for configuration).
#[derive(Clone, Copy, Default, PartialEq, Debug, Serialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoCoordinate { latitude, longitude }
    }

    pub fn is_valid_latitude(latitude: f64) -> bool {
        (-90.0..=90.0).contains(&latitude)
    }

    pub fn is_valid_longitude(longitude: f64) -> bool {
        (-180.0..=180.0).contains(&longitude)
    }
}

impl Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CoordinateParseError {
    #[error("expected a coordinate as 'latitude,longitude', got '{0}'")]
    InvalidFormat(String),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    LatitudeOutOfRange(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    LongitudeOutOfRange(f64),
}

impl FromStr for GeoCoordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((latitude, longitude)) = s.split_once(',') else {
            return Err(CoordinateParseError::InvalidFormat(s.to_string()));
        };

        let latitude = parse_degrees(latitude)?;
        let longitude = parse_degrees(longitude)?;

        if !GeoCoordinate::is_valid_latitude(latitude) {
            return Err(CoordinateParseError::LatitudeOutOfRange(latitude));
        }
        if !GeoCoordinate::is_valid_longitude(longitude) {
            return Err(CoordinateParseError::LongitudeOutOfRange(longitude));
        }

        Ok(GeoCoordinate { latitude, longitude })
    }
}

fn parse_degrees(value: &str) -> Result<f64, CoordinateParseError> {
    let value = value.trim();
    value
        .parse::<f64>()
        .ok()
        .filter(|degrees| degrees.is_finite())
        .ok_or_else(|| CoordinateParseError::InvalidNumber(value.to_string()))
}
