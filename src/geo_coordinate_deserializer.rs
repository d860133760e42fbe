use crate::domain::GeoCoordinate;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoCoordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        if !GeoCoordinate::is_valid_latitude(inner.latitude) {
            return Err(Error::custom(format!("invalid location latitude: {}, must be between -90 and 90", inner.latitude)));
        }

        if !GeoCoordinate::is_valid_longitude(inner.longitude) {
            return Err(Error::custom(format!("invalid location longitude: {}, must be between -180 and 180", inner.longitude)));
        }

        Ok(GeoCoordinate::new(inner.latitude, inner.longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn deserializes_a_valid_coordinate() -> Result<(), serde_json::Error> {
        let coordinate: GeoCoordinate = serde_json::from_str(r#"{ "latitude": 51.8615899, "longitude": 4.3580323 }"#)?;

        assert_eq!(coordinate, GeoCoordinate::new(51.8615899, 4.3580323));
        Ok(())
    }

    #[rstest]
    #[case(r#"{ "latitude": 91.0, "longitude": 0.0 }"#, "invalid location latitude: 91, must be between -90 and 90")]
    #[case(r#"{ "latitude": -90.5, "longitude": 0.0 }"#, "invalid location latitude: -90.5, must be between -90 and 90")]
    #[case(r#"{ "latitude": 0.0, "longitude": 180.1 }"#, "invalid location longitude: 180.1, must be between -180 and 180")]
    fn rejects_out_of_range_coordinates(#[case] json: &str, #[case] message: &str) {
        let result = serde_json::from_str::<GeoCoordinate>(json);

        let error = result.expect_err("out of range coordinate must be rejected").to_string();
        assert!(error.starts_with(message), "unexpected error: {}", error);
    }
}
