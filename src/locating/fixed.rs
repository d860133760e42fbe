use crate::domain::GeoCoordinate;
use crate::locating::{LocationError, LocationSource};
use async_trait::async_trait;

/// A position that never changes, read from configuration or the command line.
#[derive(Debug)]
pub struct FixedLocation(pub GeoCoordinate);

#[async_trait]
impl LocationSource for FixedLocation {
    async fn current_position(&self) -> Result<GeoCoordinate, LocationError> {
        Ok(self.0)
    }
}

/// Used when no way to determine the position is configured.
#[derive(Debug)]
pub struct NoLocation;

#[async_trait]
impl LocationSource for NoLocation {
    async fn current_position(&self) -> Result<GeoCoordinate, LocationError> {
        Err(LocationError::NotSupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn fixed_location_returns_its_coordinate() {
        let source = FixedLocation(GeoCoordinate::new(51.5074, -0.1278));

        assert_eq!(source.current_position().await, Ok(GeoCoordinate::new(51.5074, -0.1278)));
    }

    #[tokio::test]
    async fn no_location_is_not_supported() {
        assert_eq!(NoLocation.current_position().await, Err(LocationError::NotSupported));
    }
}
