mod client;
mod nominatim;
mod search_result;

use crate::domain::Place;
use async_trait::async_trait;
use thiserror::Error;

pub use client::{GeocoderClientError, new_client};
pub use nominatim::NominatimGeocoder;

/// Resolves a free-text place name into its first matching place.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn search(&self, query: &str) -> Result<Place, GeocodeError>;
}

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("no place found for '{query}'")]
    NotFound { query: String },
    #[error("geocoder returned an invalid coordinate '{value}'")]
    InvalidCoordinate { value: String },
}

impl GeocodeError {
    /// Whether repeating the same request could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            GeocodeError::RequestError(e) => {
                if e.is_timeout() || e.is_connect() {
                    return true;
                }
                e.status().is_some_and(|status| status.is_server_error() || status.as_u16() == 429)
            }
            GeocodeError::NotFound { .. } | GeocodeError::InvalidCoordinate { .. } => false,
        }
    }
}
