use crate::app_config::AppConfig;
use crate::domain::Place;
use crate::geocoding::search_result::SearchResult;
use crate::geocoding::{GeocodeError, Geocoder};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, instrument, warn};

/// Geocoder backed by a Nominatim compatible `/search` endpoint.
#[derive(Debug)]
pub struct NominatimGeocoder {
    client: Client,
    url: String,
    retry_ms: u64,
    retry_max_delay: Duration,
    max_retries: usize,
}

impl NominatimGeocoder {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        let geocoder = config.geocoder();
        NominatimGeocoder {
            client,
            url: geocoder.url().to_string(),
            retry_ms: geocoder.retry_ms(),
            retry_max_delay: geocoder.retry_max_delay(),
            max_retries: geocoder.max_retries(),
        }
    }

    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, GeocodeError> {
        let response = self
            .client
            .get(format!("{}/search", self.url))
            .query(&[("format", "json"), ("q", query)])
            .send()
            .await?
            .error_for_status()?;

        let results = response.json::<Vec<SearchResult>>().await?;
        debug!("Received {} result(s) for '{}'", results.len(), query);
        Ok(results)
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Place, GeocodeError> {
        info!("Searching for '{}'...", query);

        let strategy = ExponentialBackoff::from_millis(self.retry_ms)
            .factor(2)
            .max_delay(self.retry_max_delay)
            .map(jitter)
            .take(self.max_retries);

        let results = RetryIf::spawn(
            strategy,
            || self.fetch(query),
            |e: &GeocodeError| {
                let transient = e.is_transient();
                if transient {
                    warn!("⚠️ Geocoding error: {}. Retrying...", e);
                }
                transient
            },
        )
        .await?;

        // The first match wins, the remaining candidates are ignored
        let Some(first) = results.into_iter().next() else {
            warn!("Searching for '{}'... no results", query);
            return Err(GeocodeError::NotFound { query: query.to_string() });
        };

        let place = Place::try_from(first)?;
        info!("Searching for '{}'... OK, found '{}' at {}", query, place.name, place.coordinate);
        Ok(place)
    }
}
