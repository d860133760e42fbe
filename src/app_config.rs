use crate::domain::{DistanceUnit, GeoCoordinate};
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "config";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    geocoder: Geocoder,
    location: Option<GeoCoordinate>,
    display: Display,
}

impl AppConfig {
    /// Loads the configuration from built-in defaults, the optional `file` and `config_local` files and
    /// `DISTANCE_TO__<SECTION>__<KEY>` environment variables, later sources taking precedence.
    pub fn load(file: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("geocoder.url", DEFAULT_GEOCODER_URL)?
            .set_default("geocoder.user_agent", concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))?
            .set_default("geocoder.timeout", "10s")?
            .set_default("geocoder.retry_ms", 250_i64)?
            .set_default("geocoder.retry_max_delay", "5s")?
            .set_default("geocoder.max_retries", 3_i64)?
            .set_default("display.unit", "kilometers")?
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("DISTANCE_TO").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn geocoder(&self) -> &Geocoder {
        &self.geocoder
    }

    pub fn location(&self) -> Option<GeoCoordinate> {
        self.location
    }

    pub fn display(&self) -> &Display {
        &self.display
    }
}

#[derive(Debug, Deserialize)]
pub struct Geocoder {
    url: String,
    user_agent: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    retry_ms: u64,
    #[serde(with = "humantime_serde")]
    retry_max_delay: Duration,
    max_retries: usize,
}

impl Geocoder {
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retry_ms(&self) -> u64 {
        self.retry_ms
    }

    pub fn retry_max_delay(&self) -> Duration {
        self.retry_max_delay
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }
}

#[derive(Debug, Deserialize)]
pub struct Display {
    unit: DistanceUnit,
}

impl Display {
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                geocoder: Geocoder {
                    url: "https://geocoder.url".to_string(),
                    user_agent: "distance-to-tests".to_string(),
                    timeout: Duration::from_secs(5),
                    retry_ms: 1,
                    retry_max_delay: Duration::from_millis(5),
                    max_retries: 2,
                },
                location: Some(GeoCoordinate::new(51.8615899, 4.3580323)),
                display: Display {
                    unit: DistanceUnit::Kilometers,
                },
            },
        }
    }

    pub fn geocoder_url(mut self, url: String) -> Self {
        self.config.geocoder.url = url;
        self
    }

    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.config.geocoder.max_retries = max_retries;
        self
    }

    pub fn location(mut self, location: Option<GeoCoordinate>) -> Self {
        self.config.location = location;
        self
    }

    pub fn unit(mut self, unit: DistanceUnit) -> Self {
        self.config.display.unit = unit;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(contents: &str) -> std::io::Result<std::path::PathBuf> {
        let path = std::env::temp_dir().join(format!("distance-to-{}-{}.toml", std::process::id(), contents.len()));
        let mut file = std::fs::File::create(&path)?;
        file.write_all(contents.as_bytes())?;
        Ok(path)
    }

    #[test]
    fn load_falls_back_to_defaults_without_a_config_file() -> Result<(), ConfigError> {
        let config = AppConfig::load("does-not-exist")?;

        assert_eq!(config.geocoder().url(), DEFAULT_GEOCODER_URL);
        assert_eq!(config.geocoder().timeout(), Duration::from_secs(10));
        assert_eq!(config.geocoder().retry_max_delay(), Duration::from_secs(5));
        assert_eq!(config.geocoder().max_retries(), 3);
        assert!(config.geocoder().user_agent().starts_with("distance-to/"));
        assert_eq!(config.display().unit(), DistanceUnit::Kilometers);
        Ok(())
    }

    #[test]
    fn load_reads_the_config_file() -> Result<(), Box<dyn std::error::Error>> {
        let path = write_config(
            r#"
[geocoder]
url = "http://localhost:8080/"
timeout = "2s 500ms"

[location]
latitude = 40.7128
longitude = -74.0060

[display]
unit = "mi"
"#,
        )?;

        let config = AppConfig::load(path.to_str().ok_or("temp path is not UTF-8")?)?;
        std::fs::remove_file(&path)?;

        assert_eq!(config.geocoder().url(), "http://localhost:8080");
        assert_eq!(config.geocoder().timeout(), Duration::from_millis(2500));
        assert_eq!(config.location(), Some(GeoCoordinate::new(40.7128, -74.006)));
        assert_eq!(config.display().unit(), DistanceUnit::Miles);
        Ok(())
    }

    #[test]
    fn load_rejects_an_out_of_range_location() -> Result<(), Box<dyn std::error::Error>> {
        let path = write_config("[location]\nlatitude = 100.0\nlongitude = 0.0\n")?;

        let result = AppConfig::load(path.to_str().ok_or("temp path is not UTF-8")?);
        std::fs::remove_file(&path)?;

        let error = result.expect_err("latitude 100 must be rejected").to_string();
        assert!(error.contains("invalid location latitude: 100"), "unexpected error: {}", error);
        Ok(())
    }
}
