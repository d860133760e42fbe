pub mod app_config;
pub mod app_state;
pub mod cli;
pub mod domain;
mod geo_coordinate_deserializer;
pub mod geocoding;
pub mod great_circle;
pub mod locating;
pub mod report;

pub use great_circle::distance_km;
