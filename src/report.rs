use crate::app_state::Measurement;
use crate::domain::{DistanceUnit, Place};
use serde_json::{Value, json};
use std::str::FromStr;

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum Format {
    #[default]
    Text,
    Json,
    GeoJson,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "geojson" => Ok(Format::GeoJson),
            other => Err(format!("unknown output format '{}', expected 'text', 'json' or 'geojson'", other)),
        }
    }
}

pub fn render(measurement: &Measurement, format: Format, unit: DistanceUnit) -> Result<String, serde_json::Error> {
    match format {
        Format::Text => Ok(text(measurement, unit)),
        Format::Json => serde_json::to_string_pretty(measurement),
        Format::GeoJson => serde_json::to_string_pretty(&route_line(measurement)),
    }
}

pub fn text(measurement: &Measurement, unit: DistanceUnit) -> String {
    let other = unit.other();
    format!(
        "Your location: {}\nTarget: {}\nDistance: {:.2} {} ({:.2} {})",
        measurement.origin,
        measurement.target.name,
        measurement.distance.in_unit(unit),
        unit.symbol(),
        measurement.distance.in_unit(other),
        other.symbol()
    )
}

/// The target line shown when a place was found but no distance could be measured.
///
/// Structured formats get nothing, so their output stays a stream of complete documents.
pub fn unmeasured_target(place: &Place, format: Format) -> Option<String> {
    match format {
        Format::Text => Some(format!("Target: {}", place.name)),
        Format::Json | Format::GeoJson => None,
    }
}

/// A GeoJSON feature with the straight line from the origin to the target.
pub fn route_line(measurement: &Measurement) -> Value {
    let origin = measurement.origin;
    let target = measurement.target.coordinate;

    // GeoJSON positions are longitude first
    json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": [
                [origin.longitude, origin.latitude],
                [target.longitude, target.latitude],
            ],
        },
        "properties": {
            "name": measurement.target.name,
            "display_name": measurement.target.display_name,
            "distance_km": measurement.distance.km(),
        },
    })
}
