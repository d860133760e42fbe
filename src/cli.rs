use crate::app_config::DEFAULT_CONFIG_FILE;
use crate::domain::{DistanceUnit, GeoCoordinate};
use crate::report::Format;
use clap::Parser;

/// Great-circle distance from where you are to a place.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Place to measure the distance to. Reads one place per line from stdin when omitted.
    pub query: Vec<String>,
    /// Your position as 'latitude,longitude', overrides the configured location.
    #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true, conflicts_with = "from")]
    pub origin: Option<GeoCoordinate>,
    /// Determine your position by looking up this place instead.
    #[arg(long, value_name = "PLACE")]
    pub from: Option<String>,
    /// Primary unit of the reported distance: km or mi.
    #[arg(long)]
    pub unit: Option<DistanceUnit>,
    /// Output format: text, json or geojson.
    #[arg(long, default_value = "text")]
    pub format: Format,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The positional words joined into one query, `None` for interactive mode.
    pub fn query(&self) -> Option<String> {
        let query = self.query.join(" ");
        if query.trim().is_empty() { None } else { Some(query) }
    }
}
