use clap::Parser;
use distance_to::app_config::AppConfig;
use distance_to::app_state::{AppState, SearchError};
use distance_to::cli::Args;
use distance_to::domain::DistanceUnit;
use distance_to::geocoding::{Geocoder, NominatimGeocoder, new_client};
use distance_to::locating::origin_source;
use distance_to::report::{self, Format};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, error, info};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load(&args.config)?;
    info!("✅  Loaded configuration");

    let client = new_client(&config)?;
    let geocoder: Arc<dyn Geocoder> = Arc::new(NominatimGeocoder::new(client, &config));
    let unit = args.unit.unwrap_or(config.display().unit());

    let mut state = AppState::new();
    let source = origin_source(args.origin, args.from.as_deref(), config.location(), geocoder.clone());
    if let Err(e) = state.locate(source.as_ref()).await {
        eprintln!("{}", e.user_message());
    }

    if let Some(query) = args.query() {
        let measured = measure(&mut state, geocoder.as_ref(), &query, args.format, unit).await?;
        return Ok(if measured { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    info!("🔥 Ready, enter a place per line");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        measure(&mut state, geocoder.as_ref(), &line, args.format, unit).await?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Searches `query` and prints the result. Returns whether a distance could be reported.
async fn measure(state: &mut AppState, geocoder: &dyn Geocoder, query: &str, format: Format, unit: DistanceUnit) -> Result<bool, serde_json::Error> {
    match state.search(geocoder, query).await {
        Ok(Some(measurement)) => {
            println!("{}", report::render(&measurement, format, unit)?);
            Ok(true)
        }
        Ok(None) => Ok(false),
        Err(e) => {
            if let SearchError::OriginUnknown { place } = &e {
                if let Some(notice) = report::unmeasured_target(place, format) {
                    println!("{}", notice);
                }
            }
            error!("❌ {}", e);
            eprintln!("{}", e.user_message());
            Ok(false)
        }
    }
}
