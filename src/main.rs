// Main entry point - Dependency injection and a single digitization run
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use chrono::NaiveDate;

use cft_buoy_digitizer::application::digitizer_service::DigitizerService;
use cft_buoy_digitizer::application::station_data_service::StationDataService;
use cft_buoy_digitizer::domain::graph::GraphVariant;
use cft_buoy_digitizer::domain::request::StationDataRequest;
use cft_buoy_digitizer::domain::station::Station;
use cft_buoy_digitizer::domain::window::{DATE_FORMAT, GraphWindow};
use cft_buoy_digitizer::infrastructure::cft_client::CftChartClient;
use cft_buoy_digitizer::infrastructure::config::load_settings;
use cft_buoy_digitizer::infrastructure::plot_digitizer::PlotDigitizerExtractor;

const USAGE: &str =
    "usage: cft-buoy-digitizer <station> <graph-type> <begin DD/MM/YYYY> <end DD/MM/YYYY> [--debug]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let settings = load_settings()?;

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 5 {
        bail!("{USAGE}");
    }
    let station: Station = args[1].parse().map_err(anyhow::Error::msg)?;
    let variant: GraphVariant = args[2].parse().map_err(anyhow::Error::msg)?;
    let begin = NaiveDate::parse_from_str(&args[3], DATE_FORMAT)
        .with_context(|| format!("invalid begin date {:?}", args[3]))?;
    let end = NaiveDate::parse_from_str(&args[4], DATE_FORMAT)
        .with_context(|| format!("invalid end date {:?}", args[4]))?;
    let debug = args.iter().any(|arg| arg == "--debug");

    let window = GraphWindow::from_dates(begin, end)?;
    let request = StationDataRequest::new(station, variant, window).with_debug(debug);

    // Create adapters (infrastructure layer)
    let source = Arc::new(CftChartClient::new(
        settings.upstream.base_url,
        settings.upstream.user_agent,
    ));
    let extractor = Arc::new(PlotDigitizerExtractor::new(
        PathBuf::from(settings.extractor.binary),
        Duration::from_secs(settings.extractor.timeout_secs),
    ));

    // Create services (application layer)
    let mut digitizer = DigitizerService::new(extractor);
    if let Some(debug_dir) = settings.debug_dir {
        digitizer = digitizer.with_debug_dir(PathBuf::from(debug_dir));
    }
    let service = StationDataService::new(source, digitizer);

    let series = service.get_station_data(&request).await?;
    tracing::info!(
        station = request.station.name(),
        unit = request.variant.unit(),
        points = series.len(),
        "series digitized"
    );

    println!("{}", serde_json::to_string_pretty(&series)?);

    Ok(())
}
