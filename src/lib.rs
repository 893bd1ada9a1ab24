//! Recovers buoy sensor time series from the rendered wave charts published
//! by Centro Funzionale Toscana.
//!
//! The service renders four quantities (significant wave height, peak
//! period, peak direction, sea temperature) as fixed-layout line charts.
//! This crate fetches a chart, crops it to the plot area, suppresses the
//! axis and gridline ink, reinforces the trace outline, hands the result to
//! an external curve tracer and maps the traced pixels back into hours and
//! physical units.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::chart_source::ChartSource;
pub use application::curve_extractor::CurveExtractor;
pub use application::digitizer_service::DigitizerService;
pub use application::station_data_service::StationDataService;
pub use domain::graph::GraphVariant;
pub use domain::request::StationDataRequest;
pub use domain::series::{DigitizedSeries, PixelSample};
pub use domain::station::Station;
pub use domain::window::GraphWindow;
pub use error::DigitizerError;
