// Station data request domain model
use crate::domain::graph::GraphVariant;
use crate::domain::station::Station;
use crate::domain::window::GraphWindow;

/// One request for a digitized series: which station, which quantity, which
/// time window, and whether to persist debug artifacts. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationDataRequest {
    pub station: Station,
    pub variant: GraphVariant,
    pub window: GraphWindow,
    pub debug: bool,
}

impl StationDataRequest {
    pub fn new(station: Station, variant: GraphVariant, window: GraphWindow) -> Self {
        Self {
            station,
            variant,
            window,
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// The query string the remote chart endpoint expects.
    pub fn query_params(&self) -> String {
        let params = [
            ("id", self.station.code().to_string()),
            ("begin_date", self.window.begin_date()),
            ("end_date", self.window.end_date()),
            ("type", self.variant.type_code().to_string()),
        ];
        params
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
