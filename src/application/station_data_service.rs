// Station data service - fetch a chart and digitize it
use std::sync::Arc;

use anyhow::Context;

use crate::application::chart_source::ChartSource;
use crate::application::digitizer_service::DigitizerService;
use crate::domain::request::StationDataRequest;
use crate::domain::series::DigitizedSeries;

/// Use case composing the upstream chart fetch with the digitization
/// pipeline. Each call is an isolated run; issuing several concurrently
/// (e.g. one per graph variant) is fine.
#[derive(Clone)]
pub struct StationDataService {
    source: Arc<dyn ChartSource>,
    digitizer: DigitizerService,
}

impl StationDataService {
    pub fn new(source: Arc<dyn ChartSource>, digitizer: DigitizerService) -> Self {
        Self { source, digitizer }
    }

    pub async fn get_station_data(
        &self,
        request: &StationDataRequest,
    ) -> anyhow::Result<DigitizedSeries> {
        let raw_image = self
            .source
            .fetch_chart(request)
            .await
            .context("failed to fetch chart image")?;
        tracing::debug!(bytes = raw_image.len(), "chart image fetched");

        let series = self.digitizer.digitize(&raw_image, request).await?;
        Ok(series)
    }
}
