// Chart source boundary - trait for the upstream chart endpoint
use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::request::StationDataRequest;

/// Boundary to the upstream service that renders station charts.
#[async_trait]
pub trait ChartSource: Send + Sync {
    /// Fetch the raw encoded chart image for a request.
    async fn fetch_chart(&self, request: &StationDataRequest) -> anyhow::Result<Bytes>;
}
