// CFT chart endpoint client
use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header;

use crate::application::chart_source::ChartSource;
use crate::domain::request::StationDataRequest;

pub const DEFAULT_BASE_URL: &str = "https://www.cfr.toscana.it/ondametria/grafico_onda.php";

/// Fetches rendered chart images from the Centro Funzionale Toscana endpoint.
#[derive(Debug, Clone)]
pub struct CftChartClient {
    base_url: String,
    user_agent: String,
    client: reqwest::Client,
}

impl CftChartClient {
    pub fn new(base_url: String, user_agent: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent,
            client: reqwest::Client::new(),
        }
    }

    fn build_chart_url(&self, request: &StationDataRequest) -> String {
        format!("{}?{}", self.base_url, request.query_params())
    }
}

#[async_trait]
impl ChartSource for CftChartClient {
    async fn fetch_chart(&self, request: &StationDataRequest) -> Result<Bytes> {
        let url = self.build_chart_url(request);
        tracing::debug!(%url, "fetching chart image");

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .context("failed to send request to the chart endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("chart endpoint returned status {status} for {url}");
        }

        response
            .bytes()
            .await
            .context("failed to read chart image body")
    }
}
