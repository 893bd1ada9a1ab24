// Digitization orchestrator - preprocess, extract, map
use std::path::PathBuf;
use std::sync::Arc;

use image::RgbImage;

use crate::application::coordinate_mapper::map_to_domain;
use crate::application::curve_extractor::CurveExtractor;
use crate::application::preprocess::prepare_plot_image;
use crate::domain::request::StationDataRequest;
use crate::domain::series::DigitizedSeries;
use crate::error::DigitizerError;

/// Runs the digitization pipeline: raw chart bytes → preprocessed plot →
/// pixel curve → domain series. Linear, no retries; the first stage error is
/// terminal and no partial result is returned.
#[derive(Clone)]
pub struct DigitizerService {
    extractor: Arc<dyn CurveExtractor>,
    debug_dir: Option<PathBuf>,
}

impl DigitizerService {
    pub fn new(extractor: Arc<dyn CurveExtractor>) -> Self {
        Self {
            extractor,
            debug_dir: None,
        }
    }

    /// Directory where debug-flagged requests persist the preprocessed plot
    /// and the tracer overlay.
    pub fn with_debug_dir(mut self, debug_dir: PathBuf) -> Self {
        self.debug_dir = Some(debug_dir);
        self
    }

    pub async fn digitize(
        &self,
        raw_image: &[u8],
        request: &StationDataRequest,
    ) -> Result<DigitizedSeries, DigitizerError> {
        let hours = request.window.hours();
        let plot = prepare_plot_image(raw_image, hours)?;
        tracing::debug!(
            station = request.station.code(),
            graph = request.variant.type_code(),
            width = plot.width(),
            height = plot.height(),
            "plot image prepared"
        );

        let overlay_out = if request.debug {
            self.persist_debug_plot(&plot, request);
            self.debug_artifact_path(request, "overlay.png")
        } else {
            None
        };

        let curve = self.extractor.extract(&plot, overlay_out.as_deref()).await?;
        tracing::debug!(points = curve.len(), "curve extracted");

        Ok(map_to_domain(&curve, request.variant, hours))
    }

    /// Debug persistence is strictly diagnostic: failures are logged and
    /// never surface into the pipeline result.
    fn persist_debug_plot(&self, plot: &RgbImage, request: &StationDataRequest) {
        let Some(path) = self.debug_artifact_path(request, "plot.png") else {
            tracing::warn!("debug requested but no debug directory is configured");
            return;
        };
        match plot.save(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "preprocessed plot persisted"),
            Err(e) => tracing::warn!(path = %path.display(), "failed to persist debug plot: {e}"),
        }
    }

    fn debug_artifact_path(&self, request: &StationDataRequest, suffix: &str) -> Option<PathBuf> {
        self.debug_dir.as_ref().map(|dir| {
            dir.join(format!(
                "{}_{}_{suffix}",
                request.station.code(),
                request.variant.type_code()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::Path;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use image::Rgb;

    use crate::domain::graph::GraphVariant;
    use crate::domain::series::PixelSample;
    use crate::domain::station::Station;
    use crate::domain::window::GraphWindow;

    struct FixedCurveExtractor {
        curve: Vec<PixelSample>,
    }

    #[async_trait]
    impl CurveExtractor for FixedCurveExtractor {
        async fn extract(
            &self,
            _plot: &RgbImage,
            _overlay_out: Option<&Path>,
        ) -> Result<Vec<PixelSample>, DigitizerError> {
            Ok(self.curve.clone())
        }
    }

    struct FailingExtractor;

    #[async_trait]
    impl CurveExtractor for FailingExtractor {
        async fn extract(
            &self,
            _plot: &RgbImage,
            _overlay_out: Option<&Path>,
        ) -> Result<Vec<PixelSample>, DigitizerError> {
            Err(DigitizerError::ExtractionFailed("tracer crashed".to_string()))
        }
    }

    fn chart_png() -> Vec<u8> {
        let image = RgbImage::from_pixel(800, 400, Rgb([255, 255, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn request() -> StationDataRequest {
        let window = GraphWindow::partial_day(NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(), 24.0)
            .unwrap();
        StationDataRequest::new(Station::BoaGorgona, GraphVariant::SignificantWaveHeight, window)
    }

    #[tokio::test]
    async fn test_digitize_maps_the_extracted_curve() {
        let extractor = Arc::new(FixedCurveExtractor {
            curve: vec![PixelSample::new(0.0, 0.5), PixelSample::new(10.0, 0.25)],
        });
        let service = DigitizerService::new(extractor);

        let series = service.digitize(&chart_png(), &request()).await.unwrap();
        assert_eq!(series.hours, vec![0.0, 24.0]);
        assert_eq!(series.values, vec![400.0, 200.0]);
    }

    #[tokio::test]
    async fn test_digitize_is_deterministic() {
        let extractor = Arc::new(FixedCurveExtractor {
            curve: vec![
                PixelSample::new(0.0, 0.1),
                PixelSample::new(5.0, 0.3),
                PixelSample::new(10.0, 0.2),
            ],
        });
        let service = DigitizerService::new(extractor);
        let raw = chart_png();

        let first = service.digitize(&raw, &request()).await.unwrap();
        let second = service.digitize(&raw, &request()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_extraction_failure_yields_no_partial_result() {
        let service = DigitizerService::new(Arc::new(FailingExtractor));
        let result = service.digitize(&chart_png(), &request()).await;
        assert!(matches!(result, Err(DigitizerError::ExtractionFailed(_))));
    }

    #[tokio::test]
    async fn test_undersized_chart_fails_before_extraction() {
        let image = RgbImage::from_pixel(800, 100, Rgb([255, 255, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let service = DigitizerService::new(Arc::new(FailingExtractor));
        let result = service.digitize(&bytes, &request()).await;
        assert!(matches!(result, Err(DigitizerError::ImageFormat(_))));
    }
}
