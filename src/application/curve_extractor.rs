// Curve extractor boundary - trait for the external digitization procedure
use std::path::Path;

use async_trait::async_trait;
use image::RgbImage;

use crate::domain::series::PixelSample;
use crate::error::DigitizerError;

/// Boundary to the external curve-tracing procedure.
///
/// Implementations take a preprocessed plot bitmap and return the traced
/// curve in the tracer's normalized space, ordered left-to-right along the
/// trace. When `overlay_out` is given, the tracer's rendered overlay image is
/// persisted there for inspection; failures on that side channel must not
/// affect the returned curve.
#[async_trait]
pub trait CurveExtractor: Send + Sync {
    async fn extract(
        &self,
        plot: &RgbImage,
        overlay_out: Option<&Path>,
    ) -> Result<Vec<PixelSample>, DigitizerError>;
}
