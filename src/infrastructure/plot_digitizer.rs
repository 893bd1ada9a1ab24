// plotdigitizer subprocess adapter
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use image::RgbImage;
use tempfile::{Builder, NamedTempFile};
use tokio::process::Command;

use crate::application::curve_extractor::CurveExtractor;
use crate::domain::series::PixelSample;
use crate::error::DigitizerError;

/// Curve extractor backed by the `plotdigitizer` command-line tool.
///
/// The handshake goes through three transient files: the staged plot bitmap,
/// the traced data file and the rendered overlay. All three are acquired
/// right before the invocation and deleted on every exit path, including
/// failures. The invocation itself is bounded by a timeout; an unbounded
/// external process is an availability risk.
pub struct PlotDigitizerExtractor {
    binary: PathBuf,
    timeout: Duration,
}

impl PlotDigitizerExtractor {
    pub fn new(binary: PathBuf, timeout: Duration) -> Self {
        Self { binary, timeout }
    }

    fn temp_artifact(suffix: &str) -> Result<NamedTempFile, DigitizerError> {
        Builder::new().suffix(suffix).tempfile().map_err(|e| {
            DigitizerError::ExtractionFailed(format!("failed to create temp artifact: {e}"))
        })
    }
}

#[async_trait]
impl CurveExtractor for PlotDigitizerExtractor {
    async fn extract(
        &self,
        plot: &RgbImage,
        overlay_out: Option<&Path>,
    ) -> Result<Vec<PixelSample>, DigitizerError> {
        let plot_file = Self::temp_artifact(".png")?;
        let data_file = Self::temp_artifact(".csv")?;
        let overlay_file = Self::temp_artifact(".png")?;

        plot.save(plot_file.path()).map_err(|e| {
            DigitizerError::ExtractionFailed(format!("failed to stage plot image: {e}"))
        })?;

        let (width, height) = plot.dimensions();
        let mut command = Command::new(&self.binary);
        command
            .arg(plot_file.path())
            .args(calibration_args(width, height))
            .arg("--output")
            .arg(data_file.path())
            .arg("--plot")
            .arg(overlay_file.path())
            .kill_on_drop(true);

        tracing::debug!(binary = %self.binary.display(), width, height, "invoking curve tracer");
        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| {
                DigitizerError::ExtractionFailed(format!(
                    "curve tracer exceeded the {}s timeout",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| {
                DigitizerError::ExtractionFailed(format!(
                    "failed to run {}: {e}",
                    self.binary.display()
                ))
            })?;

        if !output.status.success() {
            return Err(DigitizerError::ExtractionFailed(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        if let Some(dest) = overlay_out {
            // diagnostic side channel only
            if let Err(e) = std::fs::copy(overlay_file.path(), dest) {
                tracing::warn!(dest = %dest.display(), "failed to persist tracer overlay: {e}");
            }
        }

        let traced = std::fs::read_to_string(data_file.path()).map_err(|e| {
            DigitizerError::ExtractionFailed(format!("failed to read tracer output: {e}"))
        })?;
        parse_curve(&traced)
    }
}

/// Calibration passed to the tracer: the crop's full extent corresponds to
/// x in [0, 10] and y in [0, 1] in its output space. Three reference points,
/// each pinned to a pixel location of the staged bitmap.
fn calibration_args(width: u32, height: u32) -> Vec<String> {
    vec![
        "-p".into(),
        "0,0".into(),
        "-p".into(),
        "10,0".into(),
        "-p".into(),
        "0,1".into(),
        "-l".into(),
        "0,0".into(),
        "-l".into(),
        format!("{width},0"),
        "-l".into(),
        format!("0,{height}"),
    ]
}

/// Parses the tracer's whitespace-delimited `x y` rows, in emitted order.
fn parse_curve(traced: &str) -> Result<Vec<PixelSample>, DigitizerError> {
    let mut samples = Vec::new();
    for (index, line) in traced.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let sample = match (fields.next(), fields.next(), fields.next()) {
            (Some(x), Some(y), None) => match (x.parse::<f64>(), y.parse::<f64>()) {
                (Ok(x), Ok(y)) => Some(PixelSample::new(x, y)),
                _ => None,
            },
            _ => None,
        };
        match sample {
            Some(sample) => samples.push(sample),
            None => {
                return Err(DigitizerError::MalformedExtractorOutput {
                    row: index + 1,
                    content: line.to_string(),
                });
            }
        }
    }
    Ok(samples)
}
