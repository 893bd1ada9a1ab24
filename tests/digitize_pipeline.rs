// End-to-end pipeline tests against a synthetic chart fixture.
//
// The real plotdigitizer binary is not exercised here; a column-scanning
// extractor traces the reinforced outline the preprocessor draws, which is
// exactly the shape the external tracer consumes.
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use image::{Rgb, RgbImage};

use cft_buoy_digitizer::{
    CurveExtractor, DigitizerError, DigitizerService, GraphVariant, GraphWindow, PixelSample,
    Station, StationDataRequest,
};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const GRAY: Rgb<u8> = Rgb([128, 128, 128]);
const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// A 800x400 wave-height chart: white background, gray gridlines, and a
/// 3px blue trace oscillating inside the plot area across the full width.
fn synthetic_wave_chart() -> Vec<u8> {
    let mut image = RgbImage::from_pixel(800, 400, WHITE);
    for x in (100..800).step_by(100) {
        for y in 0..400 {
            image.put_pixel(x, y, GRAY);
        }
    }
    for x in 0..800u32 {
        let center = 130.0 + 40.0 * (x as f64 * 0.02).sin();
        let center = center.round() as u32;
        for y in center - 1..=center + 1 {
            image.put_pixel(x, y, BLUE);
        }
    }

    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

/// Traces the black outline the preprocessor draws, column by column, and
/// reports it in the tracer's normalized space: x in [0, 10] across the crop
/// width, y in [0, 1] from the bottom.
struct ColumnScanExtractor;

#[async_trait]
impl CurveExtractor for ColumnScanExtractor {
    async fn extract(
        &self,
        plot: &RgbImage,
        _overlay_out: Option<&Path>,
    ) -> Result<Vec<PixelSample>, DigitizerError> {
        let (width, height) = plot.dimensions();
        let mut samples = Vec::new();
        for x in 0..width {
            let rows: Vec<f64> = (0..height)
                .filter(|&y| *plot.get_pixel(x, y) == BLACK)
                .map(f64::from)
                .collect();
            if rows.is_empty() {
                continue;
            }
            let mean_row = rows.iter().sum::<f64>() / rows.len() as f64;
            samples.push(PixelSample::new(
                x as f64 / width as f64 * 10.0,
                1.0 - mean_row / height as f64,
            ));
        }
        Ok(samples)
    }
}

fn request(hours: f64) -> StationDataRequest {
    let window =
        GraphWindow::partial_day(NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(), hours).unwrap();
    StationDataRequest::new(
        Station::BoaGorgona,
        GraphVariant::SignificantWaveHeight,
        window,
    )
}

fn service() -> DigitizerService {
    DigitizerService::new(Arc::new(ColumnScanExtractor))
}

#[tokio::test]
async fn test_wave_height_chart_end_to_end() {
    let raw = synthetic_wave_chart();
    let series = service().digitize(&raw, &request(24.0)).await.unwrap();

    // one sample per crop column: (800 - 71 - 60) / 2 = 334
    assert_eq!(series.len(), 334);
    assert_eq!(series.hours[0], 0.0);
    assert!((series.hours[series.len() - 1] - 24.0).abs() < 0.1);
    assert!(series.hours.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(series.values.iter().all(|&v| (0.0..=800.0).contains(&v)));
}

#[tokio::test]
async fn test_digitizing_twice_yields_identical_series() {
    let raw = synthetic_wave_chart();
    let first = service().digitize(&raw, &request(24.0)).await.unwrap();
    let second = service().digitize(&raw, &request(24.0)).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_half_window_is_the_first_half_of_the_full_window() {
    let raw = synthetic_wave_chart();
    let full = service().digitize(&raw, &request(24.0)).await.unwrap();
    let half = service().digitize(&raw, &request(12.0)).await.unwrap();

    // crop-boundary rounding can cost a column
    assert!((half.len() as i64 - full.len() as i64 / 2).abs() <= 1);

    for i in 0..half.len() {
        assert!(
            (half.hours[i] - full.hours[i]).abs() < 1e-9,
            "hour {i} diverged: {} vs {}",
            half.hours[i],
            full.hours[i]
        );
        assert!(
            (half.values[i] - full.values[i]).abs() < 1e-9,
            "value {i} diverged: {} vs {}",
            half.values[i],
            full.values[i]
        );
    }
}

#[tokio::test]
async fn test_golden_curve_mapping() {
    struct GoldenExtractor;

    #[async_trait]
    impl CurveExtractor for GoldenExtractor {
        async fn extract(
            &self,
            _plot: &RgbImage,
            _overlay_out: Option<&Path>,
        ) -> Result<Vec<PixelSample>, DigitizerError> {
            Ok(vec![
                PixelSample::new(0.0, 0.15),
                PixelSample::new(2.5, 0.40),
                PixelSample::new(5.0, 0.325),
                PixelSample::new(7.5, 0.55),
                PixelSample::new(10.0, 0.50),
            ])
        }
    }

    let service = DigitizerService::new(Arc::new(GoldenExtractor));
    let series = service
        .digitize(&synthetic_wave_chart(), &request(24.0))
        .await
        .unwrap();

    let expected_hours = [0.0, 6.0, 12.0, 18.0, 24.0];
    let expected_values = [120.0, 320.0, 260.0, 440.0, 400.0];
    assert_eq!(series.len(), expected_hours.len());
    for i in 0..series.len() {
        assert!((series.hours[i] - expected_hours[i]).abs() < 1e-6);
        assert!((series.values[i] - expected_values[i]).abs() < 1e-6);
    }
}
