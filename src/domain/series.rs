// Digitized series domain models
use serde::Serialize;

/// One raw sample from the curve tracer, in its normalized output space:
/// x in roughly [0, 10] across the crop width, y in roughly [0, 1] from the
/// axis bottom to the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSample {
    pub x: f64,
    pub y: f64,
}

impl PixelSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The recovered time series: two equal-length ordered sequences, one point
/// per extracted curve sample, hours non-decreasing from the window start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigitizedSeries {
    pub hours: Vec<f64>,
    pub values: Vec<f64>,
}

impl DigitizedSeries {
    pub fn new(hours: Vec<f64>, values: Vec<f64>) -> Self {
        debug_assert_eq!(hours.len(), values.len());
        Self { hours, values }
    }

    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_serializes_as_parallel_arrays() {
        let series = DigitizedSeries::new(vec![0.0, 1.5], vec![120.0, 130.5]);
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["hours"], serde_json::json!([0.0, 1.5]));
        assert_eq!(json["values"], serde_json::json!([120.0, 130.5]));
    }
}
