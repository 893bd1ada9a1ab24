// Coordinate mapping - pixel-space curve to domain units
use crate::domain::graph::GraphVariant;
use crate::domain::series::{DigitizedSeries, PixelSample};

/// Maps the tracer's normalized curve into domain units. The tracer's x range
/// [0, 10] spans the requested window's `hours`; y goes through the variant's
/// axis map. Deterministic, order-preserving, no I/O.
///
/// Values outside the variant's physical range point at a calibration or
/// extraction defect: they are flagged with a warning and passed through
/// unclamped.
pub fn map_to_domain(
    pixel_curve: &[PixelSample],
    variant: GraphVariant,
    hours: f64,
) -> DigitizedSeries {
    let (range_lo, range_hi) = variant.y_range();
    let mut hours_out = Vec::with_capacity(pixel_curve.len());
    let mut values = Vec::with_capacity(pixel_curve.len());

    for sample in pixel_curve {
        let hour = sample.x / 10.0 * hours;
        let value = variant.y_axis_value(sample.y);
        if value < range_lo || value > range_hi {
            tracing::warn!(
                value,
                range_lo,
                range_hi,
                unit = variant.unit(),
                "mapped value outside the variant's physical range"
            );
        }
        hours_out.push(hour);
        values.push(value);
    }

    DigitizedSeries::new(hours_out, values)
}
