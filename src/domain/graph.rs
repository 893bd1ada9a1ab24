// Graph variant domain model - the four quantities CFT renders
use std::str::FromStr;

/// One of the four physical quantities the remote service can plot.
///
/// Each variant owns its display unit, the `type` code sent in the remote
/// query string, and the affine map from the curve tracer's normalized
/// y coordinate (0 at the axis bottom, 1 at the top) to domain units. The
/// axis ranges are a fixed contract of the current CFT chart rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphVariant {
    SignificantWaveHeight,
    PeakPeriod,
    PeakDirection,
    SeaTemperature,
}

impl GraphVariant {
    pub fn unit(&self) -> &'static str {
        match self {
            Self::SignificantWaveHeight => "cm",
            Self::PeakPeriod => "s",
            Self::PeakDirection => "°",
            Self::SeaTemperature => "°C",
        }
    }

    /// The `type` query parameter understood by the remote endpoint.
    pub fn type_code(&self) -> &'static str {
        match self {
            Self::SignificantWaveHeight => "Hm0",
            Self::PeakPeriod => "Tp",
            Self::PeakDirection => "Dirp",
            Self::SeaTemperature => "Tsea",
        }
    }

    /// Maps a normalized y value in [0, 1] to domain units.
    pub fn y_axis_value(&self, value: f64) -> f64 {
        match self {
            // 0 to 800 cm
            Self::SignificantWaveHeight => value * 800.0,
            // 0 to 30 seconds
            Self::PeakPeriod => value * 30.0,
            // 0 to 360 degrees
            Self::PeakDirection => value * 360.0,
            // 10 to 30 degrees Celsius
            Self::SeaTemperature => value * 20.0 + 10.0,
        }
    }

    /// The documented physical range of the rendered y axis.
    pub fn y_range(&self) -> (f64, f64) {
        (self.y_axis_value(0.0), self.y_axis_value(1.0))
    }

    pub fn all() -> [GraphVariant; 4] {
        [
            Self::SignificantWaveHeight,
            Self::PeakPeriod,
            Self::PeakDirection,
            Self::SeaTemperature,
        ]
    }
}

impl FromStr for GraphVariant {
    type Err = String;

    /// Accepts the remote `type` code (Hm0, Tp, Dirp, Tsea).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GraphVariant::all()
            .into_iter()
            .find(|variant| variant.type_code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown graph type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_axis_endpoints() {
        assert_eq!(GraphVariant::SignificantWaveHeight.y_axis_value(0.0), 0.0);
        assert_eq!(GraphVariant::SignificantWaveHeight.y_axis_value(1.0), 800.0);

        assert_eq!(GraphVariant::PeakPeriod.y_axis_value(0.0), 0.0);
        assert_eq!(GraphVariant::PeakPeriod.y_axis_value(1.0), 30.0);

        assert_eq!(GraphVariant::PeakDirection.y_axis_value(0.0), 0.0);
        assert_eq!(GraphVariant::PeakDirection.y_axis_value(1.0), 360.0);

        assert_eq!(GraphVariant::SeaTemperature.y_axis_value(0.0), 10.0);
        assert_eq!(GraphVariant::SeaTemperature.y_axis_value(1.0), 30.0);
    }

    #[test]
    fn test_y_range_matches_endpoints() {
        for variant in GraphVariant::all() {
            let (lo, hi) = variant.y_range();
            assert_eq!(lo, variant.y_axis_value(0.0));
            assert_eq!(hi, variant.y_axis_value(1.0));
            assert!(lo < hi);
        }
    }

    #[test]
    fn test_type_codes() {
        assert_eq!(GraphVariant::SignificantWaveHeight.type_code(), "Hm0");
        assert_eq!(GraphVariant::PeakPeriod.type_code(), "Tp");
        assert_eq!(GraphVariant::PeakDirection.type_code(), "Dirp");
        assert_eq!(GraphVariant::SeaTemperature.type_code(), "Tsea");
    }
}
