// Graph window domain model - the requested time extent of a chart
use chrono::{Days, NaiveDate};

use crate::error::DigitizerError;

/// Date format used by the remote query string.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// The time extent a chart request covers.
///
/// The remote service always renders a fixed two-day chart; the window either
/// spans both rendered days (built from an explicit date pair) or keeps the
/// leading `hours` of the first day (built from a date plus an hour count).
/// Both constructors normalize to an `hours` value that drives the crop width
/// and the x-axis mapping identically downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphWindow {
    begin: NaiveDate,
    end: NaiveDate,
    hours: f64,
}

impl GraphWindow {
    /// Window over an explicit inclusive date pair. The rendered chart's
    /// pixel layout is only consistent for an inclusive span of exactly two
    /// days, so any other span is rejected.
    pub fn from_dates(begin: NaiveDate, end: NaiveDate) -> Result<Self, DigitizerError> {
        let span_days = (end - begin).num_days() + 1;
        if span_days != 2 {
            return Err(DigitizerError::UnsupportedWindow(format!(
                "chart layout is only consistent for an inclusive two-day span, got {span_days} days"
            )));
        }
        Ok(Self {
            begin,
            end,
            hours: 48.0,
        })
    }

    /// Window keeping the first `hours` of the chart day at `date`,
    /// `hours` in (0, 24]. The remote still renders the full two-day chart;
    /// cropping slices it down.
    pub fn partial_day(date: NaiveDate, hours: f64) -> Result<Self, DigitizerError> {
        if !(hours > 0.0 && hours <= 24.0) {
            return Err(DigitizerError::UnsupportedWindow(format!(
                "hours must be in (0, 24], got {hours}"
            )));
        }
        let end = date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| DigitizerError::UnsupportedWindow("date out of range".to_string()))?;
        Ok(Self {
            begin: date,
            end,
            hours,
        })
    }

    pub fn begin_date(&self) -> String {
        self.begin.format(DATE_FORMAT).to_string()
    }

    pub fn end_date(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }

    /// How many hours of the rendered chart to keep, counted from its left
    /// edge. 48 for the full two-day chart.
    pub fn hours(&self) -> f64 {
        self.hours
    }
}
