//! Data transfer objects for web requests and responses.

use serde::Serialize;

use crate::store::TemperatureSummary;

/// Inclusive date bounds taken from the URL path.
///
/// Bounds are kept as the raw path strings and compared lexicographically
/// against stored dates. A value that is not a date simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    /// Earliest date to include
    pub start: String,

    /// Latest date to include, open-ended when absent
    pub end: Option<String>,
}

impl DateRange {
    /// Range from `start` onwards.
    pub fn from_start(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: None,
        }
    }

    /// Range from `start` to `end`, both inclusive.
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: Some(end.into()),
        }
    }

    /// True when both bounds are present and `end` sorts before `start`.
    pub fn is_reversed(&self) -> bool {
        self.end.as_deref().is_some_and(|end| end < self.start.as_str())
    }
}

/// Response for the temperature statistics routes.
///
/// All three fields are floats, so whole-degree extremes serialize as `70.0`.
/// Each is `null` when the range matched no rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureStatsResponse {
    #[serde(rename = "Min Temp")]
    pub min: Option<f64>,

    #[serde(rename = "Max Temp")]
    pub max: Option<f64>,

    #[serde(rename = "Avg Temp")]
    pub avg: Option<f64>,
}

impl From<TemperatureSummary> for TemperatureStatsResponse {
    fn from(summary: TemperatureSummary) -> Self {
        Self {
            min: summary.min,
            max: summary.max,
            avg: summary.avg,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
