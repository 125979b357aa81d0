//! Row types for the queries the store runs.
//!
//! These are projections of the `measurement` table, declared up front to
//! match its fixed schema. Column aliases in the SQL map onto the field names.

use serde::Serialize;

/// One station-day precipitation reading.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct PrecipitationReading {
    /// Observation date (`YYYY-MM-DD`)
    pub date: String,

    /// Precipitation, absent when the station did not report one
    pub precipitation: Option<f64>,
}

/// One station-day observed temperature.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct TemperatureReading {
    /// Observation date (`YYYY-MM-DD`)
    pub date: String,

    /// Temperature observed at the station on that date
    pub temperature_observed: f64,
}

/// Min/max/mean of observed temperature over a date range.
///
/// All three are `None` when no rows fall in the range.
#[derive(Debug, Clone, Copy, PartialEq, Default, sqlx::FromRow)]
pub struct TemperatureSummary {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}

impl TemperatureSummary {
    /// True when the range matched no rows.
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.avg.is_none()
    }
}
