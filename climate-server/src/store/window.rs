//! The "last 12 months" reporting window.
//!
//! The window ends at the most recent date in the dataset and starts one
//! calendar year earlier. It is derived from the data rather than fixed, so
//! it stays correct when the database is replaced.

use std::fmt;

use chrono::{Months, NaiveDate};

use super::client::ClimateStore;
use super::error::StoreError;

/// Format of every `date` value stored in the `measurement` table.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the reporting window.
const WINDOW_MONTHS: Months = Months::new(12);

/// The dataset's latest date and the exclusive lower bound one year before it.
///
/// Stored dates are ISO strings, so comparing [`threshold_key`] against them
/// lexicographically is the same as comparing chronologically.
///
/// [`threshold_key`]: ReportingWindow::threshold_key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    latest: NaiveDate,
    threshold: NaiveDate,
}

impl ReportingWindow {
    /// Build the window ending at `latest`.
    ///
    /// Returns `None` only if subtracting a year leaves chrono's date range.
    pub fn ending_at(latest: NaiveDate) -> Option<Self> {
        let threshold = latest.checked_sub_months(WINDOW_MONTHS)?;
        Some(Self { latest, threshold })
    }

    /// Build the window from a stored `YYYY-MM-DD` date string.
    pub fn from_latest_key(latest: &str) -> Result<Self, StoreError> {
        let malformed = || StoreError::MalformedDate {
            value: latest.to_string(),
        };
        let date = NaiveDate::parse_from_str(latest, DATE_FORMAT).map_err(|_| malformed())?;
        Self::ending_at(date).ok_or_else(malformed)
    }

    /// Derive the window from the database's latest measurement date.
    ///
    /// Returns `Ok(None)` when the measurement table is empty.
    pub async fn load(store: &ClimateStore) -> Result<Option<Self>, StoreError> {
        match store.latest_date().await? {
            Some(latest) => Self::from_latest_key(&latest).map(Some),
            None => Ok(None),
        }
    }

    /// Most recent date in the dataset.
    pub fn latest(&self) -> NaiveDate {
        self.latest
    }

    /// Exclusive lower bound of the window.
    pub fn threshold(&self) -> NaiveDate {
        self.threshold
    }

    /// The threshold in the same string form as stored dates.
    pub fn threshold_key(&self) -> String {
        self.threshold.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for ReportingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}]", self.threshold, self.latest)
    }
}
