//! Read-only access to the climate observation database.
//!
//! The database holds two tables populated by an external ingestion job:
//! `measurement(station, date, prcp, tobs)` and
//! `station(station, name, latitude, longitude, elevation)`. Nothing in this
//! crate writes to either of them.

mod client;
mod error;
mod models;
mod window;

#[cfg(test)]
pub(crate) mod fixtures;

pub use client::ClimateStore;
pub use error::StoreError;
pub use models::{PrecipitationReading, TemperatureReading, TemperatureSummary};
pub use window::ReportingWindow;
