//! SQLite-backed climate store.
//!
//! Wraps a connection pool. Each query checks a connection out for its own
//! duration only, so concurrent requests never share one.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::debug;

use crate::config::ServerConfig;

use super::error::StoreError;
use super::models::{PrecipitationReading, TemperatureReading, TemperatureSummary};

/// Handle to the climate database.
///
/// Cheap to clone; clones share the same pool.
#[derive(Debug, Clone)]
pub struct ClimateStore {
    pool: SqlitePool,
}

impl ClimateStore {
    /// Open the database named in `config` read-only.
    pub async fn connect(config: &ServerConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?.read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        debug!(url = %config.database_url, "connected to climate database");
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Close all pooled connections. Queries issued afterwards fail with
    /// [`StoreError::DataUnavailable`].
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Most recent measurement date, or `None` if there are no measurements.
    pub async fn latest_date(&self) -> Result<Option<String>, StoreError> {
        let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;
        Ok(latest)
    }

    /// Precipitation readings dated strictly after `threshold`, oldest first.
    ///
    /// Missing precipitation values are kept as `None`.
    pub async fn list_precipitation_since(
        &self,
        threshold: &str,
    ) -> Result<Vec<PrecipitationReading>, StoreError> {
        let rows = sqlx::query_as::<_, PrecipitationReading>(
            "SELECT date, CAST(prcp AS REAL) AS precipitation \
             FROM measurement \
             WHERE date > ?1 \
             ORDER BY date, station",
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        debug!(threshold, rows = rows.len(), "listed precipitation");
        Ok(rows)
    }

    /// Every station id that appears in the measurement table, sorted.
    pub async fn list_distinct_stations(&self) -> Result<Vec<String>, StoreError> {
        let stations: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT station FROM measurement ORDER BY station")
                .fetch_all(&self.pool)
                .await?;

        debug!(stations = stations.len(), "listed stations");
        Ok(stations)
    }

    /// Observed temperatures dated strictly after `threshold`, oldest first.
    pub async fn list_temperatures_since(
        &self,
        threshold: &str,
    ) -> Result<Vec<TemperatureReading>, StoreError> {
        let rows = sqlx::query_as::<_, TemperatureReading>(
            "SELECT date, CAST(tobs AS REAL) AS temperature_observed \
             FROM measurement \
             WHERE date > ?1 AND tobs IS NOT NULL \
             ORDER BY date, station",
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        debug!(threshold, rows = rows.len(), "listed temperatures");
        Ok(rows)
    }

    /// Min, max and mean observed temperature for `start <= date <= end`.
    ///
    /// With no `end` the range is open-ended. An empty range yields a summary
    /// whose fields are all `None`.
    pub async fn aggregate_temperature(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureSummary, StoreError> {
        let summary = sqlx::query_as::<_, TemperatureSummary>(
            "SELECT CAST(MIN(tobs) AS REAL) AS min, \
                    CAST(MAX(tobs) AS REAL) AS max, \
                    AVG(tobs) AS avg \
             FROM measurement \
             WHERE date >= ?1 AND (?2 IS NULL OR date <= ?2)",
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        debug!(start, ?end, ?summary, "aggregated temperature");
        Ok(summary)
    }
}
