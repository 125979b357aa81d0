//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::store::{PrecipitationReading, StoreError, TemperatureReading, TemperatureSummary};

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/:start", get(temperature_from))
        .route("/api/v1.0/:start/:end", get(temperature_between))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page listing the available routes.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate::default()
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Precipitation for every measurement in the last 12 months of data.
async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<Vec<PrecipitationReading>>, AppError> {
    let Some(threshold) = state.threshold_key() else {
        return Ok(Json(Vec::new()));
    };

    let readings = state.store.list_precipitation_since(&threshold).await?;
    Ok(Json(readings))
}

/// Distinct station ids found in the measurement table.
async fn stations(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let stations = state.store.list_distinct_stations().await?;
    Ok(Json(stations))
}

/// Observed temperatures for the last 12 months of data.
async fn tobs(State(state): State<AppState>) -> Result<Json<Vec<TemperatureReading>>, AppError> {
    let Some(threshold) = state.threshold_key() else {
        return Ok(Json(Vec::new()));
    };

    let readings = state.store.list_temperatures_since(&threshold).await?;
    Ok(Json(readings))
}

/// Temperature statistics from `start` onwards.
async fn temperature_from(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<TemperatureStatsResponse>, AppError> {
    match path {
        Ok(Path(start)) => temperature_stats(&state, DateRange::from_start(start)).await,
        Err(rejection) => Ok(undecodable_range(rejection)),
    }
}

/// Temperature statistics between `start` and `end`, inclusive.
async fn temperature_between(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<TemperatureStatsResponse>, AppError> {
    match path {
        Ok(Path((start, end))) => temperature_stats(&state, DateRange::between(start, end)).await,
        Err(rejection) => Ok(undecodable_range(rejection)),
    }
}

/// A bound that is not valid UTF-8 can never equal a stored date.
fn undecodable_range(rejection: PathRejection) -> Json<TemperatureStatsResponse> {
    debug!(%rejection, "undecodable date range");
    Json(TemperatureSummary::default().into())
}

async fn temperature_stats(
    state: &AppState,
    range: DateRange,
) -> Result<Json<TemperatureStatsResponse>, AppError> {
    // Nothing can match; skip the round trip.
    if range.is_reversed() {
        debug!(?range, "reversed date range");
        return Ok(Json(TemperatureSummary::default().into()));
    }

    let summary = state
        .store
        .aggregate_temperature(&range.start, range.end.as_deref())
        .await?;

    if summary.is_empty() {
        debug!(?range, "no measurements in range");
    }

    Ok(Json(summary.into()))
}

/// Fallback for unknown paths.
async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound {
        message: format!("No route for {}", uri.path()),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
