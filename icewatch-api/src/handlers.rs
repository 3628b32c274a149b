//! API route handlers.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::Datelike;
use tracing::{debug, info};

use icewatch_core::constants::{DEFAULT_HISTORICAL_YEARS, SERVICE_NAME, SERVICE_VERSION};
use icewatch_core::error::IcewatchError;
use icewatch_core::traits::IceDataSource;
use icewatch_core::types::{HistoricalComparison, Hemisphere, MonthlyRecord, StatusSnapshot};

use crate::dto::*;
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

fn parse_hemisphere(raw: &str) -> Result<Hemisphere> {
    Ok(raw.parse::<Hemisphere>()?)
}

/// Parses `params[name]`, or returns `default` when it is absent.
fn parse_param<T: FromStr>(params: &HashMap<String, String>, name: &str, default: T) -> Result<T> {
    match params.get(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ApiError::from(IcewatchError::invalid_parameter(name, raw.as_str()))),
        None => Ok(default),
    }
}

/// Parses a comma-separated list of years. Order and duplicates are kept.
fn parse_years(raw: &str) -> Result<Vec<i32>> {
    raw.split(',')
        .map(|y| {
            y.trim()
                .parse::<i32>()
                .map_err(|_| ApiError::from(IcewatchError::invalid_parameter("years", y.trim())))
        })
        .collect()
}

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// GET /api/status
pub async fn status(State(state): State<Arc<AppState>>) -> Json<SuccessResponse<StatusSnapshot>> {
    let snapshot = state.cache.get_cached_status().await;
    Json(SuccessResponse::new(snapshot, state.clock.now()))
}

/// GET /api/current
pub async fn current(State(state): State<Arc<AppState>>) -> Json<SuccessResponse<CurrentExtentDto>> {
    let (arctic, antarctic) = tokio::join!(
        state.source.current_extent(Hemisphere::North),
        state.source.current_extent(Hemisphere::South),
    );

    Json(SuccessResponse::new(
        CurrentExtentDto { arctic, antarctic },
        state.clock.now(),
    ))
}

/// GET /api/monthly/:hemisphere
pub async fn monthly(
    State(state): State<Arc<AppState>>,
    Path(hemisphere): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<SuccessResponse<MonthlyRecord>>> {
    let hemisphere = parse_hemisphere(&hemisphere)?;
    let today = state.clock.now();

    let year: i32 = parse_param(&params, "year", today.year())?;
    // Accepted and validated; the series always covers the whole year.
    let month: u32 = parse_param(&params, "month", today.month())?;
    if !(1..=12).contains(&month) {
        return Err(IcewatchError::invalid_parameter("month", month.to_string()).into());
    }

    debug!(%hemisphere, year, month, "Monthly data requested");
    let record = state.source.monthly_data(hemisphere, year).await;

    Ok(Json(SuccessResponse::new(record, state.clock.now())))
}

/// GET /api/historical/:hemisphere
pub async fn historical(
    State(state): State<Arc<AppState>>,
    Path(hemisphere): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<SuccessResponse<HistoricalComparison>>> {
    let hemisphere = parse_hemisphere(&hemisphere)?;
    let raw = params
        .get("years")
        .map(String::as_str)
        .unwrap_or(DEFAULT_HISTORICAL_YEARS);
    let years = parse_years(raw)?;

    debug!(%hemisphere, ?years, "Historical comparison requested");
    let comparison = state.source.historical_comparison(hemisphere, &years).await;

    Ok(Json(SuccessResponse::new(comparison, state.clock.now())))
}

/// GET /api/health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        timestamp: state.clock.now(),
    })
}

/// GET /api/refresh
pub async fn refresh(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    let snapshot = state.cache.force_refresh().await;
    info!(last_updated = %snapshot.last_updated, "Cache refreshed on request");

    Json(MessageResponse {
        status: "success",
        message: "Cache refreshed successfully".into(),
        timestamp: state.clock.now(),
    })
}
