//! API route configuration.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Dashboard
        .route("/", get(handlers::index))

        // Ice data
        .route("/api/status", get(handlers::status))
        .route("/api/current", get(handlers::current))
        .route("/api/monthly/:hemisphere", get(handlers::monthly))
        .route("/api/historical/:hemisphere", get(handlers::historical))

        // Operations
        .route("/api/health", get(handlers::health))
        .route("/api/refresh", get(handlers::refresh))

        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{Duration, TimeZone, Utc};
    use icewatch_core::clock::{Clock, ManualClock};
    use icewatch_nsidc::{IceDataFetcher, NsidcConfig};
    use serde_json::Value;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::state::ApiConfig;

    /// Nothing listens here, so every upstream call fails fast.
    const DEAD_UPSTREAM: &str = "http://127.0.0.1:9";

    fn june_clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()))
    }

    fn app_with(upstream: &str, clock: Arc<ManualClock>) -> Router {
        let fetcher = IceDataFetcher::new(NsidcConfig::new(upstream).with_timeout(1), clock.clone()).unwrap();
        let state = AppState::with_source(ApiConfig::default(), Arc::new(fetcher), clock);
        create_router(Arc::new(state))
    }

    fn test_app() -> Router {
        app_with(DEAD_UPSTREAM, june_clock())
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get(test_app(), "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "Polar Ice Sheet Monitor");
        assert_eq!(body["version"], "1.0.0");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_dashboard_served() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/api/status"));
    }

    #[tokio::test]
    async fn test_status_uses_placeholder_when_upstream_down() {
        let (status, body) = get(test_app(), "/api/status").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["arctic"]["data_source"], "Mock Data (Demo)");
        assert_eq!(body["data"]["arctic"]["extent_million_km2"], 13.5);
        assert_eq!(body["data"]["antarctic"]["extent_million_km2"], 18.2);
        assert_eq!(body["data"]["arctic"]["hemisphere"], "north");
    }

    #[tokio::test]
    async fn test_status_is_cached_until_refresh() {
        let clock = june_clock();
        let app = app_with(DEAD_UPSTREAM, clock.clone());

        let (_, first) = get(app.clone(), "/api/status").await;
        clock.advance(Duration::hours(1));
        let (_, second) = get(app.clone(), "/api/status").await;
        assert_eq!(first["data"]["last_updated"], second["data"]["last_updated"]);

        let (status, refreshed) = get(app.clone(), "/api/refresh").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(refreshed["status"], "success");
        assert_eq!(refreshed["message"], "Cache refreshed successfully");

        let (_, third) = get(app, "/api/status").await;
        assert_ne!(first["data"]["last_updated"], third["data"]["last_updated"]);
        assert_eq!(
            third["data"]["last_updated"],
            serde_json::to_value(clock.now()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_current_live_data() {
        let server = MockServer::start().await;
        for (hemisphere, extent) in [("north", 10.5), ("south", 17.25)] {
            Mock::given(method("GET"))
                .and(path(format!("/extent/{}/daily/latest", hemisphere)))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "date": "2024-06-09",
                    "extent": extent,
                    "area": extent * 0.8
                })))
                .mount(&server)
                .await;
        }

        let (status, body) = get(app_with(&server.uri(), june_clock()), "/api/current").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["arctic"]["data_source"], "NSIDC Sea Ice Index");
        assert_eq!(body["data"]["arctic"]["extent_million_km2"], 10.5);
        assert_eq!(body["data"]["antarctic"]["extent_million_km2"], 17.25);
        assert_eq!(body["data"]["antarctic"]["date"], "2024-06-09");
    }

    #[tokio::test]
    async fn test_monthly_placeholder_series() {
        let (status, body) = get(test_app(), "/api/monthly/north?year=2022&month=5").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["year"], 2022);
        assert_eq!(body["data"]["hemisphere"], "north");

        let months = body["data"]["monthly_data"].as_array().unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[2]["month"], 3);
        assert_eq!(months[2]["extent"], 14.0);
    }

    #[tokio::test]
    async fn test_monthly_defaults_to_current_year() {
        let (status, body) = get(test_app(), "/api/monthly/south").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["year"], 2024);
    }

    #[tokio::test]
    async fn test_monthly_bad_year_is_server_error() {
        let (status, body) = get(test_app(), "/api/monthly/north?year=abc").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().contains("abc"));
    }

    #[tokio::test]
    async fn test_monthly_out_of_range_month() {
        let (status, body) = get(test_app(), "/api/monthly/north?month=13").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn test_unknown_hemisphere_rejected() {
        let (status, body) = get(test_app(), "/api/monthly/east").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");

        let (status, _) = get(test_app(), "/api/historical/west").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_historical_default_years() {
        let (status, body) = get(test_app(), "/api/historical/south").await;

        assert_eq!(status, StatusCode::OK);
        let data = body["data"].as_object().unwrap();
        let years: Vec<&str> = data.keys().map(String::as_str).collect();
        assert_eq!(years, vec!["2020", "2021", "2022", "2023", "2024"]);
        assert_eq!(data["2021"]["year"], 2021);
    }

    #[tokio::test]
    async fn test_historical_duplicate_years() {
        let (status, body) = get(test_app(), "/api/historical/north?years=2023,2023").await;

        assert_eq!(status, StatusCode::OK);
        let data = body["data"].as_object().unwrap();
        assert_eq!(data.len(), 1);
        assert!(data.contains_key("2023"));
    }

    #[tokio::test]
    async fn test_historical_bad_years() {
        let (status, body) = get(test_app(), "/api/historical/north?years=2020,soon").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
    }
}
