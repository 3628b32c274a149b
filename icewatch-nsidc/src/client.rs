//! Raw NSIDC Sea Ice Index client.
//!
//! Every call is bounded by the configured timeout. Errors are returned as-is;
//! deciding what to do about them is the fetcher's job.

use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, instrument};

use icewatch_core::constants::{DEFAULT_NSIDC_BASE_URL, DEFAULT_UPSTREAM_TIMEOUT_SECS};
use icewatch_core::error::{IcewatchError, Result};
use icewatch_core::types::{Hemisphere, MonthlyRecord};

/// Upstream client configuration.
#[derive(Clone, Debug)]
pub struct NsidcConfig {
    /// Base URL of the Sea Ice Index API, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for NsidcConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NSIDC_BASE_URL.into(),
            timeout_seconds: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl NsidcConfig {
    /// Creates a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Reads `NSIDC_BASE_URL` and `UPSTREAM_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("NSIDC_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(raw) = std::env::var("UPSTREAM_TIMEOUT_SECS") {
            config.timeout_seconds = raw.trim().parse().map_err(|_| {
                IcewatchError::Config(format!("UPSTREAM_TIMEOUT_SECS must be an integer, got '{}'", raw))
            })?;
        }

        Ok(config)
    }
}

/// Body of `GET /extent/{hemisphere}/daily/latest`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LatestExtentResponse {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub extent: Option<f64>,
    #[serde(default)]
    pub area: Option<f64>,
}

impl LatestExtentResponse {
    /// The reading's calendar date, taken from the leading `YYYY-MM-DD` of
    /// whatever timestamp format the provider used.
    pub fn reading_date(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?.trim();
        NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
    }
}

/// HTTP client for the Sea Ice Index API.
#[derive(Clone, Debug)]
pub struct NsidcClient {
    config: NsidcConfig,
    http_client: reqwest::Client,
}

impl NsidcClient {
    /// Creates a new client with the given config.
    pub fn with_config(config: NsidcConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| IcewatchError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Latest daily extent.
    #[instrument(skip(self))]
    pub(crate) async fn latest_extent(&self, hemisphere: Hemisphere) -> Result<LatestExtentResponse> {
        let url = self.url(&format!("extent/{}/daily/latest", hemisphere));
        self.get_json(&url).await
    }

    /// Monthly series for one year.
    #[instrument(skip(self))]
    pub async fn monthly_extent(&self, hemisphere: Hemisphere, year: i32) -> Result<MonthlyRecord> {
        let url = self.url(&format!("extent/{}/monthly/{}", hemisphere, year));
        self.get_json(&url).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| IcewatchError::Http(e.to_string()))?;

        // Only 200 counts as success; other 2xx codes fall back like errors.
        if response.status() != reqwest::StatusCode::OK {
            return Err(IcewatchError::UpstreamStatus {
                status: response.status().as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| IcewatchError::Http(e.to_string()))?;
        debug!(url, bytes = body.len(), "Upstream responded 200");

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_config() {
        let config = NsidcConfig::default();
        assert_eq!(config.base_url, "https://nsidc.org/api/seaiceindex/v2");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = NsidcClient::with_config(NsidcConfig::new("http://localhost:9000/")).unwrap();
        assert_eq!(
            client.url("extent/north/daily/latest"),
            "http://localhost:9000/extent/north/daily/latest"
        );
    }

    #[test]
    fn test_latest_response_tolerates_missing_fields() {
        let parsed: LatestExtentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.date.is_none());
        assert!(parsed.extent.is_none());

        let parsed: LatestExtentResponse =
            serde_json::from_str(r#"{"date":"2024-03-10","extent":14.1}"#).unwrap();
        assert_eq!(parsed.reading_date(), NaiveDate::from_ymd_opt(2024, 3, 10));
        assert_eq!(parsed.extent, Some(14.1));
        assert!(parsed.area.is_none());
    }

    #[test_case("2024-03-10", Some((2024, 3, 10)); "plain date")]
    #[test_case("2024-03-10T00:00:00", Some((2024, 3, 10)); "naive timestamp")]
    #[test_case(" 2024-03-10T12:30:00Z", Some((2024, 3, 10)); "utc timestamp with padding")]
    #[test_case("10/03/2024", None; "day first")]
    #[test_case("2024-3", None; "too short")]
    #[test_case("", None; "empty")]
    fn test_reading_date(raw: &str, expected: Option<(i32, u32, u32)>) {
        let response = LatestExtentResponse {
            date: Some(raw.to_string()),
            ..Default::default()
        };
        let expected = expected.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
        assert_eq!(response.reading_date(), expected);
    }

    #[tokio::test]
    async fn test_error_kinds() {
        use wiremock::matchers::path;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(path("/extent/north/daily/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;
        Mock::given(path("/extent/south/daily/latest"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let client = NsidcClient::with_config(NsidcConfig::new(server.uri())).unwrap();

        let err = client.latest_extent(Hemisphere::North).await.unwrap_err();
        assert!(matches!(err, IcewatchError::Json(_)));
        assert!(!err.is_upstream());

        let err = client.latest_extent(Hemisphere::South).await.unwrap_err();
        assert!(matches!(err, IcewatchError::UpstreamStatus { status: 502 }));
        assert!(err.is_upstream());

        let dead = NsidcClient::with_config(NsidcConfig::new("http://127.0.0.1:9").with_timeout(1)).unwrap();
        let err = dead.latest_extent(Hemisphere::North).await.unwrap_err();
        assert!(matches!(err, IcewatchError::Http(_)));
        assert!(err.is_upstream());
    }

    #[test]
    fn test_config_builder() {
        let config = NsidcConfig::new("http://mirror.example").with_timeout(5);
        assert_eq!(config.base_url, "http://mirror.example");
        assert_eq!(config.timeout_seconds, 5);
    }
}
