//! App state: config, data source, status cache.

use std::sync::Arc;

use icewatch_cache::StatusCache;
use icewatch_core::clock::{Clock, SystemClock};
use icewatch_core::constants::DEFAULT_PORT;
use icewatch_core::error::{IcewatchError, Result};
use icewatch_core::traits::IceDataSource;
use icewatch_nsidc::{IceDataFetcher, NsidcConfig};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Bind port
    pub port: u16,
    /// Verbose logging and error details
    pub debug: bool,
    /// Upstream client settings
    pub nsidc: NsidcConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            debug: false,
            nsidc: NsidcConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Loads `.env` (if present) and reads `PORT`, `DEBUG`, `NSIDC_BASE_URL`
    /// and `UPSTREAM_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                IcewatchError::Config(format!("PORT must be a port number, got '{}'", raw))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            debug: std::env::var("DEBUG")
                .map(|v| parse_debug_flag(&v))
                .unwrap_or(false),
            nsidc: NsidcConfig::from_env()?,
        })
    }
}

/// Only the literal `true` (any case) turns debug on.
fn parse_debug_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

/// Shared state handed to every handler.
pub struct AppState {
    /// Server configuration
    pub config: ApiConfig,
    /// Time source for response timestamps and query defaults
    pub clock: Arc<dyn Clock>,
    /// Where ice data comes from (uncached endpoints)
    pub source: Arc<dyn IceDataSource>,
    /// Cached full status
    pub cache: StatusCache,
}

impl AppState {
    /// Builds production state: system clock and an NSIDC fetcher.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let fetcher = Arc::new(IceDataFetcher::new(config.nsidc.clone(), clock.clone())?);
        Ok(Self::with_source(config, fetcher, clock))
    }

    /// Builds state around an arbitrary data source and clock.
    pub fn with_source(config: ApiConfig, source: Arc<dyn IceDataSource>, clock: Arc<dyn Clock>) -> Self {
        let cache = StatusCache::new(source.clone(), clock.clone());
        Self {
            config,
            clock,
            source,
            cache,
        }
    }
}
