//! Service constants for Icewatch.
//!
//! Placeholder formulas anchor on these values; changing them changes the
//! shape of every fallback response.

use std::time::Duration;

// ═══════════════════════════════════════════════════════════════════════════════
// SERVICE IDENTITY
// ═══════════════════════════════════════════════════════════════════════════════

/// Human-readable service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "Polar Ice Sheet Monitor";

/// Service version reported by the health endpoint.
pub const SERVICE_VERSION: &str = "1.0.0";

// ═══════════════════════════════════════════════════════════════════════════════
// UPSTREAM (NSIDC SEA ICE INDEX)
// ═══════════════════════════════════════════════════════════════════════════════

/// Default base URL of the NSIDC Sea Ice Index API.
pub const DEFAULT_NSIDC_BASE_URL: &str = "https://nsidc.org/api/seaiceindex/v2";

/// Default upstream request timeout in seconds.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// `data_source` tag for readings produced from a live upstream response.
pub const LIVE_DATA_SOURCE: &str = "NSIDC Sea Ice Index";

/// `data_source` tag for synthesized readings.
pub const PLACEHOLDER_DATA_SOURCE: &str = "Mock Data (Demo)";

/// Note attached to synthesized current-extent readings.
pub const PLACEHOLDER_NOTE: &str = "Real-time data requires API authentication";

// ═══════════════════════════════════════════════════════════════════════════════
// PLACEHOLDER BOUNDS
// ═══════════════════════════════════════════════════════════════════════════════

/// Lower bound for any synthesized extent, in million km².
pub const MIN_PLACEHOLDER_EXTENT: f64 = 4.0;

/// Lower bound for any synthesized area, in million km².
pub const MIN_PLACEHOLDER_AREA: f64 = 3.5;

/// Area is synthesized as this fraction of extent.
pub const AREA_TO_EXTENT_RATIO: f64 = 0.85;

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE
// ═══════════════════════════════════════════════════════════════════════════════

/// How long a cached status snapshot stays fresh.
pub const STATUS_CACHE_TTL: Duration = Duration::from_secs(6 * 60 * 60);

// ═══════════════════════════════════════════════════════════════════════════════
// HTTP DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default bind port for the API server.
pub const DEFAULT_PORT: u16 = 5000;

/// Years compared by the historical endpoint when none are given.
pub const DEFAULT_HISTORICAL_YEARS: &str = "2020,2021,2022,2023,2024";
