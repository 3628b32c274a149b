//! Error types for Icewatch.
//!
//! Upstream failures never reach API callers: the fetcher converts them into
//! placeholder data. The variants below still describe them so the fetcher can
//! log *why* it fell back.

use thiserror::Error;

/// Result type alias using `IcewatchError`.
pub type Result<T> = std::result::Result<T, IcewatchError>;

/// Main error type for all Icewatch operations.
#[derive(Debug, Error)]
pub enum IcewatchError {
    // ═══════════════════════════════════════════════════════════════════════════
    // UPSTREAM ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// HTTP request failed (connection error, timeout, truncated body).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Upstream answered with something other than 200 OK.
    #[error("Upstream returned HTTP {status}")]
    UpstreamStatus {
        /// HTTP status code returned by the provider
        status: u16,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // REQUEST ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Hemisphere was neither `north` nor `south`.
    #[error("Invalid hemisphere '{0}': expected 'north' or 'south'")]
    InvalidHemisphere(String),

    /// A query or path parameter could not be parsed.
    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Raw value as received
        value: String,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // PAYLOAD & CONFIG
    // ═══════════════════════════════════════════════════════════════════════════

    /// Upstream body did not match the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl IcewatchError {
    /// Creates an `InvalidParameter` error.
    pub fn invalid_parameter(name: impl Into<String>, value: impl Into<String>) -> Self {
        IcewatchError::InvalidParameter {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns true if this error came from talking to the upstream provider.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            IcewatchError::Http(_) | IcewatchError::UpstreamStatus { .. }
        )
    }

    /// Returns true if this error was caused by bad client input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, IcewatchError::InvalidHemisphere(_))
    }
}
