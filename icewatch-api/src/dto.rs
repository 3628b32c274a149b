//! Response envelopes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use icewatch_core::types::ExtentReading;

/// `{"status": "success", "data": ..., "timestamp": ...}`
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    /// Always `"success"`
    pub status: &'static str,
    /// Payload
    pub data: T,
    /// When the response was produced
    pub timestamp: DateTime<Utc>,
}

impl<T> SuccessResponse<T> {
    /// Wraps `data` in a success envelope stamped with `timestamp`.
    pub fn new(data: T, timestamp: DateTime<Utc>) -> Self {
        Self {
            status: "success",
            data,
            timestamp,
        }
    }
}

/// Current readings for both hemispheres.
#[derive(Debug, Serialize)]
pub struct CurrentExtentDto {
    /// Northern hemisphere
    pub arctic: ExtentReading,
    /// Southern hemisphere
    pub antarctic: ExtentReading,
}

/// Success envelope carrying a message instead of data.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Always `"success"`
    pub status: &'static str,
    /// Human-readable outcome
    pub message: String,
    /// When the response was produced
    pub timestamp: DateTime<Utc>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"`
    pub status: &'static str,
    /// Service name
    pub service: &'static str,
    /// Service version
    pub version: &'static str,
    /// When the response was produced
    pub timestamp: DateTime<Utc>,
}
