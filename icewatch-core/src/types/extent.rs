//! Extent readings and monthly records.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::PLACEHOLDER_DATA_SOURCE;
use crate::types::Hemisphere;

/// Current sea-ice extent for one hemisphere.
///
/// Built either from an upstream response or from placeholder synthesis;
/// `data_source` tells the two apart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtentReading {
    /// Region the reading covers
    pub hemisphere: Hemisphere,
    /// Observation date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Extent in million km²
    pub extent_million_km2: f64,
    /// Area in million km²
    pub area_million_km2: f64,
    /// Provenance tag
    pub data_source: String,
    /// When this reading was produced
    pub timestamp: DateTime<Utc>,
    /// Optional explanation, set on placeholder readings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ExtentReading {
    /// Returns true if this reading was synthesized rather than fetched.
    pub fn is_placeholder(&self) -> bool {
        self.data_source == PLACEHOLDER_DATA_SOURCE
    }
}

/// Extent and area for a single calendar month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// Month number, 1..=12
    pub month: u32,
    /// Extent in million km²
    pub extent: f64,
    /// Area in million km²
    pub area: f64,
}

/// Monthly series for one hemisphere and year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Calendar year
    pub year: i32,
    /// Region the series covers
    pub hemisphere: Hemisphere,
    /// Points in month order
    pub monthly_data: Vec<MonthlyPoint>,
}

impl MonthlyRecord {
    /// Looks up the point for `month`.
    pub fn month(&self, month: u32) -> Option<&MonthlyPoint> {
        self.monthly_data.iter().find(|p| p.month == month)
    }
}

/// Year → monthly series. Serializes as a JSON object keyed by year.
pub type HistoricalComparison = BTreeMap<i32, MonthlyRecord>;
