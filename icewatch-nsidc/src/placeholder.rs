//! Placeholder synthesis.
//!
//! Deterministic stand-in values derived from the calendar month, used when
//! the upstream provider is unavailable. Extent is floored at
//! [`MIN_PLACEHOLDER_EXTENT`]; area is 85% of the *unfloored* extent, floored
//! at [`MIN_PLACEHOLDER_AREA`].

use chrono::{DateTime, Datelike, Utc};

use icewatch_core::constants::{
    AREA_TO_EXTENT_RATIO, MIN_PLACEHOLDER_AREA, MIN_PLACEHOLDER_EXTENT, PLACEHOLDER_DATA_SOURCE,
    PLACEHOLDER_NOTE,
};
use icewatch_core::types::{ExtentReading, Hemisphere, MonthlyPoint, MonthlyRecord};

/// Raw (unfloored) current extent for `month`, anchored on June.
pub fn raw_current_extent(hemisphere: Hemisphere, month: u32) -> f64 {
    let offset = month as f64 - 6.0;
    match hemisphere {
        Hemisphere::North => 13.5 + offset * -0.8,
        Hemisphere::South => 18.2 - offset * 0.6,
    }
}

/// Raw (unfloored) monthly extent for `month`, anchored on March.
pub fn raw_monthly_extent(hemisphere: Hemisphere, month: u32) -> f64 {
    let offset = month as f64 - 3.0;
    match hemisphere {
        Hemisphere::North => 14.0 + offset * -0.9,
        Hemisphere::South => 18.0 - offset * 0.7,
    }
}

fn extent_and_area(raw_extent: f64) -> (f64, f64) {
    (
        raw_extent.max(MIN_PLACEHOLDER_EXTENT),
        (raw_extent * AREA_TO_EXTENT_RATIO).max(MIN_PLACEHOLDER_AREA),
    )
}

/// Synthesized current reading for `hemisphere` as of `now`.
pub fn current_reading(hemisphere: Hemisphere, now: DateTime<Utc>) -> ExtentReading {
    let (extent, area) = extent_and_area(raw_current_extent(hemisphere, now.month()));

    ExtentReading {
        hemisphere,
        date: now.date_naive(),
        extent_million_km2: extent,
        area_million_km2: area,
        data_source: PLACEHOLDER_DATA_SOURCE.into(),
        timestamp: now,
        note: Some(PLACEHOLDER_NOTE.into()),
    }
}

/// Synthesized twelve-month series for `hemisphere` and `year`.
pub fn monthly_record(hemisphere: Hemisphere, year: i32) -> MonthlyRecord {
    let monthly_data = (1..=12)
        .map(|month| {
            let (extent, area) = extent_and_area(raw_monthly_extent(hemisphere, month));
            MonthlyPoint { month, extent, area }
        })
        .collect();

    MonthlyRecord {
        year,
        hemisphere,
        monthly_data,
    }
}
