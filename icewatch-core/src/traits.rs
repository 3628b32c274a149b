//! Common traits for Icewatch.
//!
//! [`IceDataSource`] is the seam between the HTTP layer / status cache and
//! whatever produces ice data, so tests can swap in counting stubs.

use async_trait::async_trait;

use crate::types::{ExtentReading, HistoricalComparison, Hemisphere, MonthlyRecord, StatusSnapshot};

/// Produces sea-ice data.
///
/// Methods are infallible: an implementation is expected to absorb upstream
/// failures and return placeholder data instead.
#[async_trait]
pub trait IceDataSource: Send + Sync {
    /// Latest daily extent for one hemisphere.
    async fn current_extent(&self, hemisphere: Hemisphere) -> ExtentReading;

    /// Monthly extent series for one hemisphere and year.
    async fn monthly_data(&self, hemisphere: Hemisphere, year: i32) -> MonthlyRecord;

    /// Arctic and Antarctic readings stamped with a common `last_updated`.
    async fn ice_sheet_status(&self) -> StatusSnapshot;

    /// Monthly series for each year, fetched in the order given.
    ///
    /// Repeated years are fetched again and the later result replaces the
    /// earlier one.
    async fn historical_comparison(
        &self,
        hemisphere: Hemisphere,
        years: &[i32],
    ) -> HistoricalComparison {
        let mut comparison = HistoricalComparison::new();
        for &year in years {
            let record = self.monthly_data(hemisphere, year).await;
            comparison.insert(year, record);
        }
        comparison
    }
}
