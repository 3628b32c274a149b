//! Fetcher with placeholder fallback.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use icewatch_core::clock::Clock;
use icewatch_core::constants::LIVE_DATA_SOURCE;
use icewatch_core::error::{IcewatchError, Result};
use icewatch_core::traits::IceDataSource;
use icewatch_core::types::{ExtentReading, HistoricalComparison, Hemisphere, MonthlyRecord, StatusSnapshot};

use crate::client::{NsidcClient, NsidcConfig};
use crate::placeholder;

/// Counts of live vs. synthesized responses since startup.
#[derive(Debug, Default)]
pub struct FetchStats {
    live: AtomicU64,
    placeholder: AtomicU64,
}

impl FetchStats {
    /// Responses built from upstream data.
    pub fn live(&self) -> u64 {
        self.live.load(Ordering::Relaxed)
    }

    /// Responses built from placeholder synthesis.
    pub fn placeholder(&self) -> u64 {
        self.placeholder.load(Ordering::Relaxed)
    }

    fn record_live(&self) {
        self.live.fetch_add(1, Ordering::Relaxed);
    }

    fn record_placeholder(&self) {
        self.placeholder.fetch_add(1, Ordering::Relaxed);
    }
}

fn fallback_reason(err: &IcewatchError) -> &'static str {
    if err.is_upstream() {
        "unreachable"
    } else {
        "unreadable"
    }
}

/// Sea-ice data fetcher.
///
/// Never fails: upstream errors are logged and replaced with placeholder
/// values. Each call makes exactly one upstream attempt.
pub struct IceDataFetcher {
    client: NsidcClient,
    clock: Arc<dyn Clock>,
    stats: FetchStats,
}

impl IceDataFetcher {
    /// Creates a fetcher for the given upstream config.
    pub fn new(config: NsidcConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        Ok(Self::with_client(NsidcClient::with_config(config)?, clock))
    }

    /// Creates a fetcher around an existing client.
    pub fn with_client(client: NsidcClient, clock: Arc<dyn Clock>) -> Self {
        Self {
            client,
            clock,
            stats: FetchStats::default(),
        }
    }

    /// Live/placeholder counters.
    pub fn stats(&self) -> &FetchStats {
        &self.stats
    }

    /// Latest daily extent, or a placeholder if the upstream call fails.
    #[instrument(skip(self))]
    pub async fn fetch_current_extent(&self, hemisphere: Hemisphere) -> ExtentReading {
        match self.client.latest_extent(hemisphere).await {
            Ok(body) => {
                let now = self.clock.now();
                self.stats.record_live();
                info!(%hemisphere, source = "live", "Fetched current extent");

                ExtentReading {
                    hemisphere,
                    date: body.reading_date().unwrap_or_else(|| now.date_naive()),
                    extent_million_km2: body.extent.unwrap_or(0.0),
                    area_million_km2: body.area.unwrap_or(0.0),
                    data_source: LIVE_DATA_SOURCE.into(),
                    timestamp: now,
                    note: None,
                }
            }
            Err(err) => {
                self.stats.record_placeholder();
                warn!(
                    %hemisphere,
                    source = "placeholder",
                    reason = fallback_reason(&err),
                    error = %err,
                    "Current extent unavailable, using placeholder"
                );
                placeholder::current_reading(hemisphere, self.clock.now())
            }
        }
    }

    /// Monthly series, or a synthesized twelve-month series if the upstream call fails.
    #[instrument(skip(self))]
    pub async fn fetch_monthly_data(&self, hemisphere: Hemisphere, year: i32) -> MonthlyRecord {
        match self.client.monthly_extent(hemisphere, year).await {
            Ok(record) => {
                self.stats.record_live();
                info!(%hemisphere, year, source = "live", "Fetched monthly data");
                record
            }
            Err(err) => {
                self.stats.record_placeholder();
                warn!(
                    %hemisphere,
                    year,
                    source = "placeholder",
                    reason = fallback_reason(&err),
                    error = %err,
                    "Monthly data unavailable, using placeholder"
                );
                placeholder::monthly_record(hemisphere, year)
            }
        }
    }

    /// Monthly series for each requested year, keyed by year.
    pub async fn fetch_historical_comparison(
        &self,
        hemisphere: Hemisphere,
        years: &[i32],
    ) -> HistoricalComparison {
        self.historical_comparison(hemisphere, years).await
    }

    /// Both hemispheres, fetched concurrently, stamped with the current time.
    pub async fn get_ice_sheet_status(&self) -> StatusSnapshot {
        let (arctic, antarctic) = tokio::join!(
            self.fetch_current_extent(Hemisphere::North),
            self.fetch_current_extent(Hemisphere::South),
        );

        StatusSnapshot {
            arctic,
            antarctic,
            last_updated: self.clock.now(),
        }
    }
}

#[async_trait]
impl IceDataSource for IceDataFetcher {
    async fn current_extent(&self, hemisphere: Hemisphere) -> ExtentReading {
        self.fetch_current_extent(hemisphere).await
    }

    async fn monthly_data(&self, hemisphere: Hemisphere, year: i32) -> MonthlyRecord {
        self.fetch_monthly_data(hemisphere, year).await
    }

    async fn ice_sheet_status(&self) -> StatusSnapshot {
        self.get_ice_sheet_status().await
    }
}
