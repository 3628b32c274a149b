//! In-memory single-slot status cache.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use icewatch_core::clock::Clock;
use icewatch_core::constants::STATUS_CACHE_TTL;
use icewatch_core::traits::IceDataSource;
use icewatch_core::types::StatusSnapshot;

/// The single cache slot. `last_update` is only ever set together with `snapshot`.
#[derive(Default)]
struct CacheEntry {
    snapshot: Option<StatusSnapshot>,
    last_update: Option<DateTime<Utc>>,
}

impl CacheEntry {
    fn fresh_snapshot(&self, now: DateTime<Utc>, ttl: Duration) -> Option<&StatusSnapshot> {
        match (&self.snapshot, self.last_update) {
            (Some(snapshot), Some(at)) if now - at <= ttl => Some(snapshot),
            _ => None,
        }
    }
}

/// Caches the full ice-sheet status.
///
/// The check-fetch-store sequence runs under one async mutex, so callers that
/// arrive while a refresh is in flight wait for it instead of issuing their own
/// upstream requests.
pub struct StatusCache {
    source: Arc<dyn IceDataSource>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    entry: Mutex<CacheEntry>,
}

impl StatusCache {
    /// Creates an empty cache over `source`.
    pub fn new(source: Arc<dyn IceDataSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            clock,
            ttl: Duration::seconds(STATUS_CACHE_TTL.as_secs() as i64),
            entry: Mutex::new(CacheEntry::default()),
        }
    }

    /// Returns the cached snapshot, refreshing it first if it is missing or
    /// older than the TTL.
    pub async fn get_cached_status(&self) -> StatusSnapshot {
        let mut entry = self.entry.lock().await;
        self.get_or_refresh(&mut entry).await
    }

    /// Evicts the entry and fetches a new snapshot.
    pub async fn force_refresh(&self) -> StatusSnapshot {
        let mut entry = self.entry.lock().await;
        entry.last_update = None;
        debug!("Status cache evicted");
        self.get_or_refresh(&mut entry).await
    }

    /// When the current entry was stored, if any.
    pub async fn last_update(&self) -> Option<DateTime<Utc>> {
        self.entry.lock().await.last_update
    }

    /// Returns true if the next read will go upstream.
    pub async fn is_stale(&self) -> bool {
        let now = self.clock.now();
        self.entry.lock().await.fresh_snapshot(now, self.ttl).is_none()
    }

    async fn get_or_refresh(&self, entry: &mut CacheEntry) -> StatusSnapshot {
        let now = self.clock.now();
        if let Some(snapshot) = entry.fresh_snapshot(now, self.ttl) {
            debug!("Status cache hit");
            return snapshot.clone();
        }

        // Stamped with the time the refresh started.
        let snapshot = self.source.ice_sheet_status().await;
        let refreshed_at = now;
        *entry = CacheEntry {
            snapshot: Some(snapshot.clone()),
            last_update: Some(refreshed_at),
        };

        info!(
            %refreshed_at,
            placeholder = snapshot.has_placeholder(),
            "Status cache refreshed"
        );
        snapshot
    }
}
