//! TTL cache for Icewatch status snapshots.
//!
//! One entry, refreshed lazily on read once it is older than six hours.

mod cache;

pub use cache::StatusCache;
