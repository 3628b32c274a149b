//! Combined status for both hemispheres.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ExtentReading;

/// Arctic and Antarctic readings captured together. This is the unit the
/// status cache stores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Northern hemisphere reading
    pub arctic: ExtentReading,
    /// Southern hemisphere reading
    pub antarctic: ExtentReading,
    /// When the snapshot was assembled
    pub last_updated: DateTime<Utc>,
}

impl StatusSnapshot {
    /// Returns true if either reading is synthesized.
    pub fn has_placeholder(&self) -> bool {
        self.arctic.is_placeholder() || self.antarctic.is_placeholder()
    }
}
