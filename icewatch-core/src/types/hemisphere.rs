//! Hemisphere selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IcewatchError;

/// Sea-ice region. Serializes as `"north"` / `"south"`, which is also the
/// path segment the upstream provider expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    /// Arctic
    North,
    /// Antarctic
    South,
}

impl Hemisphere {
    /// Both hemispheres, Arctic first.
    pub const ALL: [Hemisphere; 2] = [Hemisphere::North, Hemisphere::South];

    /// Upstream / wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Hemisphere::North => "north",
            Hemisphere::South => "south",
        }
    }

    /// Display name of the polar region.
    pub fn label(&self) -> &'static str {
        match self {
            Hemisphere::North => "Arctic",
            Hemisphere::South => "Antarctic",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hemisphere {
    type Err = IcewatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(Hemisphere::North),
            "south" => Ok(Hemisphere::South),
            _ => Err(IcewatchError::InvalidHemisphere(s.to_string())),
        }
    }
}
