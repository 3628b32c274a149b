//! # Icewatch Core
//!
//! Core types, errors, and traits for the Icewatch polar sea-ice monitor.
//!
//! This crate provides the foundational building blocks used by all other Icewatch crates:
//!
//! - **Types**: hemispheres, extent readings, monthly records, status snapshots
//! - **Errors**: a single error enum with context
//! - **Constants**: upstream defaults, placeholder tags, cache TTL
//! - **Traits**: the [`Clock`] and [`IceDataSource`] seams used for injection
//!
//! ## Example
//!
//! ```rust
//! use icewatch_core::Hemisphere;
//!
//! let h: Hemisphere = "north".parse().unwrap();
//! assert_eq!(h.label(), "Arctic");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod clock;
pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use clock::{Clock, ManualClock, SystemClock};
pub use constants::*;
pub use error::{IcewatchError, Result};
pub use traits::*;
pub use types::*;
