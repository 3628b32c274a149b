//! # Icewatch NSIDC
//!
//! Fetches sea-ice extent from the NSIDC Sea Ice Index and normalizes the
//! answer into Icewatch types. When the provider cannot be reached, answers
//! with a non-2xx status, or returns something unreadable, the fetcher
//! synthesizes placeholder data from the calendar month instead of failing.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;
mod fetcher;
pub mod placeholder;

pub use client::{NsidcClient, NsidcConfig};
pub use fetcher::{FetchStats, IceDataFetcher};
