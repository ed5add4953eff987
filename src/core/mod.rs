//! Core components of the scraper.
//!
//! This module contains the foundational building blocks, including:
//! - The HTTP fetch collaborator [`ScrapeClient`] and its builder.
//! - The primary [`ScrapeError`] type.
//! - Shared data models like [`StockRecord`] and [`RunResult`].
//! - Currency inference from ticker syntax.

/// The HTTP client (`ScrapeClient`), builder, and default constants.
pub mod client;
/// Ticker → trading currency inference.
pub mod currency;
/// The primary error type (`ScrapeError`) for the crate.
pub mod error;
/// Records and run aggregates shared across modules.
pub mod models;
pub mod net;

#[cfg(any(debug_assertions, feature = "debug-dumps"))]
pub(crate) mod debug;

// convenient re-exports so most code can just `use crate::core::ScrapeClient`
pub use client::{ScrapeClient, ScrapeClientBuilder};
pub use currency::{Currency, infer_currency};
pub use error::ScrapeError;
pub use models::{RunResult, StockRecord, TickerOutcome, TickerStatus};
pub use net::PageFetcher;
