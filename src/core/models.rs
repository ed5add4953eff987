use chrono::{DateTime, Local};
use serde::Serialize;

use crate::core::currency::Currency;

/// Display format for extraction and report timestamps (local or UTC, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One ticker's extracted quote.
///
/// `price` and `change` keep the page's own formatting (`"1,234.50"`, `"+0.87%"`).
/// Serializes as the four report columns; `timestamp` is not part of the report rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockRecord {
    pub company: String,
    pub price: String,
    pub change: String,
    /// `None` for indices, futures and other symbols without a trading currency.
    pub currency: Option<Currency>,
    #[serde(skip_serializing)]
    pub timestamp: DateTime<Local>,
}

impl StockRecord {
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Price suffixed with the currency code when one applies, e.g. `"189.84 USD"`.
    pub fn price_display(&self) -> String {
        match self.currency {
            Some(c) => format!("{} {}", self.price, c),
            None => self.price.clone(),
        }
    }
}

/// What happened to a single ticker during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerStatus {
    /// A record was extracted.
    Scraped,
    /// The page was fetched but no strategy matched.
    NoData,
    /// The page could not be fetched.
    FetchFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerOutcome {
    pub ticker: String,
    pub status: TickerStatus,
}

/// Aggregate of a whole run, in ticker order.
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub records: Vec<StockRecord>,
    pub tickers_processed: usize,
    pub outcomes: Vec<TickerOutcome>,
}

impl RunResult {
    /// `records / tickers_processed * 100`, or `0.0` when nothing was processed.
    pub fn success_rate(&self) -> f64 {
        if self.tickers_processed == 0 {
            return 0.0;
        }
        self.records.len() as f64 / self.tickers_processed as f64 * 100.0
    }

    pub fn failed_fetches(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, TickerStatus::FetchFailed(_)))
            .count()
    }
}
