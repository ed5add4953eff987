//! Field extraction: an ordered chain of layout strategies over a parsed quote page.
//!
//! Each [`ExtractionStrategy`] recognizes one page layout. [`FieldExtractor`] tries them in
//! priority order and stops at the first that yields fields, so a page produces at most
//! one [`StockRecord`]. Supporting a new layout means adding a strategy to the chain.

mod helpers;
mod strategies;

use chrono::Local;
use scraper::Html;

use crate::core::{StockRecord, infer_currency};
use crate::ticker::ticker_from_url;

pub use strategies::{Diagnostic, PriceAnchor, QuoteHeader, StreamerAnchor};

/// Raw display strings recovered by a strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteFields {
    pub company: String,
    pub price: String,
    pub change: String,
}

/// One way of locating the quote fields in a page.
pub trait ExtractionStrategy: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Observability-only strategies return `false` and stay at the end of the chain.
    fn yields_records(&self) -> bool {
        true
    }

    /// Return the fields if this strategy recognizes `document`, `None` to decline.
    fn attempt(&self, document: &Html, ticker: &str) -> Option<QuoteFields>;
}

/// Ordered strategy chain with short-circuit on the first success.
pub struct FieldExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self {
            strategies: vec![
                Box::new(QuoteHeader),
                Box::new(PriceAnchor),
                Box::new(StreamerAnchor),
                Box::new(Diagnostic),
            ],
        }
    }
}

impl std::fmt::Debug for FieldExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldExtractor")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}

impl FieldExtractor {
    /// The default chain: quote header, price anchor, streamer anchor, diagnostics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a strategy after the existing record-yielding ones (ahead of diagnostics).
    pub fn with_strategy(mut self, strategy: impl ExtractionStrategy + 'static) -> Self {
        let at = self
            .strategies
            .iter()
            .rposition(|s| s.yields_records())
            .map_or(0, |i| i + 1);
        self.strategies.insert(at, Box::new(strategy));
        self
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Parse `html` and run [`FieldExtractor::extract`].
    pub fn extract_html(&self, html: &str, request_url: &str) -> Option<StockRecord> {
        let document = Html::parse_document(html);
        self.extract(&document, request_url)
    }

    /// Run the chain over `document`, fetched from `request_url`.
    ///
    /// Currency is inferred from the ticker recovered out of `request_url`, and the record is
    /// stamped with the current local time. `None` means no strategy recognized the page.
    pub fn extract(&self, document: &Html, request_url: &str) -> Option<StockRecord> {
        let ticker = ticker_from_url(request_url);

        let (name, fields) = self
            .strategies
            .iter()
            .find_map(|s| s.attempt(document, ticker).map(|f| (s.name(), f)))?;

        let record = StockRecord {
            company: fields.company,
            price: fields.price,
            change: fields.change,
            currency: infer_currency(ticker),
            timestamp: Local::now(),
        };

        tracing::info!(
            "Found via {name}: Company: {} | Price: {} | Change: {}",
            record.company,
            record.price_display(),
            record.change
        );
        Some(record)
    }
}
