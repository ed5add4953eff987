//! Sequential run loop: one ticker at a time with fixed politeness delays.

use std::time::Duration;

use url::Url;

use crate::core::client::constants::{
    DEFAULT_BASE_QUOTE, DEFAULT_POST_FETCH_DELAY, DEFAULT_PRE_FETCH_DELAY,
};
use crate::core::{PageFetcher, RunResult, ScrapeError, StockRecord, TickerOutcome, TickerStatus};
use crate::extract::FieldExtractor;
use crate::ticker::quote_url;

/// Drives a scrape: for each ticker, wait, fetch, wait, extract, aggregate.
///
/// Only one fetch is ever in flight. Fetch failures are logged and recorded in the
/// ticker's outcome; they never stop the run.
#[derive(Debug)]
pub struct RunController<F> {
    fetcher: F,
    extractor: FieldExtractor,
    base_quote: Url,
    pre_fetch_delay: Duration,
    post_fetch_delay: Duration,
}

impl<F: PageFetcher> RunController<F> {
    /// Controller with the default base URL, extractor and delays.
    pub fn new(fetcher: F) -> Result<Self, ScrapeError> {
        Ok(Self {
            fetcher,
            extractor: FieldExtractor::default(),
            base_quote: Url::parse(DEFAULT_BASE_QUOTE)?,
            pre_fetch_delay: DEFAULT_PRE_FETCH_DELAY,
            post_fetch_delay: DEFAULT_POST_FETCH_DELAY,
        })
    }

    /// Override the quote page base (e.g., `https://finance.yahoo.com/quote/`).
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = url;
        self
    }

    pub fn pre_fetch_delay(mut self, delay: Duration) -> Self {
        self.pre_fetch_delay = delay;
        self
    }

    pub fn post_fetch_delay(mut self, delay: Duration) -> Self {
        self.post_fetch_delay = delay;
        self
    }

    pub fn extractor(mut self, extractor: FieldExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// The quote-page URL this controller would fetch for `ticker`.
    pub fn quote_url(&self, ticker: &str) -> Result<Url, ScrapeError> {
        quote_url(&self.base_quote, ticker)
    }

    /// Process every ticker in order and aggregate the records.
    pub async fn run<I, S>(&self, tickers: I) -> RunResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = RunResult::default();

        for ticker in tickers {
            let ticker = ticker.as_ref();
            let status = match self.scrape_ticker(ticker).await {
                Ok(Some(record)) => {
                    tracing::info!("Successfully scraped {ticker}");
                    result.records.push(record);
                    TickerStatus::Scraped
                }
                Ok(None) => {
                    tracing::info!("No data found for {ticker}");
                    TickerStatus::NoData
                }
                Err(e) => {
                    tracing::warn!("Something went wrong for {ticker}: {e}");
                    TickerStatus::FetchFailed(e.to_string())
                }
            };
            result.tickers_processed += 1;
            result.outcomes.push(TickerOutcome {
                ticker: ticker.to_string(),
                status,
            });
        }

        result
    }

    /// One iteration; the returned value is this ticker's result slot, so nothing carries
    /// over between tickers.
    #[tracing::instrument(skip_all, fields(ticker = %ticker))]
    async fn scrape_ticker(&self, ticker: &str) -> Result<Option<StockRecord>, ScrapeError> {
        tokio::time::sleep(self.pre_fetch_delay).await;

        tracing::info!("=== Scraping {ticker} ===");
        let url = self.quote_url(ticker)?;
        let fetched = self.fetcher.fetch_page(&url).await;

        tokio::time::sleep(self.post_fetch_delay).await;

        let body = fetched?;
        Ok(self.extractor.extract_html(&body, url.as_str()))
    }
}
