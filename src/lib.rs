//! stock-quote-scraper: batch scraper for finance quote pages.
//!
//! For every ticker in a list the quote page is fetched, a chain of layout strategies
//! recovers company, price and percent change, the trading currency is inferred from
//! the ticker's exchange suffix, and the results are written to a CSV report.
//!
//! ```no_run
//! use stock_quote_scraper::{RunController, ScrapeClient, report};
//!
//! # async fn demo() -> Result<(), stock_quote_scraper::ScrapeError> {
//! let client = ScrapeClient::builder().build()?;
//! let result = RunController::new(client)?.run(["AAPL", "WIPRO.BO"]).await;
//! report::write_report("stocks.csv", &result, chrono::Local::now())?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod extract;
pub mod report;
pub mod run;
pub mod ticker;

pub use crate::core::{
    Currency, PageFetcher, RunResult, ScrapeClient, ScrapeClientBuilder, ScrapeError,
    StockRecord, TickerOutcome, TickerStatus, infer_currency,
};
pub use extract::{ExtractionStrategy, FieldExtractor, QuoteFields};
pub use report::{ReportStatus, write_report};
pub use run::RunController;
pub use ticker::{parse_tickers, quote_url, read_tickers, ticker_from_url};
