//! Ticker symbols: reading the input list and mapping tickers to and from quote-page URLs.

mod codec;
mod source;

pub use codec::{quote_url, ticker_from_url};
pub use source::{parse_tickers, read_tickers};
