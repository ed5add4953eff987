use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed, or a ticker could not be joined onto the base URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A ticker that cannot be placed in a quote-page URL (empty, `.` or `..`).
    #[error("Invalid ticker: {0:?}")]
    Ticker(String),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A request header name or value was rejected while building the client.
    #[error("Invalid header `{name}`: {reason}")]
    Header {
        /// The offending header name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The ticker list could not be opened or read.
    #[error("Cannot read ticker file {}: {source}", path.display())]
    TickerFile {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Writing a CSV record failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Any other I/O failure (e.g. the report file could not be created).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
