use url::Url;

use crate::core::ScrapeError;

/// Build the quote-page URL for a ticker: `{base}/{ticker}/`.
///
/// The ticker is appended as one path segment whether or not `base` ends in `/`.
/// Characters such as `/` or `%` are percent-encoded; [`ticker_from_url`] returns the
/// token as it appears in the URL and currency inference decodes it.
pub fn quote_url(base: &Url, ticker: &str) -> Result<Url, ScrapeError> {
    // Empty and dot segments would not survive as a path segment.
    if matches!(ticker, "" | "." | "..") {
        return Err(ScrapeError::Ticker(ticker.to_string()));
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .push(ticker)
        .push("");
    Ok(url)
}

/// Recover the ticker from a quote-page URL: the last path segment, or the one before
/// a trailing `/`. Empty for an empty URL.
pub fn ticker_from_url(url: &str) -> &str {
    let mut parts = url.rsplit('/');
    match parts.next() {
        Some("") => parts.next().unwrap_or(""),
        Some(last) => last,
        None => "",
    }
}
