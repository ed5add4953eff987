use std::future::Future;

use url::Url;

use crate::core::ScrapeError;

/// Fetch collaborator seam: turns a quote-page URL into the page body.
///
/// Implementations report transport failures and non-success statuses as errors;
/// the run loop logs them and moves on to the next ticker.
pub trait PageFetcher {
    fn fetch_page(&self, url: &Url) -> impl Future<Output = Result<String, ScrapeError>> + Send;
}

/// Read the response body as text.
/// In debug builds (or with `debug-dumps`), if `SCRAPE_DEBUG=1`, the body is also written to the temp dir.
pub(crate) async fn get_text(resp: reqwest::Response, _ticker: &str) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(any(debug_assertions, feature = "debug-dumps"))]
    {
        if crate::core::debug::enabled()
            && let Err(e) = crate::core::debug::debug_dump_html(_ticker, &text)
        {
            tracing::warn!("SCRAPE_DEBUG: failed to write page dump for {_ticker}: {e}");
        }
    }

    Ok(text)
}
