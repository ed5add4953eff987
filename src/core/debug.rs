//! Debug dump helpers for investigating quote-page layout drift.

use std::io::Write;
use std::path::PathBuf;

/// `true` when `SCRAPE_DEBUG=1` is set.
pub(crate) fn enabled() -> bool {
    std::env::var("SCRAPE_DEBUG").ok().as_deref() == Some("1")
}

/// Temp-dir path for a ticker's dump; characters outside `[A-Za-z0-9._-]` become `_`.
pub(crate) fn dump_path(ticker: &str) -> PathBuf {
    let safe: String = ticker
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    std::env::temp_dir().join(format!("stock-quote-scraper-{safe}.html"))
}

pub(crate) fn debug_dump_html(ticker: &str, html: &str) -> std::io::Result<PathBuf> {
    let path = dump_path(ticker);
    let mut f = std::fs::File::create(&path)?;
    f.write_all(html.as_bytes())?;
    tracing::debug!("SCRAPE_DEBUG: wrote {}", path.display());
    Ok(path)
}
