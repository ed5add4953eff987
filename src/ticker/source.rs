use std::path::Path;

use crate::core::ScrapeError;

/// Parse a ticker list: one symbol per line, blank lines and `#` comments skipped,
/// surrounding whitespace trimmed.
pub fn parse_tickers(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read and parse a ticker file. Failing to read it is fatal for a run.
pub fn read_tickers(path: impl AsRef<Path>) -> Result<Vec<String>, ScrapeError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ScrapeError::TickerFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_tickers(&text))
}
