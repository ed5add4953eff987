//! CSV report: data rows followed by a metadata block.

use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local, Utc};

use crate::core::models::TIMESTAMP_FORMAT;
use crate::core::{RunResult, ScrapeError};

/// Default report file name.
pub const DEFAULT_REPORT_PATH: &str = "stocks.csv";

/// Whether [`write_report`] produced a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Written,
    /// Nothing was scraped, so no file was created.
    Skipped,
}

/// Write `result` to `path`, overwriting any existing file. No file is created for a run
/// without records.
pub fn write_report(
    path: impl AsRef<Path>,
    result: &RunResult,
    generated_at: DateTime<Local>,
) -> Result<ReportStatus, ScrapeError> {
    if result.records.is_empty() {
        return Ok(ReportStatus::Skipped);
    }

    let file = std::fs::File::create(path.as_ref())?;
    write_csv(file, result, generated_at)?;
    Ok(ReportStatus::Written)
}

/// Layout: `company,price,change,currency` header, one row per record, a blank row, then
/// `METADATA` and its label/value rows padded to four columns.
pub fn write_csv<W: io::Write>(
    writer: W,
    result: &RunResult,
    generated_at: DateTime<Local>,
) -> Result<(), ScrapeError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in &result.records {
        wtr.serialize(record)?;
    }

    // csv renders an empty record as `""`, so the separator goes straight to the sink.
    let mut writer = wtr.into_inner().map_err(|e| e.into_error())?;
    writer.write_all(b"\n")?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for (label, value) in metadata_rows(result, generated_at) {
        wtr.write_record([label, value.as_str(), "", ""])?;
    }

    wtr.flush()?;
    Ok(())
}

fn metadata_rows(result: &RunResult, generated_at: DateTime<Local>) -> Vec<(&'static str, String)> {
    vec![
        ("METADATA", String::new()),
        ("Last Updated", generated_at.format(TIMESTAMP_FORMAT).to_string()),
        (
            "Last Updated (UTC)",
            generated_at.with_timezone(&Utc).format(TIMESTAMP_FORMAT).to_string(),
        ),
        ("Total Stocks Scraped", result.records.len().to_string()),
        ("Total Tickers Processed", result.tickers_processed.to_string()),
        ("Success Rate", format!("{:.1}%", result.success_rate())),
    ]
}
