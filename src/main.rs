use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use stock_quote_scraper::core::client::constants::{
    DEFAULT_BASE_QUOTE, DEFAULT_POST_FETCH_DELAY, DEFAULT_PRE_FETCH_DELAY,
};
use stock_quote_scraper::report::DEFAULT_REPORT_PATH;
use stock_quote_scraper::{ReportStatus, RunController, ScrapeClient, read_tickers, write_report};

/// Ticker to suggest for a manual check when nothing could be scraped.
const SANITY_CHECK_TICKER: &str = "WIPRO.BO";

#[derive(Parser, Debug)]
#[command(name = "stock-quote-scraper")]
#[command(about = "Scrape company, price, change and currency for a list of tickers into a CSV", long_about = None)]
#[command(version)]
struct Cli {
    /// Ticker list: one symbol per line, `#` comments and blank lines ignored
    #[arg(short, long, default_value = "tickers.txt")]
    tickers: PathBuf,

    /// Output CSV file (overwritten)
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    output: PathBuf,

    /// Quote page base URL; the ticker and a trailing `/` are appended
    #[arg(long, default_value = DEFAULT_BASE_QUOTE)]
    base_url: Url,

    /// Seconds to wait before each fetch
    #[arg(long, default_value_t = DEFAULT_PRE_FETCH_DELAY.as_secs_f64())]
    pre_delay: f64,

    /// Seconds to wait after each fetch
    #[arg(long, default_value_t = DEFAULT_POST_FETCH_DELAY.as_secs_f64())]
    post_delay: f64,

    /// Overall request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Debug logging (currency decisions, diagnostic element traces)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn seconds(value: f64) -> Duration {
    Duration::try_from_secs_f64(value).unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let tickers = read_tickers(&cli.tickers)?;
    tracing::info!("Loaded {} tickers from {}", tickers.len(), cli.tickers.display());

    let client = ScrapeClient::builder()
        .timeout(Duration::from_secs(cli.timeout))
        .build()?;
    let controller = RunController::new(client)?
        .base_quote(cli.base_url)
        .pre_fetch_delay(seconds(cli.pre_delay))
        .post_fetch_delay(seconds(cli.post_delay));

    let result = controller.run(&tickers).await;
    tracing::info!(
        "Total stocks scraped: {} ({} tickers, {} fetch failures)",
        result.records.len(),
        result.tickers_processed,
        result.failed_fetches()
    );

    match write_report(&cli.output, &result, chrono::Local::now())? {
        ReportStatus::Written => {
            tracing::info!("Data saved to {} with metadata", cli.output.display());
        }
        ReportStatus::Skipped => {
            tracing::warn!("No stock data was scraped.");
            if let Ok(url) = controller.quote_url(SANITY_CHECK_TICKER) {
                tracing::warn!("Try manually visiting {url} to check if the page loads correctly.");
            }
            tracing::warn!(
                "The page structure might have changed or the site might be blocking requests."
            );
        }
    }

    Ok(())
}
