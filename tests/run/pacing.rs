use std::time::Duration;

use crate::common::StubFetcher;
use stock_quote_scraper::RunController;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn default_delays_apply_to_every_ticker() {
    let fetcher = StubFetcher::default().page("AAPL", "quote_header_AAPL.html");
    let controller = RunController::new(fetcher).unwrap();

    let started = Instant::now();
    let result = controller.run(["AAPL", "MISSING"]).await;

    // 3s before and 2s after each fetch, failed fetches included.
    assert!(started.elapsed() >= Duration::from_secs(10));
    assert_eq!(result.tickers_processed, 2);
}

#[tokio::test(start_paused = true)]
async fn custom_delays() {
    let fetcher = StubFetcher::default().page("AAPL", "quote_header_AAPL.html");
    let controller = RunController::new(fetcher)
        .unwrap()
        .pre_fetch_delay(Duration::from_millis(500))
        .post_fetch_delay(Duration::ZERO);

    let started = Instant::now();
    controller.run(["AAPL"]).await;
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(500));
    assert!(elapsed < Duration::from_secs(5));
}
