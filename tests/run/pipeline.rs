use std::fs;
use std::time::Duration;

use crate::common::StubFetcher;
use stock_quote_scraper::{
    ReportStatus, RunController, TickerStatus, read_tickers, write_report,
};

fn controller(fetcher: StubFetcher) -> RunController<StubFetcher> {
    RunController::new(fetcher)
        .unwrap()
        .pre_fetch_delay(Duration::ZERO)
        .post_fetch_delay(Duration::ZERO)
}

#[tokio::test]
async fn ticker_file_to_report() {
    let dir = tempfile::tempdir().unwrap();
    let tickers_path = dir.path().join("tickers.txt");
    fs::write(&tickers_path, "AAPL\n# indices\n\n  ^GSPC  \n").unwrap();

    let tickers = read_tickers(&tickers_path).unwrap();
    assert_eq!(tickers, vec!["AAPL", "^GSPC"]);

    let fetcher = StubFetcher::default()
        .page("AAPL", "quote_header_AAPL.html")
        .page("^GSPC", "streamer_GSPC.html");
    let result = controller(fetcher).run(&tickers).await;

    assert_eq!(result.tickers_processed, 2);
    assert_eq!(result.records.len(), 2);
    assert_eq!(result.success_rate(), 100.0);

    let out = dir.path().join("stocks.csv");
    let status = write_report(&out, &result, chrono::Local::now()).unwrap();
    assert_eq!(status, ReportStatus::Written);

    let csv = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "company,price,change,currency");
    assert_eq!(lines[1], "Apple Inc. (AAPL),189.84,(+0.87%),USD");
    assert_eq!(lines[2], "S&P 500 (^GSPC),\"5,137.08\",+0.80%,");
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "METADATA,,,");
    assert!(csv.contains("Total Stocks Scraped,2,,"));
    assert!(csv.contains("Total Tickers Processed,2,,"));
    assert!(csv.contains("Success Rate,100.0%,,"));
}

#[tokio::test]
async fn failures_do_not_stop_the_run() {
    let fetcher = StubFetcher::default()
        .page("VOD.L", "both_layouts_VOD.L.html")
        .page("CONSENT", "consent_page.html");
    let controller = controller(fetcher);

    let result = controller.run(["MISSING", "CONSENT", "VOD.L"]).await;

    assert_eq!(result.tickers_processed, 3);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].price, "71.24");
    assert_eq!(result.failed_fetches(), 1);

    let statuses: Vec<_> = result.outcomes.iter().map(|o| &o.status).collect();
    assert!(matches!(statuses[0], TickerStatus::FetchFailed(msg) if msg.contains("404")));
    assert_eq!(statuses[1], &TickerStatus::NoData);
    assert_eq!(statuses[2], &TickerStatus::Scraped);
    assert!((result.success_rate() - 100.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn records_keep_input_order() {
    let fetcher = StubFetcher::default()
        .page("WIPRO.BO", "price_anchor_WIPRO.BO.html")
        .page("AAPL", "quote_header_AAPL.html");

    let result = controller(fetcher).run(["WIPRO.BO", "AAPL"]).await;
    let companies: Vec<_> = result.records.iter().map(|r| r.company.as_str()).collect();
    assert_eq!(companies, ["Wipro Limited (WIPRO.BO)", "Apple Inc. (AAPL)"]);
}

#[tokio::test]
async fn empty_ticker_list_fetches_nothing_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let tickers_path = dir.path().join("tickers.txt");
    fs::write(&tickers_path, "# nothing yet\n\n").unwrap();
    let tickers = read_tickers(&tickers_path).unwrap();

    let controller = controller(StubFetcher::default());
    let result = controller.run(&tickers).await;
    assert_eq!(result.tickers_processed, 0);
    assert_eq!(result.success_rate(), 0.0);

    let out = dir.path().join("stocks.csv");
    let status = write_report(&out, &result, chrono::Local::now()).unwrap();
    assert_eq!(status, ReportStatus::Skipped);
    assert!(!out.exists());
}

#[tokio::test]
async fn tickers_are_requested_relative_to_base() {
    let fetcher = StubFetcher::default();
    let controller = controller(fetcher)
        .base_quote(url::Url::parse("http://localhost:9/q/").unwrap());

    let url = controller.quote_url("BRK-B").unwrap();
    assert_eq!(url.as_str(), "http://localhost:9/q/BRK-B/");
}
