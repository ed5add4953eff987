use std::time::Duration;

use stock_quote_scraper::{Currency, RunController, ScrapeClient, TickerStatus};

use crate::common;

#[tokio::test]
async fn scrapes_quote_pages_over_http() {
    let server = common::setup_server();
    let aapl = common::mock_quote_page(&server, "AAPL", "quote_header_AAPL.html");
    let vod = common::mock_quote_page(&server, "VOD.L", "both_layouts_VOD.L.html");

    let client = ScrapeClient::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let controller = RunController::new(client)
        .unwrap()
        .base_quote(common::base_quote(&server))
        .pre_fetch_delay(Duration::ZERO)
        .post_fetch_delay(Duration::ZERO);

    let result = controller.run(["AAPL", "VOD.L", "GONE"]).await;

    aapl.assert();
    vod.assert();
    assert_eq!(result.tickers_processed, 3);
    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[0].currency, Some(Currency::Usd));
    assert_eq!(result.records[1].currency, Some(Currency::Gbp));
    assert_eq!(result.records[1].company, "Vodafone Group Public Limited Company (VOD.L)");
    assert!(matches!(
        result.outcomes[2].status,
        TickerStatus::FetchFailed(_)
    ));
}
