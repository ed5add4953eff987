use httpmock::Method::GET;
use stock_quote_scraper::core::client::constants::USER_AGENT;
use stock_quote_scraper::{PageFetcher, ScrapeClient, ScrapeError};

use crate::common;

#[tokio::test]
async fn sends_browser_header_table() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/quote/AAPL/")
            .header("user-agent", USER_AGENT)
            .header("accept-language", "en-US,en;q=0.9")
            .header("cache-control", "no-cache")
            .header("upgrade-insecure-requests", "1")
            .header_exists("accept");
        then.status(200).body("<html></html>");
    });

    let client = ScrapeClient::builder().build().unwrap();
    let url = common::base_quote(&server).join("AAPL/").unwrap();
    let body = client.fetch_page(&url).await.unwrap();

    mock.assert();
    assert_eq!(body, "<html></html>");
}

#[tokio::test]
async fn header_overrides_replace_defaults() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/quote/AAPL/")
            .header("user-agent", "scraper-test/1.0")
            .header("accept-language", "en-GB");
        then.status(200).body("ok");
    });

    let client = ScrapeClient::builder()
        .user_agent("scraper-test/1.0")
        .header("Accept-Language", "en-GB")
        .build()
        .unwrap();
    let url = common::base_quote(&server).join("AAPL/").unwrap();
    client.fetch_page(&url).await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/quote/NOPE/");
        then.status(404).body("not found");
    });

    let client = ScrapeClient::builder().build().unwrap();
    let url = common::base_quote(&server).join("NOPE/").unwrap();
    let err = client.fetch_page(&url).await.unwrap_err();

    mock.assert();
    match err {
        ScrapeError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/quote/NOPE/"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}
