//! Centralized constants for the default endpoint, browser headers and politeness delays.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/120.0.0.0 Safari/537.36"
);

/// Quote page base (ticker plus a trailing `/` is appended).
pub const DEFAULT_BASE_QUOTE: &str = "https://finance.yahoo.com/quote/";

/// Browser-like header set sent with every page request, in addition to `User-Agent`.
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[
    (
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
    ),
    ("Accept-Language", "en-US,en;q=0.9"),
    ("Accept-Encoding", "gzip, deflate, br"),
    ("Cache-Control", "no-cache"),
    ("Connection", "keep-alive"),
    ("Upgrade-Insecure-Requests", "1"),
];

/// Sleep before each fetch.
pub const DEFAULT_PRE_FETCH_DELAY: Duration = Duration::from_secs(3);

/// Sleep after each fetch, before the result slot is inspected.
pub const DEFAULT_POST_FETCH_DELAY: Duration = Duration::from_secs(2);
