//! Public client surface + builder.
//! Defaults (UA, header table, base URL, delays) live in `constants`.

pub mod constants;

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::core::ScrapeError;
use crate::core::net::{self, PageFetcher};
use crate::ticker::ticker_from_url;
use constants::{DEFAULT_HEADERS, USER_AGENT};

/// HTTP fetch collaborator: issues browser-like GET requests for quote pages.
#[derive(Debug, Clone)]
pub struct ScrapeClient {
    http: Client,
}

impl ScrapeClient {
    /// Create a new builder.
    pub fn builder() -> ScrapeClientBuilder {
        ScrapeClientBuilder::default()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

impl PageFetcher for ScrapeClient {
    async fn fetch_page(&self, url: &Url) -> Result<String, ScrapeError> {
        tracing::info!("Visiting {url}");

        let resp = self.http().get(url.clone()).send().await?;
        if !resp.status().is_success() {
            return Err(ScrapeError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = net::get_text(resp, ticker_from_url(url.as_str())).await?;
        Ok(body)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ScrapeClientBuilder {
    user_agent: Option<String>,
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ScrapeClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Add or replace a header on top of [`DEFAULT_HEADERS`].
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<ScrapeClient, ScrapeError> {
        let mut headers = HeaderMap::new();
        let defaults = DEFAULT_HEADERS.iter().map(|(n, v)| (*n, *v));
        let overrides = self.headers.iter().map(|(n, v)| (n.as_str(), v.as_str()));
        for (name, value) in defaults.chain(overrides) {
            let (name, value) = header_pair(name, value)?;
            headers.insert(name, value);
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(headers)
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(ScrapeClient {
            http: httpb.build()?,
        })
    }
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), ScrapeError> {
    let invalid = |reason: String| ScrapeError::Header {
        name: name.to_string(),
        reason,
    };
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
    let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
    Ok((header_name, header_value))
}
