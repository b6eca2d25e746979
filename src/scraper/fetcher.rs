//! Page fetching over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::error::ScrapeError;

/// Source of raw HTML for a URL.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch the page body at `url`
    async fn fetch(&self, url: &Url) -> Result<String, ScrapeError>;
}

/// reqwest-backed fetcher
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher sending the given User-Agent.
    ///
    /// No request timeout is set; a stalled server stalls the caller.
    pub fn new(user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| ScrapeError::fetch("<client>", format!("failed to build client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, ScrapeError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ScrapeError::fetch(url, e))?;

        if !response.status().is_success() {
            return Err(ScrapeError::fetch(
                url,
                format!("request failed with status: {}", response.status()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| ScrapeError::fetch(url, format!("failed to read body: {}", e)))
    }
}
