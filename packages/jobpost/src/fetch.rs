//! Page fetch capability.
//!
//! `PageFetcher` is the trait seam between the command flow and the network;
//! the bot is wired with [`HttpFetcher`] and tested with a mock. A fetch
//! either yields the whole page body or fails as a whole; there is no retry
//! and no timeout on the request (one command is processed at a time, so a
//! slow fetch delays the next).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};

/// Browser-like identifying header sent with every page request. Some job
/// boards answer 403 to the default library agent.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Raw page content as fetched, before any extraction.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: String,
    /// Raw HTML body
    pub html: String,
    /// When the page was fetched
    pub fetched_at: DateTime<Utc>,
}

impl FetchedPage {
    /// Create a page stamped with the current time.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
            fetched_at: Utc::now(),
        }
    }
}

/// Fetcher trait for pluggable page retrieval.
///
/// Implementations fetch the raw body for one URL:
/// - `HttpFetcher` - plain HTTP GET
/// - test mocks - canned pages or canned failures
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url`, failing on transport errors and on any
    /// non-success HTTP status.
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage>;

    /// Get the fetcher name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}

/// HTTP fetcher for job-posting pages.
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        debug!(url = %url, "page fetch starting");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "page fetch failed");
                FetchError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "page fetch returned non-success status");
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        // Capture the final URL before the body read consumes the response.
        let final_url = response.url().to_string();
        let html = response.text().await?;

        debug!(url = %final_url, bytes = html.len(), "page fetch complete");
        Ok(FetchedPage::new(final_url, html))
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetched_page_is_stamped() {
        let before = Utc::now();
        let page = FetchedPage::new("https://example.com/job/1", "<html></html>");
        assert_eq!(page.url, "https://example.com/job/1");
        assert_eq!(page.html, "<html></html>");
        assert!(page.fetched_at >= before);
    }

    #[test]
    fn test_fetcher_builder_overrides_user_agent() {
        let fetcher = HttpFetcher::new().with_user_agent("JobBot/1.0");
        assert_eq!(fetcher.user_agent, "JobBot/1.0");
        assert_eq!(fetcher.name(), "http");
    }

    /// Canned fetcher, the pattern callers use in their own tests.
    struct CannedFetcher(&'static str);

    #[async_trait]
    impl PageFetcher for CannedFetcher {
        async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
            Ok(FetchedPage::new(url, self.0))
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let fetcher: Box<dyn PageFetcher> = Box::new(CannedFetcher("<html></html>"));
        let page = fetcher
            .fetch("https://example.com/job/1")
            .await
            .expect("canned page");
        assert_eq!(page.html, "<html></html>");
        assert_eq!(fetcher.name(), "unknown");
    }
}
