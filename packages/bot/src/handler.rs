//! Gateway event handler and command orchestration.
//!
//! One entry point per gateway event; commands are processed inline, one at
//! a time, in arrival order. All failure feedback goes to the process log,
//! never back to the channel.

use std::sync::Arc;

use jobpost::{extract_posting, JobPosting, PageFetcher};
use serenity::all::{ChannelId, Context, CreateMessage, EventHandler, Message, Ready};
use serenity::async_trait;
use tracing::{error, info, warn};

use crate::command::{is_http_url, parse_job_command};
use crate::summary::job_post_embed;

/// Event handler holding the startup configuration and the page fetcher.
///
/// The fetcher is a trait object so the command flow can be exercised in
/// tests without the network.
pub struct Handler {
    channel_id: ChannelId,
    fetcher: Arc<dyn PageFetcher>,
}

impl Handler {
    pub fn new(channel_id: u64, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            channel_id: ChannelId::new(channel_id),
            fetcher,
        }
    }
}

/// Fetch a posting page and extract its fields.
///
/// Returns `None` when the fetch fails or when any of the required fields
/// (title, company, location, deadline) comes back empty; both outcomes are
/// logged and otherwise silent.
pub async fn process_job_url(fetcher: &dyn PageFetcher, url: &str) -> Option<JobPosting> {
    let page = match fetcher.fetch(url).await {
        Ok(page) => page,
        Err(e) => {
            error!(url = %url, error = %e, "failed to retrieve page");
            return None;
        }
    };

    let posting = extract_posting(&page.html);
    if !posting.is_announceable() {
        error!(url = %url, "page is missing required job-post fields");
        return None;
    }

    Some(posting)
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "logged in");
        info!("ready, send a job post URL with '!job <URL>'");
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(candidate) = parse_job_command(&msg.content) else {
            return;
        };

        info!(author = %msg.author.name, input = %candidate, "job command received");

        if !is_http_url(candidate) {
            warn!(input = %candidate, "job command does not carry a valid URL");
            return;
        }

        let Some(posting) = process_job_url(self.fetcher.as_ref(), candidate).await else {
            return;
        };

        info!(
            title = %posting.title,
            company = %posting.company,
            location = %posting.location,
            deadline = %posting.deadline,
            "job post found"
        );

        // Send to the configured channel; an unresolvable channel is logged
        // and skipped, and the command message is still deleted.
        let message = CreateMessage::new().embed(job_post_embed(&posting, candidate));
        if let Err(e) = self.channel_id.send_message(&ctx.http, message).await {
            warn!(channel_id = %self.channel_id, error = %e, "could not deliver announcement");
        }

        if let Err(e) = msg.delete(&ctx.http).await {
            warn!(error = %e, "could not delete command message");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jobpost::{FetchError, FetchedPage};

    /// Mock fetcher serving one canned page.
    struct PageMock(&'static str);

    #[async_trait]
    impl PageFetcher for PageMock {
        async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
            Ok(FetchedPage::new(url, self.0))
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    /// Mock fetcher answering with a non-success status.
    struct NotFoundMock;

    #[async_trait]
    impl PageFetcher for NotFoundMock {
        async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
            Err(FetchError::Status {
                status: reqwest::StatusCode::NOT_FOUND,
                url: url.to_string(),
            })
        }
    }

    const POSTING_HTML: &str = r##"<html><body>
      <h1 class="text--break-word">Backend Developer</h1>
      <p class="header__info">
        <a href="#"><span>Acme Oy</span></a>
        <a href="#"><span>Espoo</span></a>
      </p>
      <p class="header__info"><span></span><span>Ends 31.12.2025</span></p>
      <div class="gtm-apply-clicks description description--jobentry">Come build with us.</div>
    </body></html>"##;

    #[tokio::test]
    async fn test_successful_fetch_yields_posting() {
        let fetcher = PageMock(POSTING_HTML);
        let posting = process_job_url(&fetcher, "http://example.com/job/123")
            .await
            .expect("posting extracted");
        assert_eq!(posting.title, "Backend Developer");
        assert_eq!(posting.deadline, "Ends  31.12.2025");
    }

    #[tokio::test]
    async fn test_failed_fetch_yields_nothing() {
        let posting = process_job_url(&NotFoundMock, "http://example.com/job/123").await;
        assert!(posting.is_none());
    }

    #[tokio::test]
    async fn test_empty_required_field_yields_nothing() {
        // Title anchor present but empty: extraction succeeds with an empty
        // title, which fails the announceability gate.
        let fetcher = PageMock(r#"<h1 class="text--break-word"></h1>"#);
        let posting = process_job_url(&fetcher, "http://example.com/job/123").await;
        assert!(posting.is_none());
    }
}
