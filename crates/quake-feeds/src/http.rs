//! HTTP feed source.
//!
//! One GET per fetch against the configured feed URL, with a fixed
//! `User-Agent`, an optional `Accept: application/json` and a bounded
//! connect/total timeout. There is no retry here; retrying on an empty or
//! failed fetch is the caller's policy.

use reqwest::header::ACCEPT;

use quake_core::config::FeedConfig;
use quake_core::FeedKind;

use crate::{FeedError, FeedSource};

/// An HTTP report feed.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: reqwest::Client,
    url: String,
    accept_json: bool,
}

impl HttpFeed {
    /// Build a feed from the `[feed]` config section.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|e| FeedError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            accept_json: config.accept_json,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FeedSource for HttpFeed {
    fn kind(&self) -> FeedKind {
        FeedKind::Http
    }

    async fn fetch(&self) -> Result<String, FeedError> {
        tracing::debug!(url = %self.url, "requesting report feed");

        let mut request = self.client.get(&self.url);
        if self.accept_json {
            request = request.header(ACCEPT, "application/json");
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %self.url, "feed returned non-success status");
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "feed response received");
        Ok(body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
