//! Stdin feed source.
//!
//! Reads the whole of stdin as one payload, e.g. `curl … | quake --stdin`.

use tokio::io::AsyncReadExt;

use quake_core::FeedKind;

use crate::{FeedError, FeedSource};

#[derive(Debug, Clone, Copy, Default)]
pub struct StdinFeed;

impl StdinFeed {
    pub fn new() -> Self {
        Self
    }
}

impl FeedSource for StdinFeed {
    fn kind(&self) -> FeedKind {
        FeedKind::Stdin
    }

    async fn fetch(&self) -> Result<String, FeedError> {
        let mut body = String::new();
        tokio::io::stdin()
            .read_to_string(&mut body)
            .await
            .map_err(|e| FeedError::io("<stdin>", e))?;
        tracing::debug!(bytes = body.len(), "read feed from stdin");
        Ok(body)
    }
}
