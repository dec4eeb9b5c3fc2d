//! quake-feeds — report feed sources for quake.
//!
//! Each source fetches one raw payload ([`FeedSource::fetch`]); the helpers
//! here run it through the quake-core pipeline and package the result as a
//! [`ReportBatch`] or the caller-facing [`LoadState`].

use std::future::Future;

use quake_core::{normalize_body, FeedKind, LoadState, ReportBatch};

pub mod error;
pub mod file;
pub mod http;
pub mod stdin;

pub use error::FeedError;
pub use file::FileFeed;
pub use http::HttpFeed;
pub use stdin::StdinFeed;

/// A place raw feed bodies come from.
pub trait FeedSource: Send + Sync {
    fn kind(&self) -> FeedKind;

    /// Fetch the whole payload as text.
    fn fetch(&self) -> impl Future<Output = Result<String, FeedError>> + Send;
}

/// Fetch once and normalise. An unparsable body is an empty batch, not an
/// error.
pub async fn load_reports<S: FeedSource>(source: &S) -> Result<ReportBatch, FeedError> {
    let body = source.fetch().await?;
    let reports = normalize_body(&body);
    tracing::info!(source = %source.kind(), reports = reports.len(), "feed loaded");

    Ok(ReportBatch {
        source: source.kind(),
        fetched_at: chrono::Utc::now(),
        reports,
    })
}

/// Fetch once and report the outcome as a [`LoadState`].
pub async fn load_state<S: FeedSource>(source: &S) -> LoadState {
    match load_reports(source).await {
        Ok(batch) => LoadState::Populated(batch),
        Err(e) => {
            tracing::warn!(source = %source.kind(), error = %e, "feed fetch failed");
            LoadState::Failed(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
