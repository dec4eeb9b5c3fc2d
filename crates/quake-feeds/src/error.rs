//! Error type shared by every feed source.

use thiserror::Error;

/// Why a fetch produced no body.
///
/// Only fetch failures live here. A body that arrives but does not parse is
/// not an error: it normalises to zero reports.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("feed request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl FeedError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        FeedError::Io {
            path: path.into(),
            source,
        }
    }
}
