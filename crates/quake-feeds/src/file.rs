//! File feed source.
//!
//! Reads a saved feed payload from disk in one go. Useful for replaying a
//! captured response or feeding fixtures through the full pipeline.

use std::path::{Path, PathBuf};

use quake_core::FeedKind;

use crate::{FeedError, FeedSource};

/// A feed payload stored in a local file.
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeedSource for FileFeed {
    fn kind(&self) -> FeedKind {
        FeedKind::File
    }

    async fn fetch(&self) -> Result<String, FeedError> {
        tracing::debug!(path = %self.path.display(), "reading feed file");
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FeedError::io(self.path.display().to_string(), e))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
