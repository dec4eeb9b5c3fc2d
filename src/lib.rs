//! quake — earthquake report feed client.
//!
//! Fetches a schema-drifting earthquake feed and prints normalized reports.
//! The pipeline lives in `quake-core` and the fetch sources in
//! `quake-feeds`; this crate adds the terminal rendering and re-exports both
//! so integration tests can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! FeedSource ──► body ──► quake_core::normalize_body ──► ReportBatch ──► render
//! (http/file/stdin)                                                  (text/json)
//! ```

pub mod render;

pub use quake_core;
pub use quake_feeds;
