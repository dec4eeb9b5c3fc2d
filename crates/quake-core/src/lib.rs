//! quake-core — report model and normalization pipeline for quake.
//!
//! Earthquake feeds drift: the same endpoint may return a bare array, an
//! object wrapping the array under `data` or `laporan`, a keyed map of
//! records, or a single record, with field names in Indonesian or English.
//! This crate turns any of those shapes into a list of [`CanonicalReport`]s.
//!
//! # Architecture
//!
//! ```text
//! body ──► navigator ──► resolver ──► normalizer ──► CanonicalReport
//!          (records)    (aliases,      (fields,          │
//!                        consumed)      extras)          ├──► classifier
//!                                                        └──► summary
//! ```
//!
//! Everything here is synchronous and pure. Fetching lives in `quake-feeds`.

pub mod classifier;
pub mod config;
pub mod navigator;
pub mod normalizer;
pub mod resolver;
pub mod summary;
pub mod types;

pub use classifier::{classify, Classification};
pub use navigator::RawRecord;
pub use normalizer::{normalize_body, normalize_value};
pub use resolver::ConsumedKeys;
pub use types::{
    CanonicalReport, FeedKind, HazardCategory, LoadState, ReportBatch, ReportField, SeverityTier,
};
