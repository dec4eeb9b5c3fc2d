//! Core types for quake-core.
//!
//! This module defines the fundamental data structures shared across the
//! pipeline: the normalised [`CanonicalReport`], its residual [`ReportField`]
//! extras, the derived [`SeverityTier`] and [`HazardCategory`] views, and the
//! per-fetch [`ReportBatch`] / [`LoadState`] wrappers handed to callers.

use serde::Serialize;

/// A normalised earthquake report produced from one raw feed record.
///
/// Every named field is optional. The normalizer populates as many fields as
/// it can resolve from the raw object; anything it could not map is kept
/// verbatim in [`extra_fields`](Self::extra_fields) so nothing is lost.
///
/// Built once by the normalizer and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalReport {
    /// Event identifier. Looked up without consuming the raw key, so the
    /// source field also stays visible in `extra_fields`. Falls back to the
    /// key the record was filed under when the feed is a keyed map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Raw magnitude text, unparsed (e.g. `"5.2"`, `"5,2 SR"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<String>,
    /// Resolved location, or the notes text when no location alias matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential: Option<String>,
    /// Explicit coordinates field, or `"lat, lon"` joined from the parts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub felt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shakemap_url: Option<String>,
    /// Unrecognised scalar fields in original key order, original casing,
    /// trimmed values.
    pub extra_fields: Vec<ReportField>,
}

impl CanonicalReport {
    /// `true` when every named field is absent and there are no extras.
    ///
    /// `id` is not part of this check: an identifier alone is not a report.
    pub fn is_empty(&self) -> bool {
        [
            &self.date,
            &self.time,
            &self.magnitude,
            &self.intensity,
            &self.depth,
            &self.location,
            &self.potential,
            &self.coordinates,
            &self.notes,
            &self.felt,
            &self.shakemap_url,
        ]
        .iter()
        .all(|field| field.as_deref().map_or(true, |v| v.trim().is_empty()))
            && self.extra_fields.is_empty()
    }

    /// Look up an extra field by key, case-insensitively.
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extra_fields
            .iter()
            .find(|f| f.key.eq_ignore_ascii_case(key))
            .map(|f| f.value.as_str())
    }
}

/// One residual raw field carried through normalisation untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportField {
    pub key: String,
    pub value: String,
}

impl ReportField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Coarse magnitude bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeverityTier::Low => write!(f, "low"),
            SeverityTier::Moderate => write!(f, "moderate"),
            SeverityTier::High => write!(f, "high"),
        }
    }
}

/// Hazard classification derived from the free-text `potential` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardCategory {
    Safe,
    Warning,
    Unknown,
}

impl std::fmt::Display for HazardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HazardCategory::Safe => write!(f, "safe"),
            HazardCategory::Warning => write!(f, "warning"),
            HazardCategory::Unknown => write!(f, "unknown"),
        }
    }
}

/// Which feed source produced a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    Http,
    File,
    Stdin,
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::Http => write!(f, "http"),
            FeedKind::File => write!(f, "file"),
            FeedKind::Stdin => write!(f, "stdin"),
        }
    }
}

/// The result of one fetch cycle: reports in feed order plus where and when
/// they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBatch {
    pub source: FeedKind,
    /// Fetch time (UTC).
    pub fetched_at: chrono::DateTime<chrono::Utc>,
    pub reports: Vec<CanonicalReport>,
}

/// Caller-visible state of a report history view.
///
/// An empty feed and an unparsable feed both land in `Populated` with zero
/// reports; only a transport failure is `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Populated(ReportBatch),
    Failed(String),
}

impl LoadState {
    /// `true` for a completed fetch that produced no reports.
    pub fn is_empty(&self) -> bool {
        matches!(self, LoadState::Populated(batch) if batch.reports.is_empty())
    }

    pub fn reports(&self) -> &[CanonicalReport] {
        match self {
            LoadState::Populated(batch) => &batch.reports,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
