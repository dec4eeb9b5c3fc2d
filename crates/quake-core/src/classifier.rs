//! Classifier — secondary views derived from a finished [`CanonicalReport`].
//!
//! Every function here is pure and independently callable: numeric magnitude,
//! [`SeverityTier`], the shake-intensity label and [`HazardCategory`]. None of
//! them feed back into normalisation.
//!
//! Pattern constants are compiled once on first use and only ever read.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::types::{CanonicalReport, HazardCategory, SeverityTier};

fn roman_intensity_re() -> &'static Regex {
    static ROMAN_INTENSITY_RE: OnceLock<Regex> = OnceLock::new();
    ROMAN_INTENSITY_RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(i|ii|iii|iv|v|vi|vii|viii|ix|x)(?:[-/ ](i|ii|iii|iv|v|vi|vii|viii|ix|x))?\b",
        )
        .expect("valid roman intensity regex")
    })
}

fn mmi_word_re() -> &'static Regex {
    static MMI_WORD_RE: OnceLock<Regex> = OnceLock::new();
    MMI_WORD_RE.get_or_init(|| Regex::new(r"(?i)\bmmi\b").expect("valid mmi regex"))
}

fn label_words_re() -> &'static Regex {
    static LABEL_WORDS_RE: OnceLock<Regex> = OnceLock::new();
    LABEL_WORDS_RE.get_or_init(|| {
        Regex::new(r"(?i)intensitas|intensity|dirasakan|felt").expect("valid label regex")
    })
}

// ---------------------------------------------------------------------------
// Magnitude
// ---------------------------------------------------------------------------

/// Parse the leading numeric run of a raw magnitude (`"5,2 SR"` → `5.2`).
///
/// Both `.` and `,` are accepted as the decimal point.
pub fn parse_magnitude(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    let numeric: String = normalized
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse().ok()
}

/// Numeric magnitude of a report, if its raw text parses.
pub fn magnitude(report: &CanonicalReport) -> Option<f64> {
    report.magnitude.as_deref().and_then(parse_magnitude)
}

impl SeverityTier {
    /// Bucket a magnitude: ≥ 6.0 high, ≥ 5.0 moderate, anything else
    /// (including no value) low.
    pub fn from_magnitude(magnitude: Option<f64>) -> Self {
        match magnitude {
            Some(m) if m >= 6.0 => SeverityTier::High,
            Some(m) if m >= 5.0 => SeverityTier::Moderate,
            _ => SeverityTier::Low,
        }
    }
}

pub fn severity(report: &CanonicalReport) -> SeverityTier {
    SeverityTier::from_magnitude(magnitude(report))
}

// ---------------------------------------------------------------------------
// Intensity
// ---------------------------------------------------------------------------

/// `true` for raw keys that name an intensity value (`intensitas_x`,
/// `SKALA_MMI`, …).
pub fn is_intensity_key(key: &str) -> bool {
    let key = key.to_lowercase();
    key.contains("intens") || (key.contains("skala") && key.contains("mmi"))
}

/// `true` when free text reads like an intensity: mentions "intens", has a
/// standalone `MMI` token, or carries a Roman numeral I–X (optionally a range
/// such as `IV-V`).
pub fn looks_like_intensity(text: &str) -> bool {
    text.to_lowercase().contains("intens")
        || mmi_word_re().is_match(text)
        || roman_intensity_re().is_match(text)
}

/// The raw text an intensity label should be read from.
///
/// Order: the `intensity` field, then the first intensity-named extra, then
/// `felt` when it looks intensity-shaped.
pub fn intensity_source(report: &CanonicalReport) -> Option<&str> {
    let non_blank = |s: &&str| !s.trim().is_empty();

    report
        .intensity
        .as_deref()
        .filter(non_blank)
        .or_else(|| {
            report
                .extra_fields
                .iter()
                .find(|f| is_intensity_key(&f.key))
                .map(|f| f.value.as_str())
                .filter(non_blank)
        })
        .or_else(|| report.felt.as_deref().filter(|felt| looks_like_intensity(felt)))
}

/// Strip label words and separators from raw intensity text
/// (`"Intensitas = III-IV"` → `"III-IV"`).
pub fn clean_intensity(raw: &str) -> Option<String> {
    let replaced = raw.replace('=', ":");
    let stripped = label_words_re().replace_all(&replaced, "");
    let stripped = stripped.trim();
    let value = stripped
        .split_once(':')
        .map_or(stripped, |(_, after)| after)
        .trim()
        .trim_start_matches(|c: char| matches!(c, '-' | '–' | '—'))
        .trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Display-ready intensity label for a report.
pub fn intensity_label(report: &CanonicalReport) -> Option<String> {
    intensity_source(report).and_then(clean_intensity)
}

// ---------------------------------------------------------------------------
// Hazard
// ---------------------------------------------------------------------------

impl HazardCategory {
    /// Keyword match on free-text tsunami potential. "Safe" keywords are
    /// checked first, so "Tidak berpotensi tsunami" is safe.
    pub fn from_potential(text: &str) -> Self {
        let lower = text.to_lowercase();
        if ["tidak", "aman", "no"].iter().any(|k| lower.contains(k)) {
            HazardCategory::Safe
        } else if ["tsunami", "warning", "peringatan"]
            .iter()
            .any(|k| lower.contains(k))
        {
            HazardCategory::Warning
        } else {
            HazardCategory::Unknown
        }
    }
}

pub fn hazard(report: &CanonicalReport) -> HazardCategory {
    report
        .potential
        .as_deref()
        .map_or(HazardCategory::Unknown, HazardCategory::from_potential)
}

// ---------------------------------------------------------------------------
// Combined view
// ---------------------------------------------------------------------------

/// All classifier outputs for one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub magnitude: Option<f64>,
    pub severity: SeverityTier,
    pub intensity: Option<String>,
    pub hazard: HazardCategory,
}

pub fn classify(report: &CanonicalReport) -> Classification {
    let magnitude = magnitude(report);
    Classification {
        magnitude,
        severity: SeverityTier::from_magnitude(magnitude),
        intensity: intensity_label(report),
        hazard: hazard(report),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
