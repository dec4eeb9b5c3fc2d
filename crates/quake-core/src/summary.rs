//! Summary views — display-oriented strings derived from a report.
//!
//! These never touch a terminal or widget; they only decide *what* text a
//! front end should show (header line, magnitude badge text, extra-field
//! labels). The CLI uses them for its text output.

use phf::phf_map;

use crate::types::{CanonicalReport, ReportField};

/// Fixed labels for well-known raw keys, looked up by lowercase key.
static KNOWN_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "shakemap" => "Shakemap",
    "shake_map" => "Shakemap",
    "shakemap_url" => "Shakemap",
    "shakemaplink" => "Shakemap",
    "eventid" => "Event ID",
    "event_id" => "Event ID",
    "id" => "Event ID",
    "source" => "Source",
    "sumber" => "Source",
    "update" => "Updated",
    "updated" => "Updated",
    "lastupdate" => "Updated",
};

/// `date • time`, skipping whichever is missing. Empty when both are.
pub fn header(report: &CanonicalReport) -> String {
    [report.date.as_deref(), report.time.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" • ")
}

/// Magnitude text for a badge: the numeric prefix when there is one
/// (`"5,2 SR"` → `"5.2"`), else the raw text as given.
pub fn display_magnitude(report: &CanonicalReport) -> Option<String> {
    let raw = report.magnitude.as_deref()?.trim();
    if raw.is_empty() {
        return None;
    }
    let numeric: String = raw
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    let display = if numeric.is_empty() { raw } else { numeric.as_str() };
    Some(display.replace(',', "."))
}

/// Notes worth showing: hidden when blank or identical to the location.
pub fn display_notes(report: &CanonicalReport) -> Option<&str> {
    let notes = report.notes.as_deref()?;
    let duplicate = report
        .location
        .as_deref()
        .is_some_and(|location| notes.eq_ignore_ascii_case(location));
    if notes.trim().is_empty() || duplicate {
        None
    } else {
        Some(notes)
    }
}

/// Extras to list under a report: the shakemap URL first (unless an extra
/// already carries a `shakemap` key), then the residual fields.
pub fn display_extras(report: &CanonicalReport) -> Vec<ReportField> {
    let shakemap = report
        .shakemap_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .filter(|_| report.extra("shakemap").is_none())
        .map(|url| ReportField::new("shakemap", url));

    shakemap
        .into_iter()
        .chain(report.extra_fields.iter().cloned())
        .filter(|field| !field.value.trim().is_empty())
        .collect()
}

/// Human label for a raw key: a fixed label for well-known keys, otherwise
/// the key split on `_ - . space` with each word capitalised.
pub fn label_for_key(key: &str) -> String {
    let normalized = key.to_lowercase();
    if let Some(label) = KNOWN_LABELS.get(normalized.as_str()) {
        return (*label).to_string();
    }
    let words: Vec<String> = normalized
        .split(['_', '-', ' ', '.'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();
    if words.is_empty() {
        key.to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
