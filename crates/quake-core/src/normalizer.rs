//! Normalizer — turns raw feed records into [`CanonicalReport`] values.
//!
//! Each record is resolved field by field against the alias table in
//! [`CanonicalField`], in [`CanonicalField::RESOLUTION_ORDER`]. Keys claimed by
//! a canonical field are tracked in a per-record [`ConsumedKeys`]; every
//! remaining scalar entry lands in `extra_fields`, so the output never drops
//! a field and never reports one twice.
//!
//! A record that yields nothing at all is discarded. The whole transform is
//! pure: the same record always produces the same report.

use serde_json::Value;

use crate::classifier::is_intensity_key;
use crate::navigator::{self, RawRecord};
use crate::resolver::{peek, resolve, scalar_text, ConsumedKeys};
use crate::types::{CanonicalReport, ReportField};

/// Aliases for the event identifier. Looked up without consuming the key.
pub const IDENTIFIER_ALIASES: &[&str] = &["id", "event_id", "eventid"];

/// Canonical fields resolved from raw aliases, localised names first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Date,
    Time,
    Magnitude,
    Intensity,
    Depth,
    Potential,
    Latitude,
    Longitude,
    Notes,
    Felt,
    ShakemapUrl,
    Location,
    Coordinates,
}

impl CanonicalField {
    /// Order in which fields claim keys. Earlier fields win contested keys.
    pub const RESOLUTION_ORDER: [CanonicalField; 13] = [
        CanonicalField::Date,
        CanonicalField::Time,
        CanonicalField::Magnitude,
        CanonicalField::Intensity,
        CanonicalField::Depth,
        CanonicalField::Potential,
        CanonicalField::Latitude,
        CanonicalField::Longitude,
        CanonicalField::Notes,
        CanonicalField::Felt,
        CanonicalField::ShakemapUrl,
        CanonicalField::Location,
        CanonicalField::Coordinates,
    ];

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            CanonicalField::Date => &["tanggal", "date", "day"],
            CanonicalField::Time => &["jam", "time", "waktu"],
            CanonicalField::Magnitude => &["magnitudo", "magnitude", "mag", "m", "sr"],
            CanonicalField::Intensity => &[
                "intensitas",
                "intensitas_indo",
                "intensity",
                "intensitas_mmi",
                "intensity_mmi",
                "skala_mmi",
            ],
            CanonicalField::Depth => &["kedalaman", "depth"],
            CanonicalField::Potential => &["potensi", "potential", "warning", "peringatan", "tsunami"],
            CanonicalField::Latitude => &["lintang", "latitude", "lat"],
            CanonicalField::Longitude => &["bujur", "longitude", "lon", "lng"],
            CanonicalField::Notes => &[
                "keterangan",
                "note",
                "ket",
                "information",
                "info",
                "deskripsi",
                "description",
                "dampak",
                "catatan",
                "impact",
            ],
            CanonicalField::Felt => &["dirasakan", "dirasakan_indo", "felt", "mmi", "skala"],
            CanonicalField::ShakemapUrl => &["shakemap", "shake_map", "shakemap_url"],
            CanonicalField::Location => &[
                "wilayah", "lokasi", "location", "area", "place", "region", "title", "judul", "event",
            ],
            CanonicalField::Coordinates => &["coordinates", "koordinat", "coordinate"],
        }
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Normalise a raw feed body. Blank or malformed bodies yield no reports.
pub fn normalize_body(body: &str) -> Vec<CanonicalReport> {
    match navigator::parse_body(body) {
        Some(root) => normalize_value(&root),
        None => Vec::new(),
    }
}

/// Normalise a parsed feed document, keeping feed order.
pub fn normalize_value(root: &Value) -> Vec<CanonicalReport> {
    reports(root).collect()
}

/// Lazily normalise a parsed feed document, one record at a time.
///
/// Records are independent, so a caller may stop consuming at any point.
pub fn reports(root: &Value) -> impl Iterator<Item = CanonicalReport> + '_ {
    navigator::records(root)
        .into_iter()
        .filter_map(|record| normalize_record(&record))
}

/// Normalise one raw record. Returns `None` when the record carries nothing.
pub fn normalize_record(record: &RawRecord<'_>) -> Option<CanonicalReport> {
    normalize_record_tracked(record).map(|(report, _)| report)
}

/// Like [`normalize_record`], also returning the keys claimed by named fields.
pub fn normalize_record_tracked(record: &RawRecord<'_>) -> Option<(CanonicalReport, ConsumedKeys)> {
    let mut consumed = ConsumedKeys::new();

    let date = resolve(record, CanonicalField::Date.aliases(), &mut consumed);
    let time = resolve(record, CanonicalField::Time.aliases(), &mut consumed);
    let magnitude = resolve(record, CanonicalField::Magnitude.aliases(), &mut consumed);
    let mut intensity = resolve(record, CanonicalField::Intensity.aliases(), &mut consumed);
    let depth = resolve(record, CanonicalField::Depth.aliases(), &mut consumed);
    let potential = resolve(record, CanonicalField::Potential.aliases(), &mut consumed);
    let latitude = resolve(record, CanonicalField::Latitude.aliases(), &mut consumed);
    let longitude = resolve(record, CanonicalField::Longitude.aliases(), &mut consumed);
    let notes = resolve(record, CanonicalField::Notes.aliases(), &mut consumed);
    let felt = resolve(record, CanonicalField::Felt.aliases(), &mut consumed);
    let shakemap_url = resolve(record, CanonicalField::ShakemapUrl.aliases(), &mut consumed);
    let location =
        resolve(record, CanonicalField::Location.aliases(), &mut consumed).or_else(|| notes.clone());

    let coordinates = resolve(record, CanonicalField::Coordinates.aliases(), &mut consumed)
        .or_else(|| join_coordinates(latitude, longitude))
        .or_else(|| nested_coordinates(record));

    if intensity.is_none() {
        intensity = promote_intensity(record, &mut consumed);
    }

    let extra_fields = collect_extras(record, &consumed);
    let id = peek(record, IDENTIFIER_ALIASES, &consumed)
        .map(|found| found.value)
        .or_else(|| record.fallback_id.map(str::to_string));

    let report = CanonicalReport {
        id,
        date,
        time,
        magnitude,
        intensity,
        depth,
        location,
        potential,
        coordinates,
        notes,
        felt,
        shakemap_url,
        extra_fields,
    };

    if report.is_empty() {
        tracing::trace!(keys = record.fields.len(), "discarding record with no content");
        return None;
    }
    Some((report, consumed))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn join_coordinates(latitude: Option<String>, longitude: Option<String>) -> Option<String> {
    let parts: Vec<String> = [latitude, longitude].into_iter().flatten().collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Coordinates given as an object (`"coordinates": {"lintang": .., "bujur": ..}`).
///
/// The object is not a scalar, so it never reaches the extras and claiming
/// keys inside it cannot collide with the outer record.
fn nested_coordinates(record: &RawRecord<'_>) -> Option<String> {
    let inner = CanonicalField::Coordinates.aliases().iter().find_map(|alias| {
        record.entries().find_map(|(key, value)| match value {
            Value::Object(fields) if key.eq_ignore_ascii_case(alias) => Some(fields),
            _ => None,
        })
    })?;
    let inner = RawRecord::new(inner);
    let mut consumed = ConsumedKeys::new();
    let latitude = resolve(&inner, CanonicalField::Latitude.aliases(), &mut consumed);
    let longitude = resolve(&inner, CanonicalField::Longitude.aliases(), &mut consumed);
    join_coordinates(latitude, longitude)
}

/// Claim the first unconsumed intensity-named entry when no alias matched.
fn promote_intensity(record: &RawRecord<'_>, consumed: &mut ConsumedKeys) -> Option<String> {
    let (key, value) = record.entries().find_map(|(key, value)| {
        if consumed.contains(key) || !is_intensity_key(key) {
            return None;
        }
        scalar_text(value).map(|text| (key, text))
    })?;
    consumed.consume(key);
    Some(value)
}

fn collect_extras(record: &RawRecord<'_>, consumed: &ConsumedKeys) -> Vec<ReportField> {
    record
        .entries()
        .filter(|(key, _)| !consumed.contains(key))
        .filter_map(|(key, value)| scalar_text(value).map(|text| ReportField::new(key.as_str(), text)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
