//! Navigator — finds the report-shaped objects inside an arbitrarily wrapped
//! feed document.
//!
//! Lookup is attempted in order:
//!
//! 1. top-level array → its object elements;
//! 2. known wrapper keys ([`WRAPPER_KEYS`]), recursing into wrapper objects;
//! 3. depth-first scan of the remaining entries for an array of objects;
//! 4. the object itself as a record, or (when it carries no scalar content)
//!    each object-valued entry as a record keyed by its entry name.
//!
//! Nothing here returns an error. A body that cannot be interpreted yields an
//! empty record list, because the feed is third-party and its shape drifts.

use serde_json::{Map, Value};

use crate::resolver::scalar_text;

/// Wrapper keys that commonly hold the report array, in priority order.
pub const WRAPPER_KEYS: &[&str] = &[
    "data", "laporan", "reports", "items", "result", "records", "gempa", "results",
];

/// A raw feed object queued for normalisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRecord<'a> {
    /// The record's own entries, in feed order.
    pub fields: &'a Map<String, Value>,
    /// Key the record was filed under when the feed is a keyed map of
    /// records. Used as the identifier of last resort.
    pub fallback_id: Option<&'a str>,
}

impl<'a> RawRecord<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self {
            fields,
            fallback_id: None,
        }
    }

    pub fn with_fallback_id(mut self, id: &'a str) -> Self {
        self.fallback_id = Some(id);
        self
    }

    /// Entries in feed order.
    pub fn entries(&self) -> serde_json::map::Iter<'a> {
        self.fields.iter()
    }
}

/// Parse a feed body. Blank or malformed bodies yield `None`.
pub fn parse_body(body: &str) -> Option<Value> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str(body) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(error = %err, len = body.len(), "feed body is not JSON, treating as empty");
            None
        }
    }
}

/// Locate every raw record in a parsed feed document, in document order.
pub fn records(root: &Value) -> Vec<RawRecord<'_>> {
    match root {
        Value::Array(items) => objects_in(items),
        Value::Object(map) => match find_array(map) {
            Some(items) => objects_in(items),
            None => {
                let mut out = Vec::new();
                collect_records(map, None, &mut out);
                tracing::debug!(count = out.len(), "no report array found, read records from object");
                out
            }
        },
        other => {
            tracing::debug!(kind = value_kind(other), "feed root is neither array nor object");
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Array search
// ---------------------------------------------------------------------------

fn objects_in(items: &[Value]) -> Vec<RawRecord<'_>> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(fields) => Some(RawRecord::new(fields)),
            _ => None,
        })
        .collect()
}

fn find_array(map: &Map<String, Value>) -> Option<&Vec<Value>> {
    for key in WRAPPER_KEYS {
        match map.get(*key) {
            Some(Value::Array(items)) => return Some(items),
            Some(Value::Object(inner)) => {
                if let Some(items) = find_array(inner) {
                    return Some(items);
                }
            }
            _ => {}
        }
    }

    // Outside the wrapper keys an array only counts if it holds records;
    // otherwise a tag list on a bare record would swallow the record itself.
    let direct = map.values().find_map(|value| match value {
        Value::Array(items) if items.iter().any(Value::is_object) => Some(items),
        _ => None,
    });
    direct.or_else(|| {
        map.values().find_map(|value| match value {
            Value::Object(inner) => find_array(inner),
            _ => None,
        })
    })
}

// ---------------------------------------------------------------------------
// Object fallback
// ---------------------------------------------------------------------------

fn collect_records<'a>(
    map: &'a Map<String, Value>,
    fallback_id: Option<&'a str>,
    out: &mut Vec<RawRecord<'a>>,
) {
    if map.values().any(|value| scalar_text(value).is_some()) {
        let nested = map.values().filter(|value| value.is_object()).count();
        if nested > 0 {
            tracing::debug!(nested, "object has scalar content, reading it as one record and skipping nested objects");
        }
        out.push(RawRecord { fields: map, fallback_id });
        return;
    }
    for (key, value) in map {
        if let Value::Object(inner) = value {
            collect_records(inner, Some(key.as_str()), out);
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
