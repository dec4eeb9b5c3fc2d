//! Field resolver — picks one canonical value out of a raw record using a
//! priority-ordered alias list.
//!
//! Every resolution within one record shares a [`ConsumedKeys`] accumulator so
//! that a raw key feeds at most one canonical field and is never repeated in
//! the extras. The accumulator belongs to a single record's normalisation and
//! is dropped with it.

use std::collections::HashSet;

use serde_json::Value;

use crate::navigator::RawRecord;

/// Raw keys already claimed by a canonical field, tracked by exact spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsumedKeys {
    keys: HashSet<String>,
}

impl ConsumedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn consume(&mut self, key: &str) {
        self.keys.insert(key.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

/// A candidate value and the raw key it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub key: &'a str,
    pub value: String,
}

/// Trimmed text form of a scalar value.
///
/// Arrays, objects and JSON `null` have no text form; neither do blank
/// strings or the literal `"null"` in any casing.
pub fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    if text.is_empty() || text.eq_ignore_ascii_case("null") {
        None
    } else {
        Some(text)
    }
}

/// Find the first qualifying value for `aliases` without claiming its key.
///
/// Aliases are tried in order; within one alias the record's entries are
/// scanned in feed order. A key matches case-insensitively and only if it has
/// not been consumed yet.
pub fn peek<'a>(
    record: &RawRecord<'a>,
    aliases: &[&str],
    consumed: &ConsumedKeys,
) -> Option<Resolved<'a>> {
    aliases.iter().find_map(|alias| {
        record.entries().find_map(|(key, value)| {
            if !key.eq_ignore_ascii_case(alias) || consumed.contains(key) {
                return None;
            }
            scalar_text(value).map(|value| Resolved {
                key: key.as_str(),
                value,
            })
        })
    })
}

/// Resolve one canonical field and mark its raw key consumed.
///
/// Returns `None` and consumes nothing when no alias qualifies.
pub fn resolve(record: &RawRecord<'_>, aliases: &[&str], consumed: &mut ConsumedKeys) -> Option<String> {
    let Resolved { key, value } = peek(record, aliases, consumed)?;
    consumed.consume(key);
    Some(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
