//! Test builders — ergonomic constructors for expected reports and payloads.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use quake_core::{CanonicalReport, ReportField};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// ReportBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for expected [`CanonicalReport`] values.
///
/// # Example
///
/// ```rust
/// let expected = ReportBuilder::new()
///     .date("2024-01-01")
///     .magnitude("5.2")
///     .extra("notes_extra", "x")
///     .build();
/// ```
#[derive(Default)]
pub struct ReportBuilder {
    report: CanonicalReport,
}

macro_rules! setter {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(mut self, value: impl Into<String>) -> Self {
                self.report.$name = Some(value.into());
                self
            }
        )*
    };
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(
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
    );

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.report.extra_fields.push(ReportField::new(key, value));
        self
    }

    pub fn build(self) -> CanonicalReport {
        self.report
    }
}

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for one raw feed record, preserving insertion order.
///
/// ```rust
/// let body = RecordBuilder::new()
///     .field("tanggal", "01 Jan 2024")
///     .field("mag", 5.1)
///     .wrapped_in("data");
/// ```
#[derive(Default, Clone)]
pub struct RecordBuilder {
    fields: Map<String, Value>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn value(self) -> Value {
        Value::Object(self.fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Body text with this record as the only element of `{"<key>": [...]}`.
    pub fn wrapped_in(self, key: &str) -> String {
        let mut root = Map::new();
        root.insert(key.to_string(), Value::Array(vec![self.value()]));
        Value::Object(root).to_string()
    }
}
