//! Domain-specific assertion macros for quake harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! report, and which part of it, broke an invariant.

use quake_core::normalizer::normalize_record_tracked;
use quake_core::{CanonicalReport, RawRecord};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Field assertions
// ---------------------------------------------------------------------------

/// Assert the ordered `(key, value)` extras of a report.
///
/// ```rust
/// assert_extras!(report, [("notes_extra", "x")]);
/// ```
#[macro_export]
macro_rules! assert_extras {
    ($report:expr, [$(($key:expr, $value:expr)),* $(,)?]) => {{
        let report: &quake_core::CanonicalReport = &$report;
        let actual: Vec<(&str, &str)> = report
            .extra_fields
            .iter()
            .map(|f| (f.key.as_str(), f.value.as_str()))
            .collect();
        let expected: Vec<(&str, &str)> = vec![$(($key, $value)),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_extras! failed for report {:?}", report
        );
    }};
}

/// Assert that every body in a list normalises to zero reports.
#[macro_export]
macro_rules! assert_no_reports {
    ($bodies:expr) => {{
        for body in $bodies.iter() {
            let body: &str = body.as_ref();
            let reports = quake_core::normalize_body(body);
            if !reports.is_empty() {
                panic!(
                    "assert_no_reports! failed: body {:?} produced {} report(s):\n  {:?}",
                    body,
                    reports.len(),
                    reports
                );
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Structural helpers
// ---------------------------------------------------------------------------

/// Panic unless the keys claimed by named fields and the extras of `fields`
/// are disjoint. Returns the report for further checks (None if discarded).
pub fn assert_consumed_disjoint(fields: &Map<String, Value>) -> Option<CanonicalReport> {
    let (report, consumed) = normalize_record_tracked(&RawRecord::new(fields))?;
    for extra in &report.extra_fields {
        assert!(
            !consumed.contains(&extra.key),
            "key {:?} is both consumed and listed as an extra.\n  consumed: {:?}\n  extras: {:?}",
            extra.key,
            consumed.iter().collect::<Vec<_>>(),
            report.extra_fields,
        );
    }
    Some(report)
}

/// Key sequence of a report's extras.
pub fn extra_keys(report: &CanonicalReport) -> Vec<&str> {
    report.extra_fields.iter().map(|f| f.key.as_str()).collect()
}
