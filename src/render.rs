//! Terminal rendering of a [`ReportBatch`].
//!
//! Text output is one block per report built from the summary views; JSON
//! output is one object per line carrying the report and its classification.

use std::io::{self, Write};

use quake_core::classifier::{self, Classification};
use quake_core::config::{OutputConfig, OutputFormat};
use quake_core::summary;
use quake_core::{CanonicalReport, ReportBatch, SeverityTier};
use serde::Serialize;

/// One line of `--format json` output.
#[derive(Debug, Serialize)]
pub struct JsonLine<'a> {
    pub report: &'a CanonicalReport,
    pub classification: Classification,
}

pub fn render_batch<W: Write>(out: &mut W, batch: &ReportBatch, output: &OutputConfig) -> io::Result<()> {
    match output.format {
        OutputFormat::Json => render_json(out, batch),
        OutputFormat::Text => render_text(out, batch, output.show_extras),
    }
}

pub fn render_json<W: Write>(out: &mut W, batch: &ReportBatch) -> io::Result<()> {
    for report in &batch.reports {
        let line = JsonLine {
            report,
            classification: classifier::classify(report),
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn render_text<W: Write>(out: &mut W, batch: &ReportBatch, show_extras: bool) -> io::Result<()> {
    if batch.reports.is_empty() {
        writeln!(out, "No reports.")?;
        return Ok(());
    }

    for (i, report) in batch.reports.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        render_report(out, report, show_extras)?;
    }
    Ok(())
}

fn render_report<W: Write>(out: &mut W, report: &CanonicalReport, show_extras: bool) -> io::Result<()> {
    let classification = classifier::classify(report);

    let mut title = format!("[{}]", severity_badge(classification.severity));
    if let Some(magnitude) = summary::display_magnitude(report) {
        title.push_str(&format!(" M{magnitude}"));
    }
    let header = summary::header(report);
    if !header.is_empty() {
        title.push_str("  ");
        title.push_str(&header);
    }
    writeln!(out, "{title}")?;

    field(out, "Location", report.location.as_deref())?;
    field(out, "Depth", report.depth.as_deref())?;
    field(out, "Coordinates", report.coordinates.as_deref())?;
    if let Some(potential) = report.potential.as_deref() {
        writeln!(out, "  Potential: {potential} ({})", classification.hazard)?;
    }
    field(out, "Intensity", classification.intensity.as_deref())?;
    field(out, "Felt", report.felt.as_deref())?;
    field(out, "Notes", summary::display_notes(report))?;

    if show_extras {
        for extra in summary::display_extras(report) {
            writeln!(out, "  {}: {}", summary::label_for_key(&extra.key), extra.value)?;
        }
    }
    Ok(())
}

fn field<W: Write>(out: &mut W, label: &str, value: Option<&str>) -> io::Result<()> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => writeln!(out, "  {label}: {value}"),
        None => Ok(()),
    }
}

fn severity_badge(severity: SeverityTier) -> &'static str {
    match severity {
        SeverityTier::High => "HIGH",
        SeverityTier::Moderate => "MODERATE",
        SeverityTier::Low => "LOW",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
