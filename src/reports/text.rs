//! Plain-text build log.
//!
//! This is the format written to the log file and echoed to stdout. Sections
//! appear in a fixed order: build header, missing sources, change summary,
//! duplicates, removed cert IDs.

use super::{BuildReport, ReportError, ReportFormat, ReportGenerator};
use crate::aggregate::AggregateResult;
use crate::diff::ChangeSummary;

/// Written in an empty section.
const NONE_MARKER: &str = "None";

/// Text reporter for the build log
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReporter;

impl TextReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, report: &BuildReport<'_>) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let output = report.metadata.output_path.display();

        lines.push(format!("BUILD: {}", report.metadata.timestamp_display()));
        lines.push(format!("ENV: {}", report.metadata.environment));
        lines.push(format!("OUTPUT: {output}"));
        lines.push(String::new());

        for missing in &report.aggregate.missing {
            lines.push(format!(
                "WARNING: Missing source for {}: {}",
                missing.network,
                missing.path.display()
            ));
        }
        if report.metadata.written {
            lines.push(format!("{output} generated"));
        } else {
            lines.push(format!("{output} not written (check only)"));
        }
        lines.push(String::new());

        push_change_summary(&mut lines, report.changes);
        push_duplicates(&mut lines, report.aggregate);
        push_invalid_certs(&mut lines, report.aggregate);

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}

fn push_change_summary(lines: &mut Vec<String>, changes: &ChangeSummary) {
    lines.push("CHANGE SUMMARY".to_string());
    for change in &changes.networks {
        lines.push(format!(
            "{}: entries={}, +{}, -{}, Δ{}, skipped={}",
            change.network,
            change.total,
            change.added,
            change.removed,
            change.delta(),
            change.skipped
        ));
    }
    lines.push(String::new());
}

fn push_duplicates(lines: &mut Vec<String>, aggregate: &AggregateResult) {
    lines.push("DUPLICATES".to_string());
    if aggregate.duplicates.is_empty() {
        lines.push(NONE_MARKER.to_string());
    }
    for record in aggregate.duplicates.iter() {
        lines.push("DUPLICATE ENTRY:".to_string());
        lines.push(record.entry.to_string());
        lines.push(format!("• already present in: {}", record.owner));
        lines.push(format!("• skipped from: {}", record.skipped_from_display()));
    }
    lines.push(String::new());
}

fn push_invalid_certs(lines: &mut Vec<String>, aggregate: &AggregateResult) {
    lines.push("INVALID CERT IDS REMOVED".to_string());
    if aggregate.invalid_certs.is_empty() {
        lines.push(NONE_MARKER.to_string());
    }
    for record in &aggregate.invalid_certs {
        lines.push(format!("INVALID CERT ID REMOVED [{}]", record.network));
        lines.push(record.line.clone());
    }
    lines.push(String::new());
}
