//! JSON build report.

use super::{BuildReport, ReportError, ReportFormat, ReportGenerator};
use crate::model::{DuplicateRecord, InvalidCertRecord, MissingSource};
use serde::Serialize;

/// JSON reporter for machine consumption
#[derive(Debug, Clone, Copy)]
pub struct JsonReporter {
    pretty: bool,
}

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Emit a single line instead of pretty-printed output.
    #[must_use]
    pub const fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    build: JsonBuild,
    totals: JsonTotals,
    missing_sources: &'a [MissingSource],
    changes: Vec<JsonNetworkChange<'a>>,
    duplicates: Vec<&'a DuplicateRecord>,
    invalid_certs: &'a [InvalidCertRecord],
}

#[derive(Serialize)]
struct JsonBuild {
    timestamp: String,
    environment: String,
    output: String,
    written: bool,
}

#[derive(Serialize)]
struct JsonTotals {
    entries: usize,
    added: usize,
    removed: usize,
    skipped: usize,
    duplicates: usize,
    invalid_certs: usize,
}

#[derive(Serialize)]
struct JsonNetworkChange<'a> {
    network: &'a str,
    entries: usize,
    added: usize,
    removed: usize,
    delta: i64,
    skipped: usize,
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &BuildReport<'_>) -> Result<String, ReportError> {
        let aggregate = report.aggregate;
        let json = JsonReport {
            build: JsonBuild {
                timestamp: report.metadata.timestamp_display(),
                environment: report.metadata.environment.to_string(),
                output: report.metadata.output_path.display().to_string(),
                written: report.metadata.written,
            },
            totals: JsonTotals {
                entries: aggregate.total_entries(),
                added: report.changes.total_added(),
                removed: report.changes.total_removed(),
                skipped: aggregate.total_skipped(),
                duplicates: aggregate.duplicates.len(),
                invalid_certs: aggregate.invalid_certs.len(),
            },
            missing_sources: &aggregate.missing,
            changes: report
                .changes
                .networks
                .iter()
                .map(|c| JsonNetworkChange {
                    network: &c.network,
                    entries: c.total,
                    added: c.added,
                    removed: c.removed,
                    delta: c.delta(),
                    skipped: c.skipped,
                })
                .collect(),
            duplicates: aggregate.duplicates.iter().collect(),
            invalid_certs: &aggregate.invalid_certs,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&json)
        } else {
            serde_json::to_string(&json)
        };
        let mut rendered = rendered.map_err(|e| ReportError::SerializationError(e.to_string()))?;
        rendered.push('\n');
        Ok(rendered)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{Aggregator, MemorySources};
    use crate::config::Environment;
    use crate::diff::ChangeSummary;
    use crate::parsers::PriorSnapshot;
    use crate::reports::BuildMetadata;
    use chrono::Utc;
    use indexmap::IndexMap;
    use std::path::PathBuf;

    #[test]
    fn test_json_report_structure() {
        let networks: IndexMap<String, PathBuf> = [("A", "a.txt"), ("B", "b.txt"), ("C", "c.txt")]
            .into_iter()
            .map(|(n, p)| (n.to_string(), PathBuf::from(p)))
            .collect();
        let sources = MemorySources::new()
            .with_file("a.txt", "x.com, 1, DIRECT\ny.com, 2, DIRECT, bad")
            .with_file("b.txt", "x.com, 1, DIRECT");
        let aggregate = Aggregator::new(sources).aggregate(&networks);
        let changes =
            ChangeSummary::compute(&aggregate, &PriorSnapshot::parse("## A\nold.com, 1, DIRECT"));
        let metadata = BuildMetadata {
            timestamp: Utc::now(),
            environment: Environment::Prod,
            output_path: PathBuf::from("app-ads.txt"),
            written: true,
        };

        let text = JsonReporter::new()
            .compact()
            .generate(&BuildReport {
                metadata: &metadata,
                aggregate: &aggregate,
                changes: &changes,
            })
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["build"]["environment"], "prod");
        assert_eq!(value["totals"]["entries"], 2);
        assert_eq!(value["totals"]["removed"], 1);
        assert_eq!(value["totals"]["invalid_certs"], 1);
        assert_eq!(value["changes"][0]["delta"], 1);
        assert_eq!(value["changes"][1]["skipped"], 1);
        assert_eq!(value["duplicates"][0]["owner"], "A");
        assert_eq!(value["duplicates"][0]["skipped_from"][0], "B");
        assert_eq!(value["invalid_certs"][0]["removed"], "bad");
        assert_eq!(value["missing_sources"][0]["network"], "C");
        assert!(!text.contains('\n'));
    }
}
