//! Report type definitions.

use crate::aggregate::AggregateResult;
use crate::config::Environment;
use crate::diff::ChangeSummary;
use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for the build report
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain-text build log
    #[default]
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Facts about the run itself, shown in the report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildMetadata {
    /// When the build started
    pub timestamp: DateTime<Utc>,
    /// Environment the build ran in
    pub environment: Environment,
    /// Aggregated output path
    pub output_path: PathBuf,
    /// Whether the output file was written (false for checks)
    pub written: bool,
}

impl BuildMetadata {
    /// Timestamp as shown in reports, e.g. `2026-01-31T08:00:00.000Z`.
    #[must_use]
    pub fn timestamp_display(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Everything a reporter needs to render one build.
#[derive(Debug, Clone, Copy)]
pub struct BuildReport<'a> {
    pub metadata: &'a BuildMetadata,
    pub aggregate: &'a AggregateResult,
    pub changes: &'a ChangeSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_display_millis_utc() {
        let metadata = BuildMetadata {
            timestamp: Utc.with_ymd_and_hms(2026, 1, 31, 8, 0, 5).unwrap(),
            environment: Environment::Prod,
            output_path: PathBuf::from("app-ads.txt"),
            written: true,
        };
        assert_eq!(metadata.timestamp_display(), "2026-01-31T08:00:05.000Z");
    }

    #[test]
    fn test_report_format_display() {
        assert_eq!(ReportFormat::Text.to_string(), "text");
        assert_eq!(ReportFormat::Json.to_string(), "json");
    }
}
