//! Report generation for build results.
//!
//! Two formats are available:
//! - Text: the human-readable build log, also written to the log file
//! - JSON: structured data for programmatic integration
//!
//! The report is a log artifact; the aggregated document itself is rendered
//! by [`crate::parsers::OutputDocument`].

mod json;
mod text;
mod types;

pub use json::JsonReporter;
pub use text::TextReporter;
pub use types::{BuildMetadata, BuildReport, ReportFormat};

use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a build report
    fn generate(&self, report: &BuildReport<'_>) -> Result<String, ReportError>;

    /// Write the rendered report to a writer
    fn write_report(
        &self,
        report: &BuildReport<'_>,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate(report)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{Aggregator, MemorySources};
    use crate::config::Environment;
    use crate::diff::ChangeSummary;
    use crate::parsers::PriorSnapshot;
    use chrono::Utc;
    use indexmap::IndexMap;
    use std::path::PathBuf;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_create_reporter_format() {
        assert_eq!(create_reporter(ReportFormat::Text).format(), ReportFormat::Text);
        assert_eq!(create_reporter(ReportFormat::Json).format(), ReportFormat::Json);
    }

    #[test]
    fn test_write_report_surfaces_writer_failure() {
        let aggregate =
            Aggregator::new(MemorySources::new()).aggregate(&IndexMap::<String, PathBuf>::new());
        let changes = ChangeSummary::compute(&aggregate, &PriorSnapshot::default());
        let metadata = BuildMetadata {
            timestamp: Utc::now(),
            environment: Environment::Test,
            output_path: PathBuf::from("app-ads.test.txt"),
            written: false,
        };
        let report = BuildReport {
            metadata: &metadata,
            aggregate: &aggregate,
            changes: &changes,
        };

        let err = TextReporter::new().write_report(&report, &mut BrokenPipe).unwrap_err();
        assert!(matches!(err, ReportError::IoError(_)));
    }
}
