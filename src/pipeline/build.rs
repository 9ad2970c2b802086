//! A single build pass: load prior → aggregate → diff.
//!
//! Nothing here touches the output files; writing is left to
//! [`super::output`] so the same pass serves both `build` and `check`.

use crate::aggregate::{AggregateResult, Aggregator, SourceProvider};
use crate::config::{AppConfig, BehaviorConfig, Validatable};
use crate::diff::ChangeSummary;
use crate::error::{AdsTxtError, Result};
use crate::parsers::PriorSnapshot;
use crate::reports::{BuildMetadata, BuildReport};
use chrono::{DateTime, Utc};

/// Everything one pass produced.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// Header facts for the report
    pub metadata: BuildMetadata,
    /// Previous output, as read before the pass
    pub prior: PriorSnapshot,
    /// Aggregation result
    pub aggregate: AggregateResult,
    /// Per-network changes against `prior`
    pub changes: ChangeSummary,
}

impl BuildOutcome {
    /// The aggregated document text.
    #[must_use]
    pub fn document(&self) -> String {
        self.aggregate.render_document()
    }

    /// View for report generators.
    #[must_use]
    pub const fn report(&self) -> BuildReport<'_> {
        BuildReport {
            metadata: &self.metadata,
            aggregate: &self.aggregate,
            changes: &self.changes,
        }
    }

    /// Whether invalid cert IDs must fail the run under `behavior`.
    ///
    /// Checked once, after the whole pass and after all files are written.
    #[must_use]
    pub fn policy_blocked(&self, behavior: &BehaviorConfig) -> bool {
        behavior.blocks_on_invalid_certs() && self.aggregate.has_invalid_certs()
    }
}

/// Reject a configuration with validation errors, listing all of them.
pub fn validate_config(config: &AppConfig) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let listed: Vec<String> = errors.iter().map(ToString::to_string).collect();
    Err(AdsTxtError::validation(listed.join("; ")))
}

/// Run the pass for `config`, reading sources and the previous output
/// through `sources`.
///
/// `write` only affects the report header; callers decide whether to write.
pub fn run_pass<P: SourceProvider>(
    config: &AppConfig,
    sources: &P,
    timestamp: DateTime<Utc>,
    write: bool,
) -> BuildOutcome {
    let output_path = config.output_path();

    let prior = match sources.read(&output_path) {
        Some(text) => {
            let prior = PriorSnapshot::parse(&text);
            tracing::debug!(
                "Loaded previous output {} ({} sections)",
                output_path.display(),
                prior.networks().count()
            );
            prior
        }
        None => {
            tracing::info!(
                "No previous output at {}; every entry counts as added",
                output_path.display()
            );
            PriorSnapshot::empty()
        }
    };

    let aggregate = Aggregator::new(sources).aggregate(&config.networks);
    let changes = ChangeSummary::compute(&aggregate, &prior);

    BuildOutcome {
        metadata: BuildMetadata {
            timestamp,
            environment: config.behavior.environment,
            output_path,
            written: write,
        },
        prior,
        aggregate,
        changes,
    }
}
