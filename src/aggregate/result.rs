//! Aggregation pass results.

use super::{DuplicateRegistry, SeenRegistry};
use crate::model::{CanonicalEntry, InvalidCertRecord, MissingSource};
use crate::parsers::OutputDocument;
use indexmap::{IndexMap, IndexSet};
use std::path::PathBuf;

/// What one network contributed to the pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkContribution {
    /// Configured source path
    pub path: PathBuf,
    /// Whether the source could be read
    pub source_found: bool,
    /// Entries this network owns, in source order
    pub entries: IndexSet<CanonicalEntry>,
    /// Valid lines skipped because the entry was already seen
    pub skipped: usize,
    /// Malformed lines dropped without a record
    pub dropped: usize,
}

/// Everything a single aggregation pass produces.
#[derive(Debug, Clone, Default)]
pub struct AggregateResult {
    /// The aggregated output document
    pub document: OutputDocument,
    /// Entry → owning network
    pub seen: SeenRegistry,
    /// Entries that appeared more than once
    pub duplicates: DuplicateRegistry,
    /// Lines whose certification ID was stripped, in encounter order
    pub invalid_certs: Vec<InvalidCertRecord>,
    /// Per-network contributions in configured order
    pub networks: IndexMap<String, NetworkContribution>,
    /// Networks whose source was unavailable
    pub missing: Vec<MissingSource>,
}

impl AggregateResult {
    /// Contribution of a single network.
    #[must_use]
    pub fn network(&self, name: &str) -> Option<&NetworkContribution> {
        self.networks.get(name)
    }

    /// Total number of unique entries emitted.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.seen.len()
    }

    /// Total number of skipped duplicate lines across networks.
    #[must_use]
    pub fn total_skipped(&self) -> usize {
        self.networks.values().map(|n| n.skipped).sum()
    }

    /// Whether any certification ID was stripped.
    #[must_use]
    pub fn has_invalid_certs(&self) -> bool {
        !self.invalid_certs.is_empty()
    }

    /// The rendered output document.
    #[must_use]
    pub fn render_document(&self) -> String {
        self.document.render()
    }
}
