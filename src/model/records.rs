//! Diagnostic records collected during an aggregation pass.

use super::CanonicalEntry;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An entry that appeared in more than one place.
///
/// The entry is kept only under `owner`; every later occurrence was skipped,
/// and the networks they came from are listed in encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateRecord {
    /// The duplicated canonical entry
    pub entry: CanonicalEntry,
    /// Network that first produced the entry
    pub owner: String,
    /// Networks whose occurrences were skipped
    pub skipped_from: IndexSet<String>,
}

impl DuplicateRecord {
    /// Create a record with no skipped occurrences yet.
    #[must_use]
    pub fn new(entry: CanonicalEntry, owner: impl Into<String>) -> Self {
        Self {
            entry,
            owner: owner.into(),
            skipped_from: IndexSet::new(),
        }
    }

    /// Note that `network` produced the entry again.
    pub fn record_skip(&mut self, network: &str) {
        if !self.skipped_from.contains(network) {
            self.skipped_from.insert(network.to_string());
        }
    }

    /// Skipped-from networks joined for display.
    #[must_use]
    pub fn skipped_from_display(&self) -> String {
        self.skipped_from
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A line whose certification ID was stripped.
///
/// The rest of the line survived normalization and was still emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidCertRecord {
    /// Network the line came from
    pub network: String,
    /// The trimmed source line as written
    pub line: String,
    /// The rejected certification value as written
    pub removed: String,
}

/// A configured network whose source could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingSource {
    /// Network name
    pub network: String,
    /// Configured source path
    pub path: PathBuf,
}
