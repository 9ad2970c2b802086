//! Per-network change summary against the previous output.

use crate::aggregate::AggregateResult;
use crate::parsers::PriorSnapshot;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::hash::Hash;

/// Change counts for one network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkChange {
    /// Network name
    pub network: String,
    /// Entries the network owns in the new output
    pub total: usize,
    /// Entries present now but not in the previous output
    pub added: usize,
    /// Entries present previously but not now
    pub removed: usize,
    /// Duplicate lines skipped during aggregation
    pub skipped: usize,
}

impl NetworkChange {
    /// Net change in entry count.
    #[must_use]
    pub const fn delta(&self) -> i64 {
        self.added as i64 - self.removed as i64
    }

    /// Whether the network's entry set changed.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.added > 0 || self.removed > 0
    }
}

/// Change counts for every configured network, in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub networks: Vec<NetworkChange>,
}

impl ChangeSummary {
    /// Compare the new pass against the previous output.
    ///
    /// Networks absent from the snapshot compare against an empty set.
    #[must_use]
    pub fn compute(result: &AggregateResult, prior: &PriorSnapshot) -> Self {
        let empty = IndexSet::new();
        let networks = result
            .networks
            .iter()
            .map(|(name, contribution)| {
                let old = prior.entries(name).unwrap_or(&empty);
                let new = &contribution.entries;
                NetworkChange {
                    network: name.clone(),
                    total: new.len(),
                    added: count_missing_from(new, old),
                    removed: count_missing_from(old, new),
                    skipped: contribution.skipped,
                }
            })
            .collect();

        Self { networks }
    }

    /// Counts for one network.
    #[must_use]
    pub fn network(&self, name: &str) -> Option<&NetworkChange> {
        self.networks.iter().find(|n| n.network == name)
    }

    /// Whether any network gained or lost entries.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.networks.iter().any(NetworkChange::has_changes)
    }

    #[must_use]
    pub fn total_added(&self) -> usize {
        self.networks.iter().map(|n| n.added).sum()
    }

    #[must_use]
    pub fn total_removed(&self) -> usize {
        self.networks.iter().map(|n| n.removed).sum()
    }
}

/// Number of elements of `from` that are not in `other`.
fn count_missing_from<A, B>(from: &IndexSet<A>, other: &IndexSet<B>) -> usize
where
    A: Borrow<str> + Hash + Eq,
    B: Borrow<str> + Hash + Eq,
{
    from.iter()
        .filter(|item| !other.contains(Borrow::<str>::borrow(*item)))
        .count()
}
