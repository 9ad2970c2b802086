//! First-writer-wins bookkeeping.

use crate::model::{CanonicalEntry, DuplicateRecord};
use indexmap::IndexMap;

/// Outcome of offering an entry to the [`SeenRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Claim<'a> {
    /// The entry was unseen and now belongs to the claiming network
    New,
    /// The entry already belongs to another network (or the same one)
    Taken { owner: &'a str },
}

/// Global map from canonical entry to the network that produced it first.
///
/// Iteration order is claim order, which is configured network order then
/// source line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenRegistry {
    owners: IndexMap<CanonicalEntry, String>,
}

impl SeenRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `entry` for `network` unless someone already owns it.
    pub fn claim(&mut self, entry: &CanonicalEntry, network: &str) -> Claim<'_> {
        if self.owners.contains_key(entry) {
            let owner = self.owners.get(entry).map_or("", String::as_str);
            return Claim::Taken { owner };
        }
        self.owners.insert(entry.clone(), network.to_string());
        Claim::New
    }

    /// Owner of `entry`, if it has been seen.
    #[must_use]
    pub fn owner(&self, entry: &str) -> Option<&str> {
        self.owners.get(entry).map(String::as_str)
    }

    /// Entries with their owners, in claim order.
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalEntry, &str)> {
        self.owners.iter().map(|(entry, owner)| (entry, owner.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

/// Duplicate records keyed by entry, in order of first duplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateRegistry {
    records: IndexMap<CanonicalEntry, DuplicateRecord>,
}

impl DuplicateRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `network` produced `entry`, already owned by `owner`.
    pub fn record(&mut self, entry: &CanonicalEntry, owner: &str, network: &str) {
        self.records
            .entry(entry.clone())
            .or_insert_with(|| DuplicateRecord::new(entry.clone(), owner))
            .record_skip(network);
    }

    /// Look up the record for an entry.
    #[must_use]
    pub fn get(&self, entry: &str) -> Option<&DuplicateRecord> {
        self.records.get(entry)
    }

    /// Records in order of first duplication.
    pub fn iter(&self) -> impl Iterator<Item = &DuplicateRecord> {
        self.records.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
