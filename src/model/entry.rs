//! Canonical authorization entries.
//!
//! A canonical entry is the normalized string form of one `app-ads.txt`
//! line: `domain, publisher_id, RELATIONSHIP[, cert_id]`. The string itself is
//! the identity of the entry; two raw lines are duplicates exactly when their
//! canonical strings are equal.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Separator placed between fields of a canonical entry.
pub const FIELD_SEPARATOR: &str = ", ";

/// Seller relationship declared by an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Relationship {
    /// The publisher directly controls the seller account
    Direct,
    /// The account is operated by an authorized reseller
    Reseller,
}

impl Relationship {
    /// Parse an already upper-cased relationship token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "DIRECT" => Some(Self::Direct),
            "RESELLER" => Some(Self::Reseller),
            _ => None,
        }
    }

    /// Canonical spelling of the relationship.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "DIRECT",
            Self::Reseller => "RESELLER",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, normalized authorization entry.
///
/// Only the normalizer builds these from raw text, so every value upholds the
/// canonical invariants (lowercase domain, known relationship, valid or absent
/// certification ID).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalEntry(String);

impl CanonicalEntry {
    /// Join validated parts into a canonical entry.
    pub(crate) fn from_parts(
        domain: &str,
        publisher_id: &str,
        relationship: Relationship,
        cert_id: Option<&str>,
    ) -> Self {
        let mut value = String::with_capacity(
            domain.len() + publisher_id.len() + cert_id.map_or(0, str::len) + 20,
        );
        value.push_str(domain);
        value.push_str(FIELD_SEPARATOR);
        value.push_str(publisher_id);
        value.push_str(FIELD_SEPARATOR);
        value.push_str(relationship.as_str());
        if let Some(cert) = cert_id {
            value.push_str(FIELD_SEPARATOR);
            value.push_str(cert);
        }
        Self(value)
    }

    /// The canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The advertising system domain (first field).
    #[must_use]
    pub fn domain(&self) -> &str {
        self.fields().next().unwrap_or_default()
    }

    /// The certification authority ID, if the entry kept one.
    #[must_use]
    pub fn cert_id(&self) -> Option<&str> {
        self.fields().nth(3)
    }

    fn fields(&self) -> std::str::Split<'_, &'static str> {
        self.0.split(FIELD_SEPARATOR)
    }
}

impl fmt::Display for CanonicalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets sets of entries be probed with plain strings read from a prior output.
impl Borrow<str> for CanonicalEntry {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;

    #[test]
    fn test_from_parts_without_cert() {
        let entry = CanonicalEntry::from_parts("example.com", "pub-1", Relationship::Direct, None);
        assert_eq!(entry.as_str(), "example.com, pub-1, DIRECT");
        assert_eq!(entry.domain(), "example.com");
        assert_eq!(entry.cert_id(), None);
    }

    #[test]
    fn test_from_parts_with_cert() {
        let entry = CanonicalEntry::from_parts(
            "example.com",
            "pub-1",
            Relationship::Reseller,
            Some("abc123def"),
        );
        assert_eq!(entry.to_string(), "example.com, pub-1, RESELLER, abc123def");
        assert_eq!(entry.cert_id(), Some("abc123def"));
    }

    #[test]
    fn test_relationship_parse_is_exact() {
        assert_eq!(Relationship::parse("DIRECT"), Some(Relationship::Direct));
        assert_eq!(Relationship::parse("RESELLER"), Some(Relationship::Reseller));
        assert_eq!(Relationship::parse("direct"), None);
        assert_eq!(Relationship::parse("PARTNER"), None);
    }

    #[test]
    fn test_set_lookup_by_str() {
        let mut set = IndexSet::new();
        set.insert(CanonicalEntry::from_parts("a.com", "1", Relationship::Direct, None));
        assert!(set.contains("a.com, 1, DIRECT"));
        assert!(!set.contains("a.com, 1, RESELLER"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let entry = CanonicalEntry::from_parts("a.com", "1", Relationship::Direct, None);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, "\"a.com, 1, DIRECT\"");
    }
}
