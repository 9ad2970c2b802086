//! Line normalization for authorization entries.
//!
//! Each source line has the shape `domain, publisher_id, relationship[, cert_id]`.
//! A line either normalizes into a [`CanonicalEntry`] or is rejected. Rejected
//! lines are dropped without a report entry; only a bad certification field is
//! surfaced, as an [`InvalidCertRecord`], and the rest of that line survives.

use crate::model::{CanonicalEntry, InvalidCertRecord, Relationship};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DOMAIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9.-]+$").expect("static regex"));

static CERT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+$").expect("static regex"));

/// Accepted certification ID lengths.
pub const CERT_ID_LENGTHS: [usize; 2] = [9, 16];

/// Why a line produced no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Not 3 or 4 comma-separated fields
    FieldCount(usize),
    /// Domain, publisher ID or relationship empty after trimming
    EmptyField,
    /// Domain contains characters outside `[a-z0-9.-]`
    InvalidDomain,
    /// Relationship is neither DIRECT nor RESELLER
    InvalidRelationship,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount(n) => write!(f, "expected 3 or 4 fields, found {n}"),
            Self::EmptyField => f.write_str("empty required field"),
            Self::InvalidDomain => f.write_str("invalid domain"),
            Self::InvalidRelationship => f.write_str("unknown relationship"),
        }
    }
}

/// Result of classifying a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Line is valid as written (modulo case and whitespace)
    Accepted(CanonicalEntry),
    /// Line is valid once its certification ID is dropped
    CertStripped {
        entry: CanonicalEntry,
        removed: String,
    },
    /// Line produces no entry
    Rejected(RejectReason),
}

impl LineOutcome {
    /// The entry this line contributes, if any.
    #[must_use]
    pub fn entry(&self) -> Option<&CanonicalEntry> {
        match self {
            Self::Accepted(entry) | Self::CertStripped { entry, .. } => Some(entry),
            Self::Rejected(_) => None,
        }
    }
}

/// Classify a raw line without recording anything.
#[must_use]
pub fn classify_line(raw: &str) -> LineOutcome {
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    if !(3..=4).contains(&fields.len()) {
        return LineOutcome::Rejected(RejectReason::FieldCount(fields.len()));
    }

    let (domain, publisher_id, relationship) = (fields[0], fields[1], fields[2]);
    if domain.is_empty() || publisher_id.is_empty() || relationship.is_empty() {
        return LineOutcome::Rejected(RejectReason::EmptyField);
    }

    let domain = domain.to_lowercase();
    if !DOMAIN_PATTERN.is_match(&domain) {
        return LineOutcome::Rejected(RejectReason::InvalidDomain);
    }

    let Some(relationship) = Relationship::parse(&relationship.to_uppercase()) else {
        return LineOutcome::Rejected(RejectReason::InvalidRelationship);
    };

    // An empty fourth field (trailing comma) counts as no certification ID.
    let cert = fields.get(3).copied().filter(|c| !c.is_empty());
    match cert {
        None => LineOutcome::Accepted(CanonicalEntry::from_parts(
            &domain,
            publisher_id,
            relationship,
            None,
        )),
        Some(cert) => {
            let lowered = cert.to_lowercase();
            if is_valid_cert_id(&lowered) {
                LineOutcome::Accepted(CanonicalEntry::from_parts(
                    &domain,
                    publisher_id,
                    relationship,
                    Some(&lowered),
                ))
            } else {
                LineOutcome::CertStripped {
                    entry: CanonicalEntry::from_parts(&domain, publisher_id, relationship, None),
                    removed: cert.to_string(),
                }
            }
        }
    }
}

/// Check a lower-cased certification ID against charset and length rules.
#[must_use]
pub fn is_valid_cert_id(cert: &str) -> bool {
    CERT_PATTERN.is_match(cert) && CERT_ID_LENGTHS.contains(&cert.len())
}

/// Normalize one line for `network`.
///
/// Returns `None` for structurally invalid lines. When the certification ID
/// is invalid, an [`InvalidCertRecord`] is pushed onto `invalid_certs` and the
/// entry is returned without it.
pub fn normalize(
    raw: &str,
    network: &str,
    invalid_certs: &mut Vec<InvalidCertRecord>,
) -> Option<CanonicalEntry> {
    match classify_line(raw) {
        LineOutcome::Accepted(entry) => Some(entry),
        LineOutcome::CertStripped { entry, removed } => {
            invalid_certs.push(InvalidCertRecord {
                network: network.to_string(),
                line: raw.to_string(),
                removed,
            });
            Some(entry)
        }
        LineOutcome::Rejected(reason) => {
            tracing::trace!(network, line = raw, %reason, "dropping malformed line");
            None
        }
    }
}
