//! Data model for aggregated authorization files.
//!
//! [`CanonicalEntry`] is the unit everything else is keyed on: the seen
//! registry, per-network entry sets and the duplicate records.

mod entry;
mod records;

pub use entry::{CanonicalEntry, FIELD_SEPARATOR, Relationship};
pub use records::{DuplicateRecord, InvalidCertRecord, MissingSource};
