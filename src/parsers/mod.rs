//! Parsing for source lines and previously generated output.
//!
//! - [`line`]: validates and normalizes one `app-ads.txt` line.
//! - [`document`]: writes the aggregated document and reads it back as a
//!   [`PriorSnapshot`].

pub mod document;
pub mod line;

pub use document::{OutputDocument, PriorSnapshot, SECTION_MARKER};
pub use line::{
    CERT_ID_LENGTHS, LineOutcome, RejectReason, classify_line, is_valid_cert_id, normalize,
};
