//! Change reporting against the previously generated output.
//!
//! Pure set arithmetic per network: `added = |new − old|`,
//! `removed = |old − new|`, `delta = added − removed`.

mod summary;

pub use summary::{ChangeSummary, NetworkChange};
