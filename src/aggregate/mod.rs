//! Aggregation of network sources into one authorization document.
//!
//! The [`Aggregator`] walks networks in configured order, normalizes each
//! line, and keeps an entry only under the first network that produced it.
//! Later occurrences are skipped and recorded in the [`DuplicateRegistry`].

mod engine;
mod registry;
mod result;
mod sources;

pub use engine::Aggregator;
pub use registry::{Claim, DuplicateRegistry, SeenRegistry};
pub use result::{AggregateResult, NetworkContribution};
pub use sources::{FsSources, MemorySources, SourceProvider};
