//! **Build a single `app-ads.txt` from per-network authorization fragments.**
//!
//! `adstxt-merge` reads one source file per ad network, normalizes every
//! authorization line, drops lines that cannot be repaired, strips malformed
//! certification authority IDs, and writes one combined document grouped
//! into `## <Network>` sections. An entry that several networks list is kept
//! only under the first network in configured order.
//!
//! Every build also compares its result against the previously generated
//! file and reports, per network, how many entries were added, removed or
//! skipped as duplicates.
//!
//! ## Core Concepts & Modules
//!
//! - **[`parsers`]**: line normalization ([`parsers::normalize`]) and the
//!   section-grouped document format, both written ([`OutputDocument`]) and
//!   read back ([`PriorSnapshot`]).
//! - **[`aggregate`]**: the [`Aggregator`], which walks networks in order
//!   and resolves duplicates first-wins.
//! - **[`diff`]**: the [`ChangeSummary`] between a new result and the prior
//!   output.
//! - **[`reports`]**: the text build log and a JSON report.
//! - **[`pipeline`]**: one build pass plus writing of the output and the log.
//! - **[`config`]**: the network table, output locations, environment and
//!   YAML config discovery.
//!
//! ## Aggregating in memory
//!
//! Sources are read through the [`SourceProvider`] trait, so a pass can run
//! against in-memory files:
//!
//! ```
//! use adstxt_merge::{Aggregator, MemorySources};
//! use indexmap::IndexMap;
//! use std::path::PathBuf;
//!
//! let sources = MemorySources::new()
//!     .with_file("admob.txt", "google.com, pub-1, DIRECT, f08c47fec0942fa0")
//!     .with_file("meta.txt", "Google.com,pub-1,DIRECT,f08c47fec0942fa0\nfacebook.com, 9, RESELLER");
//!
//! let mut networks = IndexMap::new();
//! networks.insert("Admob".to_string(), PathBuf::from("admob.txt"));
//! networks.insert("Meta".to_string(), PathBuf::from("meta.txt"));
//!
//! let result = Aggregator::new(&sources).aggregate(&networks);
//! assert_eq!(
//!     result.render_document(),
//!     "## Admob\ngoogle.com, pub-1, DIRECT, f08c47fec0942fa0\n## Meta\nfacebook.com, 9, RESELLER"
//! );
//! assert_eq!(result.duplicates.len(), 1);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections are not written for every fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `added`/`removed` are clear in context
    clippy::similar_names
)]

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use aggregate::{AggregateResult, Aggregator, FsSources, MemorySources, SourceProvider};
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, Environment, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use diff::{ChangeSummary, NetworkChange};
pub use error::{AdsTxtError, ErrorContext, Result};
pub use model::{CanonicalEntry, DuplicateRecord, InvalidCertRecord, MissingSource, Relationship};
pub use parsers::{OutputDocument, PriorSnapshot, normalize};
pub use pipeline::{BuildOutcome, run_pass};
pub use reports::{ReportFormat, ReportGenerator, create_reporter};
