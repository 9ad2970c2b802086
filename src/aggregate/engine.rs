//! The aggregation pass.

use super::registry::Claim;
use super::{AggregateResult, NetworkContribution, SourceProvider};
use crate::model::MissingSource;
use crate::parsers::normalize;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Merges network sources into one document with first-writer-wins dedup.
///
/// Networks are processed in the iteration order of the mapping handed to
/// [`Aggregator::aggregate`], lines in file order. Given the same inputs the
/// output is identical byte for byte.
#[derive(Debug, Clone)]
pub struct Aggregator<P> {
    sources: P,
}

impl<P: SourceProvider> Aggregator<P> {
    /// Create an aggregator reading from `sources`.
    pub const fn new(sources: P) -> Self {
        Self { sources }
    }

    /// The underlying source provider.
    pub const fn sources(&self) -> &P {
        &self.sources
    }

    /// Run the pass over `networks` (name → source path).
    pub fn aggregate(&self, networks: &IndexMap<String, PathBuf>) -> AggregateResult {
        let mut result = AggregateResult::default();

        for (network, path) in networks {
            self.aggregate_network(network, path, &mut result);
        }

        tracing::info!(
            "Aggregated {} unique entries from {} networks ({} duplicates skipped, {} invalid cert IDs)",
            result.total_entries(),
            networks.len(),
            result.total_skipped(),
            result.invalid_certs.len()
        );

        result
    }

    fn aggregate_network(&self, network: &str, path: &Path, result: &mut AggregateResult) {
        let mut contribution = NetworkContribution {
            path: path.to_path_buf(),
            ..NetworkContribution::default()
        };

        let Some(content) = self.sources.read(path) else {
            tracing::warn!("Missing source for {}: {}", network, path.display());
            result.missing.push(MissingSource {
                network: network.to_string(),
                path: path.to_path_buf(),
            });
            result.networks.insert(network.to_string(), contribution);
            return;
        };

        contribution.source_found = true;
        result.document.push_section(network);

        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let Some(entry) = normalize(line, network, &mut result.invalid_certs) else {
                contribution.dropped += 1;
                continue;
            };

            match result.seen.claim(&entry, network) {
                Claim::New => {
                    result.document.push_entry(&entry);
                    contribution.entries.insert(entry);
                }
                Claim::Taken { owner } => {
                    contribution.skipped += 1;
                    result.duplicates.record(&entry, owner, network);
                }
            }
        }

        tracing::debug!(
            network,
            entries = contribution.entries.len(),
            skipped = contribution.skipped,
            dropped = contribution.dropped,
            "network aggregated"
        );

        result.networks.insert(network.to_string(), contribution);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::MemorySources;

    fn networks(pairs: &[(&str, &str)]) -> IndexMap<String, PathBuf> {
        pairs
            .iter()
            .map(|(name, path)| ((*name).to_string(), PathBuf::from(path)))
            .collect()
    }

    #[test]
    fn test_first_network_keeps_shared_entry() {
        let sources = MemorySources::new()
            .with_file("a.txt", "shared.com, 1, DIRECT\nonly-a.com, 2, DIRECT")
            .with_file("b.txt", "SHARED.com, 1, direct\nonly-b.com, 3, RESELLER");
        let result = Aggregator::new(sources).aggregate(&networks(&[("A", "a.txt"), ("B", "b.txt")]));

        assert_eq!(
            result.render_document(),
            "## A\nshared.com, 1, DIRECT\nonly-a.com, 2, DIRECT\n## B\nonly-b.com, 3, RESELLER"
        );
        assert_eq!(result.seen.owner("shared.com, 1, DIRECT"), Some("A"));
        assert_eq!(result.network("B").unwrap().skipped, 1);
        assert_eq!(result.network("A").unwrap().skipped, 0);

        let record = result.duplicates.get("shared.com, 1, DIRECT").unwrap();
        assert_eq!(record.owner, "A");
        assert_eq!(record.skipped_from_display(), "B");
    }

    #[test]
    fn test_leading_byte_order_mark_is_ignored() {
        let sources = MemorySources::new()
            .with_file("a.txt", "\u{feff}google.com, pub-1, DIRECT\nb.com, 2, DIRECT\n");
        let result = Aggregator::new(sources).aggregate(&networks(&[("A", "a.txt")]));

        assert_eq!(
            result.render_document(),
            "## A\ngoogle.com, pub-1, DIRECT\nb.com, 2, DIRECT"
        );
        assert_eq!(result.network("A").unwrap().dropped, 0);
    }

    #[test]
    fn test_duplicate_within_one_network() {
        let sources = MemorySources::new().with_file("a.txt", "x.com, 1, DIRECT\nx.com, 1, DIRECT\n");
        let result = Aggregator::new(sources).aggregate(&networks(&[("A", "a.txt")]));

        assert_eq!(result.render_document(), "## A\nx.com, 1, DIRECT");
        assert_eq!(result.network("A").unwrap().skipped, 1);
        let record = result.duplicates.get("x.com, 1, DIRECT").unwrap();
        assert_eq!(record.owner, "A");
        assert_eq!(record.skipped_from_display(), "A");
    }

    #[test]
    fn test_missing_source_has_no_header() {
        let sources = MemorySources::new().with_file("b.txt", "b.com, 1, DIRECT");
        let result =
            Aggregator::new(sources).aggregate(&networks(&[("A", "missing.txt"), ("B", "b.txt")]));

        assert_eq!(result.render_document(), "## B\nb.com, 1, DIRECT");
        assert_eq!(result.missing.len(), 1);
        assert_eq!(result.missing[0].network, "A");
        let a = result.network("A").unwrap();
        assert!(!a.source_found);
        assert!(a.entries.is_empty());
        assert_eq!(a.skipped, 0);
    }

    #[test]
    fn test_header_emitted_for_source_without_valid_entries() {
        let sources = MemorySources::new().with_file("a.txt", "\n  \nnot a line\n");
        let result = Aggregator::new(sources).aggregate(&networks(&[("A", "a.txt")]));

        assert_eq!(result.render_document(), "## A");
        let a = result.network("A").unwrap();
        assert!(a.source_found);
        assert_eq!(a.dropped, 1);
    }

    #[test]
    fn test_invalid_cert_recorded_and_line_kept() {
        let sources = MemorySources::new().with_file("a.txt", "  a.com, 1, DIRECT, nope  \r\n");
        let result = Aggregator::new(sources).aggregate(&networks(&[("A", "a.txt")]));

        assert_eq!(result.render_document(), "## A\na.com, 1, DIRECT");
        assert_eq!(result.invalid_certs.len(), 1);
        assert_eq!(result.invalid_certs[0].line, "a.com, 1, DIRECT, nope");
        assert_eq!(result.invalid_certs[0].removed, "nope");
        assert!(result.has_invalid_certs());
    }

    #[test]
    fn test_cert_variant_is_distinct_entry() {
        let sources = MemorySources::new()
            .with_file("a.txt", "a.com, 1, DIRECT")
            .with_file("b.txt", "a.com, 1, DIRECT, abc123def");
        let result = Aggregator::new(sources).aggregate(&networks(&[("A", "a.txt"), ("B", "b.txt")]));

        assert!(result.duplicates.is_empty());
        assert_eq!(result.total_entries(), 2);
    }

    #[test]
    fn test_stripped_cert_collides_with_plain_entry() {
        let sources = MemorySources::new()
            .with_file("a.txt", "a.com, 1, DIRECT")
            .with_file("b.txt", "a.com, 1, DIRECT, bad");
        let result = Aggregator::new(sources).aggregate(&networks(&[("A", "a.txt"), ("B", "b.txt")]));

        assert_eq!(result.duplicates.len(), 1);
        assert_eq!(result.invalid_certs.len(), 1);
        assert_eq!(result.network("B").unwrap().skipped, 1);
    }
}
