//! The aggregated output document and its reader.
//!
//! The output groups entries under `## <network>` header lines. The same
//! layout is read back as the [`PriorSnapshot`] on the next run, so the writer
//! and the reader below must change together.

use crate::model::CanonicalEntry;
use indexmap::{IndexMap, IndexSet};

/// Marker that starts a network section.
pub const SECTION_MARKER: &str = "##";

/// Aggregated output, built line by line in network then source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputDocument {
    lines: Vec<String>,
}

impl OutputDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the section for `network`.
    pub fn push_section(&mut self, network: &str) {
        self.lines.push(format!("{SECTION_MARKER} {network}"));
    }

    /// Append an entry to the current section.
    pub fn push_entry(&mut self, entry: &CanonicalEntry) {
        self.lines.push(entry.to_string());
    }

    /// Document lines in output order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the document: lines joined by `\n`, no trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

/// Per-network entries read from a previously generated output.
///
/// Entries are kept as plain strings; they are not re-validated because the
/// file was produced by this tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorSnapshot {
    sections: IndexMap<String, IndexSet<String>>,
}

impl PriorSnapshot {
    /// An empty snapshot, used when no previous output exists.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a previous output document.
    ///
    /// Lines before the first section header are ignored. A repeated header
    /// starts its section over.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut sections: IndexMap<String, IndexSet<String>> = IndexMap::new();
        let mut current: Option<String> = None;

        for line in text.split('\n') {
            if let Some(rest) = line.strip_prefix(SECTION_MARKER) {
                let name = rest.trim().to_string();
                sections.insert(name.clone(), IndexSet::new());
                current = Some(name);
                continue;
            }

            let entry = line.trim();
            if entry.is_empty() {
                continue;
            }
            if let Some(set) = current.as_ref().and_then(|name| sections.get_mut(name)) {
                set.insert(entry.to_string());
            }
        }

        Self { sections }
    }

    /// Entries previously listed under `network`.
    #[must_use]
    pub fn entries(&self, network: &str) -> Option<&IndexSet<String>> {
        self.sections.get(network)
    }

    /// Networks that had a section, in file order.
    pub fn networks(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Whether the snapshot has no sections at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
