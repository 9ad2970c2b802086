//! Providers of source text.
//!
//! The aggregator never touches the filesystem directly. It asks a
//! [`SourceProvider`] for the content of each network's file and treats
//! `None` as a missing source.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Supplies the raw text of source files and of the previous output.
pub trait SourceProvider {
    /// Read the whole file at `path`, or `None` if it is unavailable.
    fn read(&self, path: &Path) -> Option<String>;
}

impl<T: SourceProvider + ?Sized> SourceProvider for &T {
    fn read(&self, path: &Path) -> Option<String> {
        (**self).read(path)
    }
}

/// Reads sources from the filesystem, relative paths against `root`.
#[derive(Debug, Clone, Default)]
pub struct FsSources {
    root: Option<PathBuf>,
}

impl FsSources {
    /// Resolve paths against the current directory.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Resolve relative paths against `root`.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Resolve `path` the way [`SourceProvider::read`] does.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl SourceProvider for FsSources {
    fn read(&self, path: &Path) -> Option<String> {
        let resolved = self.resolve(path);
        if !resolved.is_file() {
            return None;
        }
        // Undecodable bytes become U+FFFD so one stray byte only spoils its line.
        match std::fs::read(&resolved) {
            Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", resolved.display(), e);
                None
            }
        }
    }
}

/// In-memory sources keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemorySources {
    files: HashMap<PathBuf, String>,
}

impl MemorySources {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, builder style.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Add or replace a file.
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl SourceProvider for MemorySources {
    fn read(&self, path: &Path) -> Option<String> {
        self.files.get(path).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sources() {
        let sources = MemorySources::new().with_file("ads/admob.txt", "a.com, 1, DIRECT");
        assert_eq!(
            sources.read(Path::new("ads/admob.txt")).as_deref(),
            Some("a.com, 1, DIRECT")
        );
        assert!(sources.read(Path::new("ads/meta.txt")).is_none());
    }

    #[test]
    fn test_fs_sources_resolves_against_root() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("ads")).unwrap();
        std::fs::write(tmp.path().join("ads/meta.txt"), "m.com, 1, DIRECT\n").unwrap();

        let sources = FsSources::with_root(tmp.path());
        assert_eq!(
            sources.read(Path::new("ads/meta.txt")).as_deref(),
            Some("m.com, 1, DIRECT\n")
        );
        assert!(sources.read(Path::new("ads/missing.txt")).is_none());
    }

    #[test]
    fn test_fs_sources_decodes_invalid_utf8_lossily() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("admob.txt"), b"# caf\xe9\na.com, 1, DIRECT\n").unwrap();

        let content = FsSources::with_root(tmp.path())
            .read(Path::new("admob.txt"))
            .expect("file with a latin-1 byte is still read");
        assert_eq!(content, "# caf\u{fffd}\na.com, 1, DIRECT\n");
    }

    #[test]
    fn test_fs_sources_directory_is_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let sources = FsSources::with_root(tmp.path());
        assert!(sources.read(Path::new(".")).is_none());
    }
}
