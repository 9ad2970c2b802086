//! Unified error types for adstxt-merge.
//!
//! Normalization and aggregation never fail: bad lines and missing sources
//! are data, not errors. What can fail is the I/O around the pass (writing
//! the output or the log), loading configuration, and rendering reports.

use crate::config::ConfigFileError;
use crate::reports::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for adstxt-merge operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AdsTxtError {
    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportError,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenient Result type for adstxt-merge operations
pub type Result<T> = std::result::Result<T, AdsTxtError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl AdsTxtError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<std::io::Error> for AdsTxtError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<ConfigFileError> for AdsTxtError {
    fn from(err: ConfigFileError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<ReportError> for AdsTxtError {
    fn from(err: ReportError) -> Self {
        Self::report("", err)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost first:
///
/// ```ignore
/// use adstxt_merge::error::ErrorContext;
///
/// std::fs::write(&path, content)
///     .context("writing aggregated output")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<AdsTxtError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: AdsTxtError, new_ctx: &str) -> AdsTxtError {
    match err {
        AdsTxtError::Io {
            path,
            message,
            source,
        } => AdsTxtError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        AdsTxtError::Report {
            context: existing,
            source,
        } => AdsTxtError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AdsTxtError::Config(msg) => AdsTxtError::Config(chain_context(new_ctx, &msg)),
        AdsTxtError::Validation(msg) => AdsTxtError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
