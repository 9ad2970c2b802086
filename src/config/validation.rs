//! Configuration validation for adstxt-merge.

use super::types::{AppConfig, OutputConfig};
use crate::parsers::SECTION_MARKER;
use indexmap::IndexMap;
use std::path::PathBuf;

// ============================================================================
// Configuration Error
// ============================================================================

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.networks.validate();
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for IndexMap<String, PathBuf> {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.is_empty() {
            errors.push(ConfigError::new("networks", "At least one network is required"));
        }

        for (name, path) in self {
            let field = format!("networks.{name}");
            if name.trim().is_empty() {
                errors.push(ConfigError::new("networks", "Network names must not be empty"));
            } else if name.trim() != name {
                // Section headers are trimmed when read back, so the name would not round-trip.
                errors.push(ConfigError::new(
                    &field,
                    "Network names must not have leading or trailing whitespace",
                ));
            }
            if name.contains('\n') || name.contains('\r') {
                errors.push(ConfigError::new(&field, "Network names must be a single line"));
            }
            if name.contains(SECTION_MARKER) {
                errors.push(ConfigError::new(
                    &field,
                    format!("Network names must not contain '{SECTION_MARKER}'"),
                ));
            }
            if path.as_os_str().is_empty() {
                errors.push(ConfigError::new(&field, "Source path must not be empty"));
            }
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.prod_file.as_os_str().is_empty() {
            errors.push(ConfigError::new("output.prod_file", "Must not be empty"));
        }
        if self.test_file.as_os_str().is_empty() {
            errors.push(ConfigError::new("output.test_file", "Must not be empty"));
        }
        if let Some(file) = &self.file
            && file.as_os_str().is_empty()
        {
            errors.push(ConfigError::new("output.file", "Must not be empty"));
        }
        if self.log_file.trim().is_empty() {
            errors.push(ConfigError::new("output.log_file", "Must not be empty"));
        } else if self.log_file.contains(['/', '\\']) {
            errors.push(ConfigError::new(
                "output.log_file",
                "Must be a file name; use output.log_dir for the directory",
            ));
        }

        errors
    }
}
