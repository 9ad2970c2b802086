//! Configuration module for adstxt-merge.
//!
//! This module provides:
//! - The ordered network → source file table
//! - Output and log locations, chosen per [`Environment`]
//! - YAML config file loading and discovery
//! - Command-line override merging and validation
//!
//! # Configuration File
//!
//! Place a `.adstxt-merge.yaml` file in your project root or
//! `~/.config/adstxt-merge/`:
//!
//! ```yaml
//! networks:
//!   Admob: ads/admob.txt
//!   Unity: ads/unity.txt
//! behavior:
//!   environment: test
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_LOG_DIR, DEFAULT_LOG_FILE, DEFAULT_PROD_OUTPUT, DEFAULT_TEST_OUTPUT, default_networks,
};
pub use file::{
    CONFIG_FILE_NAMES, ConfigFileError, ConfigOverrides, discover_config_file,
    generate_full_example_config, load_config_file, load_or_default, search_dirs,
};
pub use types::{AppConfig, AppConfigBuilder, BehaviorConfig, Environment, OutputConfig};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `AppConfig` configuration format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema();
        assert!(schema.contains("networks"));
        assert!(schema.contains("report_format"));
        assert!(schema.contains("fail_on_invalid"));
    }
}
