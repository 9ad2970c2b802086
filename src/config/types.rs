//! Configuration types for adstxt-merge.

use super::defaults;
use crate::reports::ReportFormat;
use clap::ValueEnum;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// ============================================================================
// Environment
// ============================================================================

/// Deployment environment, selected by `--env` or the `ADS_ENV` variable.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production: writes the live file; invalid cert IDs block the build
    #[default]
    Prod,
    /// Test: writes the test file; invalid cert IDs are only reported
    Test,
}

impl Environment {
    /// Environment variable consulted when `--env` is not given.
    pub const VAR: &'static str = "ADS_ENV";

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Prod => "prod",
            Self::Test => "test",
        }
    }

    /// Whether the invalid-cert policy gate applies.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loadable from a YAML file and overridable from
/// the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Network name → source file, in processing order.
    ///
    /// Order matters: when two networks list the same entry, the one listed
    /// first keeps it.
    pub networks: IndexMap<String, PathBuf>,
    /// Output and log file locations
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            networks: defaults::default_networks(),
            output: OutputConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Path of the aggregated file for the configured environment.
    ///
    /// An explicit `output.file` wins over the per-environment names.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        if let Some(file) = &self.output.file {
            return file.clone();
        }
        match self.behavior.environment {
            Environment::Prod => self.output.prod_file.clone(),
            Environment::Test => self.output.test_file.clone(),
        }
    }

    /// Path of the build log.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.output.log_dir.join(&self.output.log_file)
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Replace the network table.
    pub fn networks<I, K, V>(mut self, networks: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<PathBuf>,
    {
        self.config.networks = networks
            .into_iter()
            .map(|(name, path)| (name.into(), path.into()))
            .collect();
        self
    }

    /// Append one network after the existing ones.
    pub fn network(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.config.networks.insert(name.into(), path.into());
        self
    }

    pub const fn environment(mut self, environment: Environment) -> Self {
        self.config.behavior.environment = environment;
        self
    }

    /// Force the output file regardless of environment.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output.log_dir = dir.into();
        self
    }

    pub const fn report_format(mut self, format: ReportFormat) -> Self {
        self.config.output.report_format = format;
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Fail on invalid cert IDs in every environment.
    pub const fn fail_on_invalid(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_invalid = fail;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Output and log locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Aggregated file written in the `prod` environment
    pub prod_file: PathBuf,
    /// Aggregated file written in the `test` environment
    pub test_file: PathBuf,
    /// Explicit aggregated file path, overriding the environment choice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Directory holding the build log (created when missing)
    pub log_dir: PathBuf,
    /// Build log file name inside `log_dir`
    pub log_file: String,
    /// Format of the report echoed to stdout
    pub report_format: ReportFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prod_file: PathBuf::from(defaults::DEFAULT_PROD_OUTPUT),
            test_file: PathBuf::from(defaults::DEFAULT_TEST_OUTPUT),
            file: None,
            log_dir: PathBuf::from(defaults::DEFAULT_LOG_DIR),
            log_file: defaults::DEFAULT_LOG_FILE.to_string(),
            report_format: ReportFormat::Text,
        }
    }
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Do not echo the report to stdout
    pub quiet: bool,
    /// Treat invalid cert IDs as a failure even outside `prod`
    pub fail_on_invalid: bool,
}

impl BehaviorConfig {
    /// Whether invalid cert IDs should fail the run.
    #[must_use]
    pub const fn blocks_on_invalid_certs(&self) -> bool {
        self.environment.is_production() || self.fail_on_invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_follows_environment() {
        let prod = AppConfig::default();
        assert_eq!(prod.output_path(), PathBuf::from("app-ads.txt"));

        let test = AppConfig::builder().environment(Environment::Test).build();
        assert_eq!(test.output_path(), PathBuf::from("app-ads.test.txt"));
    }

    #[test]
    fn test_explicit_output_file_wins() {
        let config = AppConfig::builder()
            .environment(Environment::Test)
            .output_file(Some(PathBuf::from("out/ads.txt")))
            .build();
        assert_eq!(config.output_path(), PathBuf::from("out/ads.txt"));
    }

    #[test]
    fn test_log_path() {
        let config = AppConfig::default();
        assert_eq!(config.log_path(), PathBuf::from("logs/ads-build-latest.log"));
    }

    #[test]
    fn test_builder_networks_keep_order() {
        let config = AppConfig::builder()
            .networks([("Zeta", "z.txt"), ("Alpha", "a.txt")])
            .network("Mid", "m.txt")
            .build();
        let names: Vec<_> = config.networks.keys().map(String::as_str).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_policy_gate() {
        assert!(BehaviorConfig::default().blocks_on_invalid_certs());
        let test = BehaviorConfig {
            environment: Environment::Test,
            ..Default::default()
        };
        assert!(!test.blocks_on_invalid_certs());
        let strict = BehaviorConfig {
            fail_on_invalid: true,
            ..test
        };
        assert!(strict.blocks_on_invalid_certs());
    }

    #[test]
    fn test_environment_serde_lowercase() {
        let yaml = serde_yaml::to_string(&Environment::Test).unwrap();
        assert_eq!(yaml.trim(), "test");
        let env: Environment = serde_yaml::from_str("prod").unwrap();
        assert_eq!(env, Environment::Prod);
    }
}
