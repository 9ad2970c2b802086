//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, Environment};
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".adstxt-merge.yaml",
    ".adstxt-merge.yml",
    "adstxt-merge.yaml",
    "adstxt-merge.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/adstxt-merge/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path
        && path.exists()
    {
        return Some(path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_in_dir(&cwd)
    {
        return Some(path);
    }

    if let Some(git_root) = find_git_root()
        && let Some(path) = find_config_in_dir(&git_root)
    {
        return Some(path);
    }

    if let Some(config_dir) = dirs::config_dir()
        && let Some(path) = find_config_in_dir(&config_dir.join("adstxt-merge"))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Directories searched by [`discover_config_file`], in order.
#[must_use]
pub fn search_dirs() -> Vec<PathBuf> {
    [
        std::env::current_dir().ok(),
        find_git_root(),
        dirs::config_dir().map(|p| p.join("adstxt-merge")),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Command-line Overrides
// ============================================================================

/// Values given on the command line, layered over the file config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub environment: Option<Environment>,
    pub output_file: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub report_format: Option<ReportFormat>,
    pub quiet: bool,
    pub fail_on_invalid: bool,
}

impl AppConfig {
    /// Apply command-line overrides; set values win, unset ones leave the
    /// file config alone.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(environment) = overrides.environment {
            self.behavior.environment = environment;
        }
        if overrides.output_file.is_some() {
            self.output.file.clone_from(&overrides.output_file);
        }
        if let Some(dir) = &overrides.log_dir {
            self.output.log_dir.clone_from(dir);
        }
        if let Some(format) = overrides.report_format {
            self.output.report_format = format;
        }
        if overrides.quiet {
            self.behavior.quiet = true;
        }
        if overrides.fail_on_invalid {
            self.behavior.fail_on_invalid = true;
        }
    }

    /// Load from file and apply command-line overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.apply_overrides(overrides);
        (config, loaded_from)
    }

    /// Like [`Self::from_file_with_overrides`], but an explicitly named config
    /// file that cannot be loaded is an error instead of a silent fallback.
    pub fn load_with_overrides(
        explicit_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> crate::error::Result<(Self, Option<PathBuf>)> {
        let Some(path) = explicit_path else {
            return Ok(Self::from_file_with_overrides(None, overrides));
        };
        let mut config = load_config_file(path)?;
        config.apply_overrides(overrides);
        Ok((config, Some(path.to_path_buf())))
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r#"# adstxt-merge configuration
# ===========================
#
# Place this file at .adstxt-merge.yaml in your project root or
# ~/.config/adstxt-merge/adstxt-merge.yaml. CLI arguments override it.

# Network name -> source file. Order matters: when an entry appears in
# several networks, the first network listed keeps it.
networks:
  Admob: ads/admob.txt
  Meta: ads/meta.txt
  Applovin: ads/applovin.txt
  Mintegral: ads/mintegral.txt
  Liftoff: ads/liftoff.txt
  Unity: ads/unity.txt
  Inmobi Admob: ads/inmobi_admob.txt
  Inmobi MAX: ads/inmobi_max.txt
  Pangle: ads/Pangle.txt
  Reklam: ads/Reklam.txt
  DT Exchange: ads/dt_exchange.txt
  Yandex: ads/yandex.txt

output:
  # Aggregated file per environment
  prod_file: app-ads.txt
  test_file: app-ads.test.txt
  # Explicit path, overriding the per-environment names
  # file: public/app-ads.txt
  log_dir: logs
  log_file: ads-build-latest.log
  # Format of the report printed to stdout: text, json
  report_format: text

behavior:
  # prod or test (ADS_ENV / --env override this)
  environment: prod
  # Do not print the report
  quiet: false
  # Fail on invalid cert IDs even outside prod
  fail_on_invalid: false
"#
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
