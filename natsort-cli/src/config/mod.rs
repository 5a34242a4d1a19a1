//! Configuration module
//!
//! An optional TOML file supplies defaults; command-line flags override it.
//!
//! ```toml
//! [sorting]
//! number_type = "real"
//! paths = true
//!
//! [filter]
//! keep = [[20.0, 100.0]]
//! exclude_values = [23.0]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Sort key configuration
    #[serde(default)]
    pub sorting: SortingConfig,

    /// Filter configuration
    #[serde(default)]
    pub filter: FilterConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }
}

/// Sort-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SortingConfig {
    /// Number type name (`int`, `float`, `real`, `version`, ...)
    pub number_type: String,

    /// Treat `+`/`-` as signs
    pub signed: bool,

    /// Fold exponents into float values
    pub exponent: bool,

    /// Path-aware sorting
    pub paths: bool,

    /// Locale-aware number parsing
    pub locale: bool,

    /// Explicit locale name
    pub locale_name: Option<String>,

    /// Case policy: `sensitive`, `ignore`, `lowercase-first`
    pub case: String,

    /// Numbers sort before text
    pub numbers_first: bool,

    /// Reverse the final order
    pub reverse: bool,
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            number_type: "int".to_string(),
            signed: false,
            exponent: true,
            paths: false,
            locale: false,
            locale_name: None,
            case: "sensitive".to_string(),
            numbers_first: true,
            reverse: false,
        }
    }
}

/// Filter-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// Keep intervals as `[low, high]` pairs
    pub keep: Vec<(f64, f64)>,

    /// Exclude intervals as `[low, high]` pairs
    pub exclude: Vec<(f64, f64)>,

    /// Exact values to exclude
    pub exclude_values: Vec<f64>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Entry count above which keys are computed in parallel
    pub parallel_threshold: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            worker_threads: 0,
            parallel_threshold: natsort_core::sort::PARALLEL_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.sorting.number_type, "int");
        assert!(config.sorting.exponent);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::from_toml(
            r#"
[sorting]
number_type = "real"
paths = true

[filter]
keep = [[20.0, 100.0]]
exclude_values = [23.0, 130.0]
"#,
        )
        .unwrap();
        assert_eq!(config.sorting.number_type, "real");
        assert!(config.sorting.paths);
        assert!(config.sorting.numbers_first);
        assert_eq!(config.filter.keep, [(20.0, 100.0)]);
        assert_eq!(config.filter.exclude_values, [23.0, 130.0]);
        assert!(config.filter.exclude.is_empty());
    }

    #[test]
    fn test_invalid_toml() {
        let err = CliConfig::from_toml("[sorting\npaths = true").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("natsort.toml");
        std::fs::write(&path, "[output]\ndefault_format = \"json\"\n").unwrap();
        let config = CliConfig::from_file(&path).unwrap();
        assert_eq!(config.output.default_format, "json");

        let missing = CliConfig::from_file(&dir.path().join("missing.toml"));
        assert!(missing
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file"));
    }
}
