//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.datapulse.toml` files, CLI arguments, and programmatic overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".datapulse.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pipeline settings.
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Record source settings.
    #[serde(default)]
    pub source: SourceConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Pipeline tuning knobs.
///
/// None of these are consulted by the current analysis; they are kept as
/// reserved settings for the orchestration layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Records per processing batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Processing timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Number of retries on failure.
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            timeout_ms: default_timeout_ms(),
            retry_attempts: default_retry_attempts(),
        }
    }
}

fn default_batch_size() -> usize {
    1000
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_retry_attempts() -> u32 {
    3
}

/// Partial pipeline settings supplied at initialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub batch_size: Option<usize>,
    pub timeout_ms: Option<u64>,
    pub retry_attempts: Option<u32>,
}

impl PipelineConfig {
    /// Returns a copy with every provided override applied.
    pub fn with_overrides(self, overrides: &ConfigOverrides) -> Self {
        Self {
            batch_size: overrides.batch_size.unwrap_or(self.batch_size),
            timeout_ms: overrides.timeout_ms.unwrap_or(self.timeout_ms),
            retry_attempts: overrides.retry_attempts.unwrap_or(self.retry_attempts),
        }
    }

    /// Check the settings for values no orchestrator could honor.
    pub fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 {
            return Err("Batch size must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Record source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Number of records to generate.
    #[serde(default = "default_record_count")]
    pub record_count: usize,

    /// Fixed RNG seed for reproducible datasets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            record_count: default_record_count(),
            seed: None,
        }
    }
}

fn default_record_count() -> usize {
    1000
}

/// Report output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format of the rendered report.
    #[serde(default)]
    pub format: ReportFormat,
}

/// Output format of the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load `.datapulse.toml` from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were explicitly provided.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        self.pipeline = self.pipeline.with_overrides(&args.overrides());

        if let Some(records) = args.records {
            self.source.record_count = records;
        }
        if let Some(seed) = args.seed {
            self.source.seed = Some(seed);
        }
        if let Some(format) = args.format {
            self.report.format = format;
        }
    }

    /// Check the whole configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.pipeline.validate()?;
        if self.source.record_count == 0 {
            return Err("Record count must be at least 1".to_string());
        }
        Ok(())
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.pipeline.batch_size, 1000);
        assert_eq!(config.pipeline.timeout_ms, 30_000);
        assert_eq!(config.pipeline.retry_attempts, 3);
        assert_eq!(config.source.record_count, 1000);
        assert_eq!(config.source.seed, None);
        assert_eq!(config.report.format, ReportFormat::Markdown);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[pipeline]
batch_size = 250
retry_attempts = 0

[source]
record_count = 50
seed = 9

[report]
format = "json"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.pipeline.batch_size, 250);
        assert_eq!(config.pipeline.timeout_ms, 30_000);
        assert_eq!(config.pipeline.retry_attempts, 0);
        assert_eq!(config.source.record_count, 50);
        assert_eq!(config.source.seed, Some(9));
        assert_eq!(config.report.format, ReportFormat::Json);
    }

    #[test]
    fn test_overrides_apply_only_provided_fields() {
        let overrides = ConfigOverrides {
            timeout_ms: Some(5_000),
            ..Default::default()
        };
        let merged = PipelineConfig::default().with_overrides(&overrides);

        assert_eq!(merged.batch_size, 1000);
        assert_eq!(merged.timeout_ms, 5_000);
        assert_eq!(merged.retry_attempts, 3);
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.pipeline.batch_size = 0;
        assert!(config.validate().is_err());

        config.pipeline.batch_size = 1;
        config.source.record_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from_dir(dir.path()).unwrap().is_none());

        let mut file = std::fs::File::create(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        writeln!(file, "[source]\nrecord_count = 12").unwrap();

        let config = Config::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(config.source.record_count, 12);
        assert_eq!(config.pipeline, PipelineConfig::default());
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[pipeline\nbatch_size = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[pipeline]"));
        assert!(toml_str.contains("[source]"));
        assert!(toml_str.contains("[report]"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
