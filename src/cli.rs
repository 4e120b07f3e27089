//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::config::{ConfigOverrides, ReportFormat};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// DataPulse - summary statistics, insights and recommendations
///
/// Generates a dataset of timestamped numeric records, analyzes it and
/// prints a report.
///
/// Examples:
///   datapulse
///   datapulse --records 50 --seed 7
///   datapulse --format json --output report.json
///   datapulse --export dataset.json
///   datapulse --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Number of records to generate
    ///
    /// Overrides [source].record_count from the config file (default 1000).
    #[arg(short = 'n', long, value_name = "COUNT", env = "DATAPULSE_RECORDS")]
    pub records: Option<usize>,

    /// RNG seed for reproducible datasets
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Records per processing batch (reserved)
    #[arg(long, value_name = "SIZE")]
    pub batch_size: Option<usize>,

    /// Processing timeout in milliseconds (reserved)
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Retry attempts on failure (reserved)
    #[arg(long, value_name = "COUNT")]
    pub retry_attempts: Option<u32>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .datapulse.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (markdown, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<ReportFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Export the dataset and export metadata as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .datapulse.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.records == Some(0) {
            return Err("Record count must be at least 1".to_string());
        }

        if self.batch_size == Some(0) {
            return Err("Batch size must be at least 1".to_string());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Pipeline overrides given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            batch_size: self.batch_size,
            timeout_ms: self.timeout_ms,
            retry_attempts: self.retry_attempts,
        }
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Build the log filter from `RUST_LOG`-style directives.
    ///
    /// The verbosity flags set the default level for anything the
    /// directives don't mention.
    pub fn env_filter(&self, directives: Option<&str>) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(self.log_level()).into())
            .parse_lossy(directives.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn make_args() -> Args {
        Args {
            records: None,
            seed: None,
            batch_size: None,
            timeout_ms: None,
            retry_attempts: None,
            config: None,
            format: None,
            output: None,
            export: None,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "datapulse",
            "--records",
            "50",
            "--seed",
            "7",
            "--format",
            "json",
            "--retry-attempts",
            "0",
        ])
        .unwrap();

        assert_eq!(args.records, Some(50));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.format, Some(ReportFormat::Json));
        assert_eq!(args.retry_attempts, Some(0));
        assert_eq!(args.batch_size, None);
    }

    #[test]
    fn test_validation_zero_records() {
        let mut args = make_args();
        args.records = Some(0);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_merge_with_args_only_overrides_given_values() {
        let mut config: Config = toml::from_str("[pipeline]\ntimeout_ms = 10\n").unwrap();
        let mut args = make_args();
        args.records = Some(42);
        args.batch_size = Some(7);

        config.merge_with_args(&args);

        assert_eq!(config.source.record_count, 42);
        assert_eq!(config.pipeline.batch_size, 7);
        assert_eq!(config.pipeline.timeout_ms, 10);
        assert_eq!(config.report.format, ReportFormat::Markdown);
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }

    #[test]
    fn test_env_filter_defaults_to_verbosity() {
        let mut args = make_args();
        assert_eq!(args.env_filter(None).max_level_hint(), Some(LevelFilter::INFO));

        args.verbose = true;
        assert_eq!(args.env_filter(None).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_env_filter_accepts_directives() {
        let args = make_args();
        let filter = args.env_filter(Some("datapulse=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
