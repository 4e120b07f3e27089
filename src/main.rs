//! DataPulse - record analysis pipeline
//!
//! A CLI tool that generates a dataset of timestamped numeric records,
//! computes summary statistics, derives insights and recommendations,
//! and renders the result as a Markdown or JSON report.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (configuration, initialization, processing, I/O)

use anyhow::{Context, Result};
use datapulse::cli::Args;
use datapulse::config::{Config, ReportFormat, CONFIG_FILE_NAME};
use datapulse::report;
use datapulse::source::SyntheticSource;
use datapulse::system::AnalysisSystem;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args)?;

    info!("DataPulse v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args).await {
        error!("Analysis failed: {:#}", e);
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .datapulse.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    std::fs::write(path, Config::default_toml())
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("✅ Created {} with default settings.", CONFIG_FILE_NAME);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// `RUST_LOG` directives refine the level chosen by `--verbose`/`--quiet`.
/// Logs go to stderr so a report printed to stdout stays clean.
fn init_logging(args: &Args) -> Result<()> {
    let directives = std::env::var("RUST_LOG").ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(args.env_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Run the complete workflow: initialize, analyze, render, export.
async fn run(args: Args) -> Result<()> {
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    let source = SyntheticSource::from(&config.source);
    let mut system = AnalysisSystem::with_config(source, config.pipeline);

    system
        .initialize(None)
        .await
        .context("Failed to initialize analysis system")?;

    let report = system
        .process_data()
        .await
        .context("Failed to process data")?;

    info!(
        "Analysis complete: {} records, {} insights, {} recommendations in {}ms",
        report.summary.total_records,
        report.insights.len(),
        report.recommendations.len(),
        report.summary.processing_time_ms
    );

    let output = match config.report.format {
        ReportFormat::Json => report::generate_json_report(&report)?,
        ReportFormat::Markdown => report::generate_markdown_report(&report),
    };

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report saved to: {}", path.display());
        }
        None => println!("{}", output),
    }

    if let Some(ref path) = args.export {
        let export = system.export_data();
        let json = report::generate_export_json(&export)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write export to {}", path.display()))?;
        info!(
            "Exported {} records to: {}",
            export.metadata.record_count,
            path.display()
        );
    }

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", CONFIG_FILE_NAME);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {:#}", e);
            Ok(Config::default())
        }
    }
}
