//! The externally driven analysis system.
//!
//! Wraps a record source and the analysis pipeline behind the three
//! operations the entry point needs: initialize, process and export.

use crate::analysis::run_analysis;
use crate::config::{ConfigOverrides, PipelineConfig};
use crate::error::{Result, SystemError};
use crate::models::{Dataset, ExportBundle, ExportMetadata, Report};
use crate::source::RecordSource;
use chrono::Utc;
use tracing::{debug, error, info};

/// Version reported in exports.
pub const SYSTEM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Holds the configuration and the dataset loaded at initialization.
pub struct AnalysisSystem<S> {
    source: S,
    config: PipelineConfig,
    dataset: Option<Dataset>,
}

impl<S: RecordSource> AnalysisSystem<S> {
    /// Create an uninitialized system with default pipeline settings.
    pub fn new(source: S) -> Self {
        Self::with_config(source, PipelineConfig::default())
    }

    /// Create an uninitialized system with the given pipeline settings.
    pub fn with_config(source: S, config: PipelineConfig) -> Self {
        Self {
            source,
            config,
            dataset: None,
        }
    }

    /// Effective pipeline settings.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The loaded dataset, if initialized.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Apply configuration overrides and load the dataset from the source.
    pub async fn initialize(&mut self, overrides: Option<ConfigOverrides>) -> Result<()> {
        info!("Initializing analysis system...");

        let config = match overrides {
            Some(ref overrides) => self.config.with_overrides(overrides),
            None => self.config,
        };
        config.validate().map_err(SystemError::InvalidConfig)?;
        debug!("Pipeline config: {:?}", config);

        let dataset = self.source.load().map_err(|e| {
            error!("Error loading data from {} source: {}", self.source.name(), e);
            SystemError::InitializationFailed(e)
        })?;
        info!("Loaded {} records", dataset.len());

        self.config = config;
        self.dataset = Some(dataset);

        info!("System initialized successfully");
        Ok(())
    }

    /// Run the analysis pipeline over the loaded dataset.
    pub async fn process_data(&self) -> Result<Report> {
        let dataset = self.dataset.clone().ok_or(SystemError::NotInitialized)?;

        run_analysis(&dataset).map_err(|e| {
            error!("Error processing data: {}", e);
            SystemError::ProcessingFailed(e)
        })
    }

    /// Snapshot of the dataset with export metadata.
    pub fn export_data(&self) -> ExportBundle {
        let data = self.dataset.clone().unwrap_or_default();

        ExportBundle {
            metadata: ExportMetadata {
                export_time: Utc::now(),
                record_count: data.len(),
                system_version: SYSTEM_VERSION.to_string(),
            },
            data,
        }
    }
}
