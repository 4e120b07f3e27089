//! Error types for the analysis pipeline.

use thiserror::Error;

/// Errors raised by a record source while producing a dataset.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Record count must be at least 1")]
    InvalidCount,

    #[error("Failed to load records: {0}")]
    Load(String),
}

/// Errors raised by the analysis components.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Cannot analyze an empty dataset")]
    EmptyDataset,
}

/// Errors surfaced by the system's external operations.
#[derive(Error, Debug)]
pub enum SystemError {
    #[error("Failed to initialize data: {0}")]
    InitializationFailed(#[source] SourceError),

    #[error("Data processing failed: {0}")]
    ProcessingFailed(#[source] AnalysisError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("System has not been initialized")]
    NotInitialized,
}

pub type Result<T, E = SystemError> = std::result::Result<T, E>;
