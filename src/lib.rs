//! DataPulse - record analysis pipeline
//!
//! Loads a dataset of timestamped numeric records from a
//! [`RecordSource`](source::RecordSource), then computes summary
//! statistics, insights and recommendations over it.
//!
//! ```no_run
//! use datapulse::source::SyntheticSource;
//! use datapulse::system::AnalysisSystem;
//!
//! # async fn demo() -> datapulse::error::Result<()> {
//! let mut system = AnalysisSystem::new(SyntheticSource::new(1000));
//! system.initialize(None).await?;
//! let report = system.process_data().await?;
//! println!("{:?}", report.insights);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod source;
pub mod system;
