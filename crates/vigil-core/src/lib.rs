//! # vigil-core
//!
//! Foundation crate for the vigil model monitor.
//! Defines the record and verdict types, storage and sink traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VigilConfig;
pub use errors::{VigilError, VigilResult};
pub use events::MonitorEvent;
pub use models::{
    BaselineDistribution, DriftVerdict, MetricsSummary, PredictionRecord, RetrainingVerdict,
};
