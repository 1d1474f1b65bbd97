//! # vigil-retraining
//!
//! Decides whether the model needs retraining from three gates (volume,
//! confidence, drift), keeps a history of decisions, and aggregates it.

pub mod engine;
pub mod gates;
pub mod stats;

pub use engine::RetrainingEngine;
pub use gates::{decide, GateInputs};
pub use stats::aggregate_stats;
