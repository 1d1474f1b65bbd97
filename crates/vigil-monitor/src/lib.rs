//! # vigil-monitor
//!
//! [`MonitorEngine`] opens every store under one data directory and exposes
//! the monitoring operations over the logged predictions: summaries, drift
//! checks against the baseline, and retraining decisions with history.

pub mod engine;

pub use engine::MonitorEngine;
pub use vigil_drift::DriftOutcome;
