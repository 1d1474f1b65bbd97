//! # vigil-drift
//!
//! Measures how far the current predicted-label distribution has moved from
//! a persisted baseline. The first evaluation without a baseline captures one
//! instead of measuring, and says so through [`DriftOutcome::Bootstrapped`].

pub mod advisories;
pub mod distance;
pub mod engine;
pub mod outcome;

pub use distance::wasserstein;
pub use engine::DriftEngine;
pub use outcome::DriftOutcome;
