//! Layered configuration loaded from TOML. Every field has a default.

pub mod defaults;
mod drift_config;
mod metrics_config;
mod observability_config;
mod retraining_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use drift_config::DriftConfig;
pub use metrics_config::MetricsConfig;
pub use observability_config::ObservabilityConfig;
pub use retraining_config::RetrainingConfig;
pub use storage_config::{DecodeMode, StorageConfig};

use crate::errors::{ConfigError, VigilResult};

/// Top-level configuration for the whole monitor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VigilConfig {
    pub storage: StorageConfig,
    pub metrics: MetricsConfig,
    pub drift: DriftConfig,
    pub retraining: RetrainingConfig,
    pub observability: ObservabilityConfig,
}

impl VigilConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(source: &str) -> VigilResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> VigilResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_toml(&source)
    }

    /// Reject values the engines cannot work with.
    pub fn validate(&self) -> VigilResult<()> {
        check_unit("drift.threshold", self.drift.threshold)?;
        check_unit(
            "drift.confidence_shift_advisory",
            self.drift.confidence_shift_advisory,
        )?;
        check_unit(
            "drift.confidence_drop_escalation",
            self.drift.confidence_drop_escalation,
        )?;
        check_unit("retraining.confidence_floor", self.retraining.confidence_floor)?;

        self.metrics.window()?;
        if self.retraining.top_reasons == 0 {
            return Err(invalid("retraining.top_reasons", "must be at least 1").into());
        }
        Ok(())
    }
}

fn check_unit(field: &str, value: f64) -> VigilResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, &format!("{value} is outside [0, 1]")).into())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}
