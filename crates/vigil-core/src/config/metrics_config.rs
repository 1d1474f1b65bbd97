use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

use super::{defaults, invalid};

/// Metrics engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Width of one aggregation window, in hours. At least 1, at most
    /// [`defaults::MAX_WINDOW_HOURS`].
    pub window_hours: u64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            window_hours: defaults::DEFAULT_WINDOW_HOURS,
        }
    }
}

impl MetricsConfig {
    pub fn window(&self) -> Result<chrono::Duration, ConfigError> {
        const FIELD: &str = "metrics.window_hours";
        if self.window_hours == 0 {
            return Err(invalid(FIELD, "must be at least 1"));
        }
        if self.window_hours > defaults::MAX_WINDOW_HOURS {
            return Err(invalid(
                FIELD,
                &format!("must be at most {}", defaults::MAX_WINDOW_HOURS),
            ));
        }
        i64::try_from(self.window_hours)
            .ok()
            .and_then(chrono::Duration::try_hours)
            .ok_or_else(|| invalid(FIELD, "does not fit a duration"))
    }
}
