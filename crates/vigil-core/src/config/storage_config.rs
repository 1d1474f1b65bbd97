use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// How a log reader treats a line that fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Abort the whole load at the first bad line.
    #[default]
    Strict,
    /// Skip bad lines and keep loading.
    Lenient,
}

/// Storage layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding every log and snapshot file.
    pub data_dir: String,
    pub predictions_file: String,
    pub metrics_file: String,
    pub baseline_file: String,
    pub drift_history_file: String,
    pub retraining_history_file: String,
    pub decode_mode: DecodeMode,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: defaults::DEFAULT_DATA_DIR.to_string(),
            predictions_file: defaults::DEFAULT_PREDICTIONS_FILE.to_string(),
            metrics_file: defaults::DEFAULT_METRICS_FILE.to_string(),
            baseline_file: defaults::DEFAULT_BASELINE_FILE.to_string(),
            drift_history_file: defaults::DEFAULT_DRIFT_HISTORY_FILE.to_string(),
            retraining_history_file: defaults::DEFAULT_RETRAINING_HISTORY_FILE.to_string(),
            decode_mode: DecodeMode::Strict,
        }
    }
}

impl StorageConfig {
    /// Resolve a file name against the data directory.
    pub fn path_of(&self, file_name: &str) -> PathBuf {
        PathBuf::from(&self.data_dir).join(file_name)
    }

    /// Same config rooted at another directory.
    pub fn rooted_at(mut self, data_dir: impl Into<String>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}
