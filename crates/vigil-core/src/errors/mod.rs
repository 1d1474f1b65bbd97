//! Error types for every vigil layer.
//!
//! Sub-errors convert into [`VigilError`] with `?`.

mod config_error;
mod storage_error;

pub use config_error::ConfigError;
pub use storage_error::StorageError;

/// Result alias used throughout the workspace.
pub type VigilResult<T> = Result<T, VigilError>;

/// Root error type.
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("invalid record: {reason}")]
    InvalidRecord { reason: String },

    #[error("invalid window: {reason}")]
    InvalidWindow { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl VigilError {
    /// True when the backing medium could not be read or written.
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageError(StorageError::Unavailable { .. }))
    }

    /// True when a persisted line failed to decode.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::StorageError(StorageError::Decode { .. } | StorageError::SchemaMismatch { .. })
        )
    }
}
