/// Errors raised by the record log and snapshot stores.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {path}: {reason}")]
    Unavailable { path: String, reason: String },

    #[error("decode failed at {path}:{line}: {reason}")]
    Decode {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("schema mismatch at {path}:{line}: expected {expected}, found {found}")]
    SchemaMismatch {
        path: String,
        line: usize,
        expected: String,
        found: String,
    },
}

impl StorageError {
    /// Build an `Unavailable` error from an I/O failure.
    pub fn unavailable(path: impl AsRef<std::path::Path>, err: &std::io::Error) -> Self {
        Self::Unavailable {
            path: path.as_ref().display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Line number carried by decode failures.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Decode { line, .. } | Self::SchemaMismatch { line, .. } => Some(*line),
            Self::Unavailable { .. } => None,
        }
    }
}
