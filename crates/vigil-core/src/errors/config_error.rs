/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("config parse error: {message}")]
    Parse { message: String },

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
