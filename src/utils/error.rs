use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to resolve {host}:{port}: {source}")]
    ResolveError {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("Task failed to complete: {0}")]
    TaskJoinError(#[from] tokio::task::JoinError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl DemoError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that the file exists and is readable",
            DemoError::ResolveError { .. } => {
                "Check network connectivity, or rerun with --offline"
            }
            DemoError::TaskJoinError(_) => "A demo task panicked; rerun with --verbose",
            DemoError::SerializationError(_) => "Rerun without --json",
            DemoError::ConfigError { .. } | DemoError::ConfigValidationError { .. } => {
                "Check the settings file syntax"
            }
            DemoError::InvalidConfigValueError { .. } => "Check the command line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
