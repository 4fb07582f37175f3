use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in `{field}`: {reason}")]
    ConfigError { field: String, reason: String },

    #[error("Validation failed for `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("Deployment failed: {message}")]
    DeployError { message: String },
}

pub type Result<T> = std::result::Result<T, ForgeError>;
