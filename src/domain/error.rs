use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
pub enum AppError {
    Internal(String),
    ValidationError(String),
    ParseError(String),
    /// Permanent provider failure (bad request, auth, schema violation).
    ModelError(String),
    /// Transient provider failure (rate limit, quota, overload, timeout).
    ModelBusy(String),
    /// Every model candidate failed with a transient error.
    ModelsExhausted,
    ConfigError(String),
    IoError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::ModelError(msg) => write!(f, "Model error: {}", msg),
            AppError::ModelBusy(msg) => write!(f, "Model busy: {}", msg),
            AppError::ModelsExhausted => write!(f, "All AI models failed"),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl AppError {
    /// Transient failures are retried against the next model candidate;
    /// everything else fails the chain immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::ModelBusy(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
