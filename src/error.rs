use serde::Serialize;
use thiserror::Error;

/// A single failing field in a quote submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Raw rejection reported by a third-party provider, before mapping.
    #[error("Provider error {code:?}: {message}")]
    Provider { code: Option<u32>, message: String },

    #[error("Verification failed: {message}")]
    Verification { status: u16, message: String },

    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Feature disabled: {0}")]
    FeatureDisabled(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuoteError {
    /// HTTP status the error surfaces as.
    pub fn status_code(&self) -> u16 {
        match self {
            QuoteError::InvalidRequest(_) => 400,
            QuoteError::Verification { status, .. } => *status,
            QuoteError::Validation(_) => 422,
            QuoteError::FeatureDisabled(_) => 404,
            _ => 500,
        }
    }

    /// Short, non-technical text safe to show an end user.
    pub fn public_message(&self) -> String {
        match self {
            QuoteError::Configuration(message)
            | QuoteError::Upstream(message)
            | QuoteError::InvalidRequest(message)
            | QuoteError::Verification { message, .. } => message.clone(),
            QuoteError::Validation(_) => "Validation failed".to_string(),
            QuoteError::FeatureDisabled(feature) => format!("{} is disabled", feature),
            _ => "Internal server error".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
