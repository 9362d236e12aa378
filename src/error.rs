//! Error types for the accordion widget

use thiserror::Error;

/// Main error type for widget operations
#[derive(Error, Debug)]
pub enum UiError {
    #[error("Unsupported theme '{0}' (expected 'daisyui' or 'bootstrap')")]
    UnsupportedTheme(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Option '{0}' not found in configuration")]
    UnknownOption(String),

    #[error("Invalid key '{0}'")]
    InvalidKey(String),

    #[error("View host error: {0}")]
    Host(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for widget operations
pub type UiResult<T> = Result<T, UiError>;
