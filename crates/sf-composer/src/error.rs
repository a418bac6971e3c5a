//! Composer error types

use sf_core::SfError;
use thiserror::Error;

/// Errors from provider construction and model calls
#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Provider request timed out")]
    Timeout,

    #[error("Empty completion from provider")]
    EmptyResponse,

    #[error("Unparseable model output: {0}")]
    Parse(String),
}

impl From<ComposerError> for SfError {
    fn from(e: ComposerError) -> Self {
        SfError::Provider(e.to_string())
    }
}

/// Convenience alias for composer operations
pub type ComposerResult<T> = Result<T, ComposerError>;
