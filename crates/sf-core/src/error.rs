//! Error types for ShotForge

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum SfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Invalid parameter: {0}")]
    InvalidParam(String),
}

/// Result type alias
pub type SfResult<T> = Result<T, SfError>;
