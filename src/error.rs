//! Error types for the content API client layer

use thiserror::Error;

/// Content API client errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}
