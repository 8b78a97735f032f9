//! Error model used by alert-monitoring API client operations.

use std::io;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlertError>;

/// Represents error conditions that can occur while talking to the alerting service, including HTTP errors with status and message, timeouts, network issues, serialization problems and other unexpected errors.
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("http {status}: {message}")]
    Http {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("unexpected error: {0}")]
    Other(String),
}

impl AlertError {
    /// Constructs an HTTP error variant with optional service-specific code.
    pub fn http(status: StatusCode, code: Option<String>, message: impl Into<String>) -> Self {
        AlertError::Http {
            status,
            code,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for AlertError {
    /// Converts reqwest errors into semantic AlertError variants.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AlertError::Timeout(err.to_string())
        } else if err.is_status() {
            let status = err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            AlertError::Http {
                status,
                code: None,
                message: err.to_string(),
            }
        } else if err.is_connect() {
            AlertError::Network(err.to_string())
        } else {
            AlertError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AlertError {
    /// Converts serde_json decode/encode failures into serialization errors.
    fn from(err: serde_json::Error) -> Self {
        AlertError::Serialization(err.to_string())
    }
}
