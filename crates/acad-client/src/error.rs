//! Backend API error types.

use thiserror::Error;

/// Errors that can occur when talking to the dashboard backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or protocol failure before a status code was available.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 401 or 403: the bearer credential was rejected.
    #[error("credential rejected ({status})")]
    Unauthorized {
        /// HTTP status code returned by the backend.
        status: u16,
    },

    /// 404: the addressed record does not exist.
    #[error("not found: {message}")]
    NotFound {
        /// Response body, if any.
        message: String,
    },

    /// The backend refused a write because it would violate uniqueness.
    #[error("conflict ({status}): {message}")]
    Conflict {
        /// 409, or a 400/422 whose body names a uniqueness violation.
        status: u16,
        /// Response body explaining the violation.
        message: String,
    },

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The response body did not match any accepted shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The configured base URL cannot be used.
    #[error("invalid base URL '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// HTTP status behind this error, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(error) => error.status().map(|s| s.as_u16()),
            Self::Unauthorized { status }
            | Self::Conflict { status, .. }
            | Self::Api { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::Parse(_) | Self::InvalidBaseUrl(_) => None,
        }
    }
}
