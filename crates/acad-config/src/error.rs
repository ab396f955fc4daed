//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment could not merge or extract the layered sources.
    #[error("failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A section lacks the fields needed to talk to the backend.
    #[error("[{section}] is not configured: set {}", .missing.join(", "))]
    NotConfigured {
        section: &'static str,
        missing: Vec<&'static str>,
    },

    /// A field is present but unusable.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
