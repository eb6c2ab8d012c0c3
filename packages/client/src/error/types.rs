//! Error types for the fallible edges of the proxy module
//!
//! The bypass decision itself never fails. Errors only surface from
//! configuration validation, environment parsing and typed header handling.

use crate::config::validation::ConfigurationError;

/// A Result alias where the Err case is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building or inspecting proxy configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The proxy configuration failed validation
    #[error("invalid proxy configuration: {0}")]
    Config(#[from] ConfigurationError),

    /// A header value could not be built from the configured credentials
    #[error("invalid proxy authorization header: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    /// Base64 credentials could not be decoded
    #[error("invalid base64 in proxy credentials: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Decoded credentials were not `username:password`
    #[error("malformed proxy credentials: {0}")]
    Credentials(String),
}

impl Error {
    /// Returns true if this error came from configuration validation.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}
