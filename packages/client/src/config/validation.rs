//! Proxy Configuration Validation
//!
//! Opt-in checks for proxy settings loaded from external sources. The
//! decision path never validates; callers run this once at startup.

use crate::proxy::core::ProxyConfig;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid proxy host: {0}")]
    InvalidHost(String),

    #[error("Invalid proxy port: {0}")]
    InvalidPort(String),

    #[error("Missing configuration field: {0}")]
    MissingField(&'static str),

    #[error("Configuration conflict: {0}")]
    Conflict(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidHost` - if the host contains whitespace, a scheme or a path
    /// - `InvalidPort` - if the port is not a non-zero 16-bit number
    /// - `MissingField` - if a field required by another one is absent
    /// - `Conflict` - if configuration settings conflict with each other
    fn validate(&self) -> ConfigResult<()>;
}

/// Common proxy configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a proxy host name or address
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidHost` if:
    /// - The host is empty
    /// - The host contains whitespace
    /// - The host carries a scheme (`http://`) or a path
    pub fn validate_host(host: &str) -> ConfigResult<()> {
        if host.is_empty() {
            return Err(ConfigurationError::InvalidHost("host cannot be empty".to_string()));
        }

        if host.chars().any(char::is_whitespace) {
            return Err(ConfigurationError::InvalidHost(format!(
                "{host:?} contains whitespace"
            )));
        }

        if host.contains("://") || host.contains('/') {
            return Err(ConfigurationError::InvalidHost(format!(
                "{host:?} must be a bare host without scheme or path"
            )));
        }

        Ok(())
    }

    /// Validate a proxy port and return it as a number
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidPort` if the port does not parse
    /// as a `u16` or is zero.
    pub fn validate_port(port: &str) -> ConfigResult<u16> {
        match port.trim().parse::<u16>() {
            Ok(0) => Err(ConfigurationError::InvalidPort("port cannot be zero".to_string())),
            Ok(number) => Ok(number),
            Err(e) => Err(ConfigurationError::InvalidPort(format!("{port:?}: {e}"))),
        }
    }

    /// Validate that two optional fields are either both set or both unset
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingField` naming the absent field.
    pub fn validate_pair(
        first: Option<&str>,
        first_name: &'static str,
        second: Option<&str>,
        second_name: &'static str,
    ) -> ConfigResult<()> {
        match (present(first), present(second)) {
            (true, false) => Err(ConfigurationError::MissingField(second_name)),
            (false, true) => Err(ConfigurationError::MissingField(first_name)),
            _ => Ok(()),
        }
    }
}

fn present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

impl Validator for ProxyConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_pair(self.host(), "host", self.port(), "port")?;
        ConfigValidator::validate_pair(
            self.username(),
            "username",
            self.password(),
            "password",
        )?;

        if let Some(host) = self.host() {
            ConfigValidator::validate_host(host)?;
        }
        if let Some(port) = self.port() {
            ConfigValidator::validate_port(port)?;
        }

        if self.uses_authentication() && !self.is_enabled() {
            return Err(ConfigurationError::Conflict(
                "credentials are set but no proxy host/port is configured".to_string(),
            ));
        }

        Ok(())
    }
}
