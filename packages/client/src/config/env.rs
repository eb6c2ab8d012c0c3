//! Environment-backed proxy configuration
//!
//! Reads the proxy settings once at startup. Empty values count as unset so
//! that `PROXY_HOST=` in a shell profile does not enable a half-configured
//! proxy.

use crate::proxy::core::ProxyConfig;

/// Proxy host, e.g. `192.168.84.101`
pub const PROXY_HOST: &str = "PROXY_HOST";
/// Proxy port, e.g. `8080`
pub const PROXY_PORT: &str = "PROXY_PORT";
/// Username for Basic proxy authentication
pub const PROXY_USERNAME: &str = "PROXY_USERNAME";
/// Password for Basic proxy authentication
pub const PROXY_PASSWORD: &str = "PROXY_PASSWORD";
/// Comma separated hosts that never go through the proxy, `*` wildcards allowed
pub const PROXY_BYPASS_HOSTS: &str = "PROXY_BYPASS_HOSTS";

impl ProxyConfig {
    /// Returns a proxy configuration read from the process environment.
    ///
    /// See [`ProxyConfig::from_lookup`] for how values are interpreted.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Returns a proxy configuration built from an arbitrary key lookup.
    ///
    /// The lookup is asked for [`PROXY_HOST`], [`PROXY_PORT`],
    /// [`PROXY_USERNAME`], [`PROXY_PASSWORD`] and [`PROXY_BYPASS_HOSTS`].
    /// Values are trimmed; empty values are treated as unset. The port is
    /// kept as given, a non-numeric port only produces a warning since
    /// validation is left to [`crate::config::Validator`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let config = ProxyConfig {
            host: read(PROXY_HOST),
            port: read(PROXY_PORT),
            username: read(PROXY_USERNAME),
            // passwords may legitimately carry surrounding spaces
            password: lookup(PROXY_PASSWORD).filter(|value| !value.is_empty()),
            bypass_list: read(PROXY_BYPASS_HOSTS),
        };

        if let Some(port) = config.port()
            && config.port_number().is_none()
        {
            tracing::warn!(
                target: "proxygate::config",
                port = %port,
                "PROXY_PORT is not a valid port number"
            );
        }

        tracing::debug!(
            target: "proxygate::config",
            enabled = config.is_enabled(),
            authenticated = config.uses_authentication(),
            has_bypass_list = config.bypass_list().is_some(),
            "Loaded proxy configuration from environment"
        );

        config
    }
}
