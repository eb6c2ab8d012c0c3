//! Proxygate Public API
//!
//! Decides per outbound request whether an HTTP client should go through the
//! configured proxy, and supplies the proxy address and `Proxy-Authorization`
//! header when it should.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::*;

// Re-export important types from client package
pub use proxygate_client::{
    BypassCache, BypassMatcher, CacheStats, CacheStatsSnapshot, ConfigurationError, Error,
    ProxyConfig, ProxyPolicy, ProxyRoute, ProxyTarget, Result, Url, Validator,
};

/// Main entry point providing static builder methods
pub struct ProxyGate;

impl ProxyGate {
    /// Create a new policy builder
    ///
    /// Shorthand for `PolicyBuilder::new()`
    #[must_use]
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::new()
    }

    /// Create a policy builder seeded from the `PROXY_*` environment variables
    ///
    /// Shorthand for `PolicyBuilder::from_env()`
    #[must_use]
    pub fn from_env() -> PolicyBuilder {
        PolicyBuilder::from_env()
    }

    /// Decide a single request against the process-wide rule cache
    ///
    /// Returns true to route through the proxy, false to connect directly.
    #[must_use]
    pub fn send_through_proxy(
        target_url: &str,
        current_request_host: Option<&str>,
        bypass_list: Option<&str>,
    ) -> bool {
        proxygate_client::send_through_proxy(target_url, current_request_host, bypass_list)
    }
}

/// Create a new policy builder
///
/// Shorthand for `PolicyBuilder::new()`
#[must_use]
pub fn builder() -> PolicyBuilder {
    PolicyBuilder::new()
}
