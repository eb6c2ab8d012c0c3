//! Core `PolicyBuilder` structure and base functionality
//!
//! Contains the `PolicyBuilder` struct and the methods that place the proxy,
//! set the bypass list and choose which rule cache the resulting policy uses.

use std::sync::Arc;

use proxygate_client::config::Validator;
use proxygate_client::{BypassCache, BypassMatcher, ProxyConfig, ProxyPolicy};

/// Which compiled-rule cache a built policy uses
#[derive(Debug, Clone, Default)]
enum CacheChoice {
    /// The process-wide cache
    #[default]
    Shared,
    /// A cache owned by this policy alone
    Isolated,
    /// A caller-provided cache
    Custom(Arc<BypassCache>),
}

/// Fluent builder for [`ProxyPolicy`]
///
/// # Examples
/// ```
/// use proxygate::PolicyBuilder;
///
/// let policy = PolicyBuilder::new()
///     .proxy("192.168.84.101", 8080)
///     .bypass("localhost, www.example.com, *.wordpress.org")
///     .current_host("blog.example.net")
///     .build();
///
/// assert!(policy.route("http://sub.wordpress.org/").is_direct());
/// assert!(!policy.route("http://wordpress.org/").is_direct());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    pub(crate) config: ProxyConfig,
    current_host: Option<String>,
    cache: CacheChoice,
}

impl PolicyBuilder {
    /// Create a builder with proxying disabled
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    #[must_use]
    pub fn from_config(config: ProxyConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Start from the `PROXY_*` environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_config(ProxyConfig::from_env())
    }

    /// Set the proxy host and port
    ///
    /// # Arguments
    /// * `host` - Proxy host name or address
    /// * `port` - Proxy port, as a number or a string
    #[must_use]
    pub fn proxy<H, P>(mut self, host: H, port: P) -> Self
    where
        H: Into<String>,
        P: ToString,
    {
        self.config = self.config.with_host(host).with_port(port);
        self
    }

    /// Set the comma separated list of hosts that bypass the proxy
    ///
    /// Entries may use `*` wildcards, e.g. `*.wordpress.org`.
    #[must_use]
    pub fn bypass<T: Into<String>>(mut self, bypass_list: T) -> Self {
        self.config = self.config.with_bypass_list(bypass_list);
        self
    }

    /// Set the host the application is served on; requests to it are
    /// always sent directly
    #[must_use]
    pub fn current_host<T: Into<String>>(mut self, host: T) -> Self {
        self.current_host = Some(host.into());
        self
    }

    /// Give the built policy its own compiled-rule cache instead of the
    /// process-wide one
    #[must_use]
    pub fn isolated_cache(mut self) -> Self {
        self.cache = CacheChoice::Isolated;
        self
    }

    /// Share a specific compiled-rule cache between policies
    #[must_use]
    pub fn cache(mut self, cache: Arc<BypassCache>) -> Self {
        self.cache = CacheChoice::Custom(cache);
        self
    }

    /// The configuration assembled so far
    #[must_use]
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// Validate the configuration assembled so far
    ///
    /// # Errors
    ///
    /// Returns [`proxygate_client::Error::Config`] describing the first
    /// problem found.
    pub fn validate(self) -> proxygate_client::Result<Self> {
        self.config.validate()?;
        Ok(self)
    }

    /// Build the routing policy
    #[must_use]
    pub fn build(self) -> ProxyPolicy {
        let matcher = match self.cache {
            CacheChoice::Shared => BypassMatcher::shared(),
            CacheChoice::Isolated => BypassMatcher::new(),
            CacheChoice::Custom(cache) => BypassMatcher::with_cache(cache),
        };

        tracing::debug!(
            target: "proxygate::proxy",
            enabled = self.config.is_enabled(),
            authenticated = self.config.uses_authentication(),
            "Built proxy policy"
        );

        let policy = ProxyPolicy::new(Arc::new(self.config)).with_matcher(matcher);
        match self.current_host {
            Some(host) => policy.with_current_host(host),
            None => policy,
        }
    }
}
