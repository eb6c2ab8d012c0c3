//! Per-request routing through the configured proxy
//!
//! Combines the proxy settings, a bypass matcher and the application's own
//! host into a single decision the transport can act on.

use std::sync::Arc;

use http::{HeaderMap, HeaderValue, header::PROXY_AUTHORIZATION};

use super::bypass::BypassMatcher;
use super::core::ProxyConfig;
use crate::Url;

/// Where a request should be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyRoute {
    /// Connect to the origin directly
    Direct,
    /// Connect through the proxy
    Proxy(ProxyTarget),
}

impl ProxyRoute {
    pub fn is_direct(&self) -> bool {
        matches!(self, ProxyRoute::Direct)
    }

    pub fn target(&self) -> Option<&ProxyTarget> {
        match self {
            ProxyRoute::Proxy(target) => Some(target),
            ProxyRoute::Direct => None,
        }
    }
}

/// The proxy endpoint and credentials a request should use.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxyTarget {
    host: String,
    port: String,
    authorization: Option<HeaderValue>,
}

impl ProxyTarget {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// `host:port`, ready for a CONNECT request or socket address lookup.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The `Proxy-Authorization` value, when credentials are configured.
    pub fn authorization(&self) -> Option<&HeaderValue> {
        self.authorization.as_ref()
    }

    /// Inserts `Proxy-Authorization` into `headers` when credentials are
    /// configured. Existing values are replaced.
    pub fn apply_headers(&self, headers: &mut HeaderMap) {
        if let Some(authorization) = &self.authorization {
            headers.insert(PROXY_AUTHORIZATION, authorization.clone());
        }
    }
}

impl std::fmt::Debug for ProxyTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyTarget")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("authorization", &self.authorization.is_some())
            .finish()
    }
}

/// Routing policy for one client.
///
/// The configuration is shared by reference; the target is cheap to build
/// per request.
#[derive(Debug, Clone)]
pub struct ProxyPolicy {
    config: Arc<ProxyConfig>,
    matcher: BypassMatcher,
    current_host: Option<String>,
    target: Option<ProxyTarget>,
}

impl ProxyPolicy {
    /// Create a policy over `config`, using the process-wide rule cache.
    pub fn new(config: Arc<ProxyConfig>) -> Self {
        let target = build_target(&config);
        Self {
            config,
            matcher: BypassMatcher::shared(),
            current_host: None,
            target,
        }
    }

    /// Set the host the application itself is being served on; requests to
    /// it never go through the proxy.
    #[must_use]
    pub fn with_current_host<T: Into<String>>(mut self, host: T) -> Self {
        self.current_host = Some(host.into());
        self
    }

    #[must_use]
    pub fn with_matcher(mut self, matcher: BypassMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn config(&self) -> &Arc<ProxyConfig> {
        &self.config
    }

    pub fn matcher(&self) -> &BypassMatcher {
        &self.matcher
    }

    pub fn current_host(&self) -> Option<&str> {
        self.current_host.as_deref()
    }

    /// Decide how to reach `target_url`.
    pub fn route(&self, target_url: &str) -> ProxyRoute {
        let Some(target) = &self.target else {
            return ProxyRoute::Direct;
        };

        if self.matcher.send_through_proxy(
            target_url,
            self.current_host.as_deref(),
            self.config.bypass_list(),
        ) {
            ProxyRoute::Proxy(target.clone())
        } else {
            ProxyRoute::Direct
        }
    }

    /// [`ProxyPolicy::route`] for an already parsed URL.
    pub fn route_url(&self, target_url: &Url) -> ProxyRoute {
        let Some(target) = &self.target else {
            return ProxyRoute::Direct;
        };

        if self.matcher.send_url_through_proxy(
            target_url,
            self.current_host.as_deref(),
            self.config.bypass_list(),
        ) {
            ProxyRoute::Proxy(target.clone())
        } else {
            ProxyRoute::Direct
        }
    }
}

fn build_target(config: &ProxyConfig) -> Option<ProxyTarget> {
    if !config.is_enabled() {
        return None;
    }
    let (Some(host), Some(port)) = (config.host(), config.port()) else {
        return None;
    };

    let authorization = if config.uses_authentication() {
        match config.authorization_value() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    target: "proxygate::proxy",
                    error = %e,
                    "Proxy credentials could not be encoded, connecting without authentication"
                );
                None
            }
        }
    } else {
        None
    };

    Some(ProxyTarget {
        host: host.to_owned(),
        port: port.to_owned(),
        authorization,
    })
}
