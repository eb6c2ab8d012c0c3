//! Per-request proxy decision

use std::sync::Arc;

use tracing::trace;

use super::cache::{BypassCache, shared_cache};
use super::host::CandidateHost;
use crate::Url;

/// Decides whether a request goes through the proxy.
///
/// Every decision is total: a URL that cannot be evaluated is sent through
/// the proxy rather than risking a direct connection.
#[derive(Debug, Clone)]
pub struct BypassMatcher {
    cache: Arc<BypassCache>,
}

impl BypassMatcher {
    /// Create a matcher with its own, private rule cache
    #[must_use]
    pub fn new() -> Self {
        Self::with_cache(Arc::new(BypassCache::new()))
    }

    /// Create a matcher backed by the process-wide rule cache
    #[must_use]
    pub fn shared() -> Self {
        Self::with_cache(shared_cache())
    }

    #[must_use]
    pub fn with_cache(cache: Arc<BypassCache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Arc<BypassCache> {
        &self.cache
    }

    /// Returns true to route `target_url` through the proxy, false to
    /// connect directly.
    ///
    /// - a URL without a parsable host goes through the proxy
    /// - the host is compared as written in `target_url`, case included
    /// - `localhost` and `current_request_host` (the host the application is
    ///   itself being served on) never do
    /// - with no bypass list everything else does
    /// - otherwise the compiled bypass list decides
    ///
    /// ```
    /// use proxygate_client::proxy::BypassMatcher;
    ///
    /// let matcher = BypassMatcher::new();
    /// let list = Some("localhost, www.example.com, *.wordpress.org");
    ///
    /// assert!(!matcher.send_through_proxy("http://sub.wordpress.org/page", None, list));
    /// assert!(matcher.send_through_proxy("http://wordpress.org/page", None, list));
    /// assert!(matcher.send_through_proxy(":::notaurl", None, list));
    /// ```
    pub fn send_through_proxy(
        &self,
        target_url: &str,
        current_request_host: Option<&str>,
        bypass_list: Option<&str>,
    ) -> bool {
        match CandidateHost::from_target(target_url) {
            Some(host) => self.decide(&host, current_request_host, bypass_list),
            None => {
                trace!(
                    target: "proxygate::bypass",
                    url = %target_url,
                    "No host in target URL, sending through proxy"
                );
                true
            }
        }
    }

    /// [`BypassMatcher::send_through_proxy`] for an already parsed URL.
    ///
    /// The parser has normalized the host by then, so `http`/`https` hosts
    /// are compared in lower case.
    pub fn send_url_through_proxy(
        &self,
        target_url: &Url,
        current_request_host: Option<&str>,
        bypass_list: Option<&str>,
    ) -> bool {
        match CandidateHost::from_url(target_url) {
            Some(host) => self.decide(&host, current_request_host, bypass_list),
            None => true,
        }
    }

    /// Negation of [`BypassMatcher::send_through_proxy`].
    pub fn should_bypass(
        &self,
        target_url: &str,
        current_request_host: Option<&str>,
        bypass_list: Option<&str>,
    ) -> bool {
        !self.send_through_proxy(target_url, current_request_host, bypass_list)
    }

    /// Decision for an extracted host.
    pub fn decide(
        &self,
        host: &CandidateHost,
        current_request_host: Option<&str>,
        bypass_list: Option<&str>,
    ) -> bool {
        if host.is_localhost() || current_request_host == Some(host.as_str()) {
            trace!(target: "proxygate::bypass", host = %host, "Loopback or own host, connecting directly");
            return false;
        }

        let Some(bypass_list) = bypass_list.filter(|list| !list.trim().is_empty()) else {
            return true;
        };

        let bypass = self.cache.get_or_compile(bypass_list).matches(host.as_str());
        trace!(target: "proxygate::bypass", host = %host, bypass, "Evaluated bypass list");
        !bypass
    }
}

impl Default for BypassMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Decide a single request against the process-wide rule cache.
///
/// See [`BypassMatcher::send_through_proxy`].
pub fn send_through_proxy(
    target_url: &str,
    current_request_host: Option<&str>,
    bypass_list: Option<&str>,
) -> bool {
    BypassMatcher::shared().send_through_proxy(target_url, current_request_host, bypass_list)
}
