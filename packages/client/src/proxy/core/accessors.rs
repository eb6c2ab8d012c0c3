//! Predicates, accessors and derived authentication values
//!
//! Nothing here fails: missing fields make the predicates report false and
//! the accessors return `None`. Check `is_enabled()` / `uses_authentication()`
//! before relying on the derived values.

use http::HeaderValue;

use super::types::ProxyConfig;
use crate::auth::{basic_auth, encode_basic_auth};

/// Name of the header produced by [`ProxyConfig::authentication_header`].
pub const PROXY_AUTHORIZATION: &str = "Proxy-Authorization";

fn is_set(value: Option<&String>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

impl ProxyConfig {
    /// Whether a proxy connection should be used at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        is_set(self.host.as_ref()) && is_set(self.port.as_ref())
    }

    /// Whether Basic authentication should be sent to the proxy.
    ///
    /// Both credentials only have to be present; an empty password is a
    /// valid credential.
    #[must_use]
    pub fn uses_authentication(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// The port as a number, if it parses as one.
    #[must_use]
    pub fn port_number(&self) -> Option<u16> {
        self.port.as_deref()?.trim().parse().ok()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// The raw bypass list as configured.
    #[must_use]
    pub fn bypass_list(&self) -> Option<&str> {
        self.bypass_list.as_deref()
    }

    /// `username:password`, with unset parts rendered empty.
    #[must_use]
    pub fn authentication_string(&self) -> String {
        format!(
            "{}:{}",
            self.username().unwrap_or_default(),
            self.password().unwrap_or_default()
        )
    }

    /// Full header line for proxy authentication.
    ///
    /// ```
    /// use proxygate_client::proxy::ProxyConfig;
    ///
    /// let config = ProxyConfig::new().with_credentials("alice", "secret");
    /// assert_eq!(
    ///     config.authentication_header(),
    ///     "Proxy-Authorization: Basic YWxpY2U6c2VjcmV0"
    /// );
    /// ```
    #[must_use]
    pub fn authentication_header(&self) -> String {
        format!(
            "{PROXY_AUTHORIZATION}: Basic {}",
            encode_basic_auth(
                self.username().unwrap_or_default(),
                self.password().unwrap_or_default()
            )
        )
    }

    /// The `Proxy-Authorization` header value (`Basic …`), marked sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidHeader`] if the encoded value is not a
    /// valid header value.
    pub fn authorization_value(&self) -> crate::Result<HeaderValue> {
        basic_auth(
            self.username().unwrap_or_default(),
            self.password().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_requires_host_and_port() {
        assert!(!ProxyConfig::new().is_enabled());
        assert!(!ProxyConfig::new().with_host("proxy").is_enabled());
        assert!(!ProxyConfig::new().with_port(8080).is_enabled());
        assert!(!ProxyConfig::new().with_host("").with_port(8080).is_enabled());
        assert!(ProxyConfig::with_address("proxy", 8080).is_enabled());
    }

    #[test]
    fn authentication_requires_both_credentials() {
        let config = ProxyConfig::with_address("proxy", 8080);
        assert!(!config.uses_authentication());
        assert!(config.clone().with_credentials("alice", "").uses_authentication());
        assert!(config.with_credentials("alice", "secret").uses_authentication());
    }

    #[test]
    fn empty_password_still_encodes() {
        let config = ProxyConfig::new().with_credentials("alice", "");
        assert_eq!(config.authentication_header(), "Proxy-Authorization: Basic YWxpY2U6");
        let value = config.authorization_value().expect("credentials should encode");
        assert_eq!(value.to_str().expect("ascii header"), "Basic YWxpY2U6");
    }

    #[test]
    fn authentication_string_renders_unset_parts_empty() {
        assert_eq!(ProxyConfig::new().authentication_string(), ":");
        assert_eq!(
            ProxyConfig::new().with_credentials("alice", "secret").authentication_string(),
            "alice:secret"
        );
    }

    #[test]
    fn authorization_value_is_sensitive() {
        let value = ProxyConfig::new()
            .with_credentials("alice", "secret")
            .authorization_value()
            .expect("credentials should encode");
        assert_eq!(value.to_str().expect("ascii header"), "Basic YWxpY2U6c2VjcmV0");
        assert!(value.is_sensitive());
    }

    #[test]
    fn port_number_parses() {
        assert_eq!(ProxyConfig::new().with_port("3128").port_number(), Some(3128));
        assert_eq!(ProxyConfig::new().with_port("http").port_number(), None);
        assert_eq!(ProxyConfig::new().port_number(), None);
    }
}
