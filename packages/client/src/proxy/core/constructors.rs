//! ProxyConfig constructor methods

use super::types::ProxyConfig;

impl ProxyConfig {
    /// Returns an empty configuration: proxying disabled, no credentials and
    /// no bypass list.
    #[must_use]
    pub fn new() -> Self {
        ProxyConfig {
            host: None,
            port: None,
            username: None,
            password: None,
            bypass_list: None,
        }
    }

    /// Returns a configuration for an unauthenticated proxy at `host:port`.
    #[must_use]
    pub fn with_address<H, P>(host: H, port: P) -> Self
    where
        H: Into<String>,
        P: ToString,
    {
        Self::new().with_host(host).with_port(port)
    }
}
