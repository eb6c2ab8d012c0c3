//! ProxyConfig setter methods
//!
//! Consuming setters used while the configuration is assembled at startup.
//! There is no mutation API once the value has been shared.

use super::types::ProxyConfig;

impl ProxyConfig {
    /// Set the proxy host.
    #[must_use]
    pub fn with_host<T: Into<String>>(mut self, host: T) -> ProxyConfig {
        self.host = Some(host.into());
        self
    }

    /// Set the proxy port.
    ///
    /// Accepts anything printable so both `8080` and `"8080"` work.
    #[must_use]
    pub fn with_port<T: ToString>(mut self, port: T) -> ProxyConfig {
        self.port = Some(port.to_string());
        self
    }

    /// Set the credentials used for the `Proxy-Authorization` header.
    ///
    /// # Example
    ///
    /// ```
    /// use proxygate_client::proxy::ProxyConfig;
    ///
    /// let config = ProxyConfig::with_address("localhost", 1234)
    ///     .with_credentials("Aladdin", "open sesame");
    /// assert!(config.uses_authentication());
    /// ```
    #[must_use]
    pub fn with_credentials<U, P>(mut self, username: U, password: P) -> ProxyConfig
    where
        U: Into<String>,
        P: Into<String>,
    {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set the raw bypass list.
    ///
    /// The argument is a comma separated list of hosts that should be reached
    /// directly. Entries may contain `*` wildcards, e.g. `*.wordpress.org`.
    /// The list is kept verbatim and compiled lazily on first use.
    #[must_use]
    pub fn with_bypass_list<T: Into<String>>(mut self, bypass_list: T) -> ProxyConfig {
        self.bypass_list = Some(bypass_list.into());
        self
    }
}
