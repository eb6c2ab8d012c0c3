//! Proxy authentication methods for the policy builder
//!
//! Only Basic authentication is supported; the credentials end up in the
//! `Proxy-Authorization` header of proxied requests.

use crate::builder::core::PolicyBuilder;

impl PolicyBuilder {
    /// Set Basic credentials for the proxy
    ///
    /// # Arguments
    /// * `username` - Proxy user name
    /// * `password` - Proxy password
    ///
    /// # Examples
    /// ```
    /// use proxygate::PolicyBuilder;
    ///
    /// let policy = PolicyBuilder::new()
    ///     .proxy("192.168.84.101", 8080)
    ///     .basic_auth("alice", "secret")
    ///     .build();
    ///
    /// let route = policy.route("https://www.example.com/");
    /// let target = route.target().expect("proxied");
    /// assert_eq!(
    ///     target.authorization().expect("credentials set"),
    ///     "Basic YWxpY2U6c2VjcmV0"
    /// );
    /// ```
    #[must_use]
    pub fn basic_auth<U, P>(mut self, username: U, password: P) -> Self
    where
        U: Into<String>,
        P: Into<String>,
    {
        self.config = self.config.with_credentials(username, password);
        self
    }
}
