//! Core proxy configuration type
//!
//! Defines `ProxyConfig`, the set-once holder of proxy host, port,
//! credentials and the raw bypass list.

use serde::{Deserialize, Deserializer};

/// Connection settings for the proxy a client should route requests through.
///
/// A `ProxyConfig` has a couple pieces to it:
///
/// - where the proxy lives (`host` and `port`)
/// - optional Basic credentials (`username` and `password`)
/// - a raw, comma separated list of hosts that should never be proxied
///
/// It is populated once at startup and treated as read-only afterwards.
/// Share it by wrapping it in an `Arc` rather than through a global.
///
/// ```rust
/// use proxygate_client::proxy::ProxyConfig;
///
/// let config = ProxyConfig::new()
///     .with_host("192.168.84.101")
///     .with_port("8080")
///     .with_bypass_list("localhost, www.example.com, *.wordpress.org");
///
/// assert!(config.is_enabled());
/// assert!(!config.uses_authentication());
/// ```
///
/// It can also be embedded in an application's own configuration file:
///
/// ```toml
/// [proxy]
/// host = "192.168.84.101"
/// port = 8080
/// bypass_list = "localhost, *.wordpress.org"
/// ```
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub(crate) host: Option<String>,
    #[serde(deserialize_with = "deserialize_port")]
    pub(crate) port: Option<String>,
    pub(crate) username: Option<String>,
    pub(crate) password: Option<String>,
    #[serde(alias = "bypass_hosts")]
    pub(crate) bypass_list: Option<String>,
}

/// Accepts `port = 8080` as well as `port = "8080"`.
fn deserialize_port<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u64),
        Text(String),
    }

    Ok(Option::<Port>::deserialize(deserializer)?.map(|port| match port {
        Port::Number(number) => number.to_string(),
        Port::Text(text) => text,
    }))
}
