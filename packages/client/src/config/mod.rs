//! Proxy configuration sources and validation
//!
//! `ProxyConfig` itself lives in [`crate::proxy::core`]; this module adds the
//! ways an application populates it at startup and the opt-in checks it can
//! run before handing the configuration to a client.

pub mod env;
pub mod validation;

pub use env::{PROXY_BYPASS_HOSTS, PROXY_HOST, PROXY_PASSWORD, PROXY_PORT, PROXY_USERNAME};
pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
