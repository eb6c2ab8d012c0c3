//! # Proxygate client
//!
//! Proxy configuration and per-request bypass decisions for HTTP clients.
//!
//! ## Features
//!
//! - **`ProxyConfig`** holding proxy host, port, Basic credentials and a raw
//!   bypass list, loadable from the environment or any `serde` source
//! - **Bypass matching** with exact host names and `*` wildcards, compiled
//!   once per distinct list and shared across threads
//! - **Fail-open decisions**: a target that cannot be evaluated goes through
//!   the proxy rather than connecting directly
//! - **`Proxy-Authorization`** header construction
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use proxygate_client::{ProxyConfig, ProxyPolicy, ProxyRoute};
//!
//! let config = ProxyConfig::with_address("192.168.84.101", 8080)
//!     .with_credentials("alice", "secret")
//!     .with_bypass_list("localhost, www.example.com, *.wordpress.org");
//!
//! let policy = ProxyPolicy::new(Arc::new(config)).with_current_host("blog.example.net");
//!
//! assert_eq!(policy.route("http://sub.wordpress.org/page"), ProxyRoute::Direct);
//! assert_eq!(policy.route("http://blog.example.net/wp-cron.php"), ProxyRoute::Direct);
//!
//! let route = policy.route("https://downloads.example.com/");
//! let target = route.target().expect("proxied");
//! assert_eq!(target.authority(), "192.168.84.101:8080");
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod error;
pub mod proxy;
pub mod telemetry;

pub use crate::auth::{AuthProvider, ProxyBasicAuth};
pub use crate::config::{ConfigurationError, Validator};
pub use crate::error::{Error, Result};
pub use crate::proxy::{
    BypassCache, BypassMatcher, CandidateHost, CompiledBypassRule, ProxyConfig, ProxyPolicy,
    ProxyRoute, ProxyTarget, send_through_proxy,
};
pub use crate::telemetry::{CacheStats, CacheStatsSnapshot};

// URL handling
pub use url::Url;
