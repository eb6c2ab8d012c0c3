//! HTTP proxy configuration and bypass matching
//!
//! This module holds the proxy connection settings and decides, per
//! outbound request, whether that request is routed through the proxy.

pub mod bypass;
pub mod core;
pub mod route;

// Re-export main types for convenience
pub use bypass::{BypassCache, BypassMatcher, CandidateHost, CompiledBypassRule, send_through_proxy};
pub use self::core::ProxyConfig;
pub use route::{ProxyPolicy, ProxyRoute, ProxyTarget};
