//! Bypass-decision engine
//!
//! Decides per outbound request whether the configured proxy should be used.
//! A raw bypass list is compiled once into either an exact host set or a
//! single wildcard pattern, memoized in a [`BypassCache`], and consulted by
//! [`BypassMatcher`] for every request.

pub mod cache;
pub mod host;
pub mod matcher;
pub mod rules;

pub use cache::BypassCache;
pub use host::CandidateHost;
pub use matcher::{BypassMatcher, send_through_proxy};
pub use rules::CompiledBypassRule;
