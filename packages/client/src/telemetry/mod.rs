//! Telemetry for the proxy module
//!
//! Counters describing how the compiled bypass-rule cache is used.

pub mod cache_stats;

// Re-export key types for convenience
pub use cache_stats::*;
