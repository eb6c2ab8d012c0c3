//! Policy Builder API modules
//!
//! Provides the fluent API for assembling a proxy configuration and the
//! routing policy that applies it.

pub mod auth;
pub mod core;

// Re-export all public types for convenience
pub use self::core::*;
