//! Proxy connection settings
//!
//! Modular organization of the proxy configuration value object: the type
//! itself, its constructors and setters, read accessors and derived
//! authentication values.

pub mod accessors;
pub mod configuration;
pub mod constructors;
pub mod debug_impls;
pub mod types;

pub use types::ProxyConfig;
