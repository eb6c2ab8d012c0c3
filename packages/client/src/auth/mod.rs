pub mod basic_auth;
pub mod provider;

pub use basic_auth::{ProxyBasicAuth, basic_auth, decode_basic_auth, encode_basic_auth};
pub use provider::AuthProvider;
