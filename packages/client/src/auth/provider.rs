//! Authentication provider seam

use http::HeaderMap;

use crate::error::Result;

/// Authentication provider trait for credentials a transport attaches to
/// outgoing requests
pub trait AuthProvider {
    /// Apply authentication to headers
    fn apply_auth(&self, headers: &mut HeaderMap) -> Result<()>;

    /// Get authentication method name
    fn auth_type(&self) -> &'static str;
}
