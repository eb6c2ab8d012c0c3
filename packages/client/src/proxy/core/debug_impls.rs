//! Debug trait implementation for the proxy configuration
//!
//! The password is never printed.

use std::fmt;

use super::types::ProxyConfig;

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("bypass_list", &self.bypass_list)
            .finish()
    }
}
