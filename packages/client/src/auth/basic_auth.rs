//! Basic authentication utilities

use std::io::Write;

use base64::prelude::BASE64_STANDARD;
use base64::{Engine, write::EncoderWriter};
use http::{HeaderMap, HeaderValue, header::PROXY_AUTHORIZATION};

use super::AuthProvider;
use crate::error::{Error, Result};

/// Builds a sensitive `Basic <base64(username:password)>` header value.
pub fn basic_auth<U, P>(username: U, password: P) -> Result<HeaderValue>
where
    U: std::fmt::Display,
    P: std::fmt::Display,
{
    let mut buf = b"Basic ".to_vec();
    {
        let mut encoder = EncoderWriter::new(&mut buf, &BASE64_STANDARD);
        // writes into a Vec cannot fail
        let _ = write!(encoder, "{username}:{password}");
    }
    let mut header = HeaderValue::from_bytes(&buf)?;
    header.set_sensitive(true);
    Ok(header)
}

/// Encode basic authentication credentials as bare base64
pub fn encode_basic_auth(username: &str, password: &str) -> String {
    BASE64_STANDARD.encode(format!("{username}:{password}"))
}

/// Decode base64 basic authentication credentials
///
/// Accepts the bare base64 payload or a value still carrying the `Basic `
/// prefix.
pub fn decode_basic_auth(encoded: &str) -> Result<(String, String)> {
    let payload = encoded.trim();
    let payload = payload.strip_prefix("Basic ").unwrap_or(payload);

    let decoded = BASE64_STANDARD.decode(payload)?;
    let credentials = String::from_utf8(decoded)
        .map_err(|_| Error::Credentials("credentials are not valid UTF-8".to_string()))?;

    match credentials.split_once(':') {
        Some((username, password)) => Ok((username.to_string(), password.to_string())),
        None => Err(Error::Credentials(
            "expected `username:password`".to_string(),
        )),
    }
}

/// Basic authentication towards a proxy server
#[derive(Clone)]
pub struct ProxyBasicAuth {
    username: String,
    password: String,
}

impl ProxyBasicAuth {
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl std::fmt::Debug for ProxyBasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyBasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AuthProvider for ProxyBasicAuth {
    fn apply_auth(&self, headers: &mut HeaderMap) -> Result<()> {
        let auth_value = basic_auth(&self.username, &self.password)?;
        headers.insert(PROXY_AUTHORIZATION, auth_value);
        Ok(())
    }

    fn auth_type(&self) -> &'static str {
        "Basic"
    }
}
