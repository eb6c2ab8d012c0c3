//! Candidate host extraction from target URLs

use std::fmt;

use crate::Url;

/// Host literal treated as loopback regardless of bypass configuration.
pub const LOCALHOST: &str = "localhost";

/// The host component of a request target, as written in the URL.
///
/// The WHATWG parser only decides whether a target has a host at all. The
/// host itself is sliced out of the authority so its case survives; IPv6
/// literals keep their brackets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateHost(String);

impl CandidateHost {
    /// Extracts the host from a target URL string.
    ///
    /// Returns `None` when the string does not parse as an absolute URL or
    /// the URL carries no host (`mailto:`, `data:` and similar).
    pub fn from_target(target_url: &str) -> Option<Self> {
        let url = Url::parse(target_url).ok()?;
        let parsed = Self::from_url(&url)?;
        Some(match authority_host(target_url) {
            Some(host) => CandidateHost(host.to_owned()),
            None => parsed,
        })
    }

    /// Extracts the host from an already parsed URL.
    ///
    /// A parsed [`Url`] only carries the normalized host, so domains of
    /// special schemes (`http`, `https`, `ws`, ...) come back lower-cased.
    pub fn from_url(url: &Url) -> Option<Self> {
        url.host_str()
            .filter(|host| !host.is_empty())
            .map(|host| CandidateHost(host.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the literal `localhost` host.
    pub fn is_localhost(&self) -> bool {
        self.0 == LOCALHOST
    }
}

/// Host slice of `scheme://[userinfo@]host[:port]...`, without port and
/// userinfo. `None` when the target has no `//` authority.
fn authority_host(target_url: &str) -> Option<&str> {
    let (_, rest) = target_url.trim().split_once(':')?;
    let rest = rest.strip_prefix("//")?;
    let end = rest.find(['/', '?', '#', '\\']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);

    let host = if host_port.starts_with('[') {
        &host_port[..=host_port.find(']')?]
    } else {
        host_port.split_once(':').map_or(host_port, |(host, _)| host)
    };
    (!host.is_empty()).then_some(host)
}

impl AsRef<str> for CandidateHost {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_host() {
        let host = CandidateHost::from_target("http://sub.wordpress.org/page?x=1")
            .expect("host should be extracted");
        assert_eq!(host.as_str(), "sub.wordpress.org");
    }

    #[test]
    fn ignores_port_and_userinfo() {
        let host = CandidateHost::from_target("https://user:pw@www.example.com:8443/")
            .expect("host should be extracted");
        assert_eq!(host.as_str(), "www.example.com");
    }

    #[test]
    fn host_keeps_case_as_written() {
        let host = CandidateHost::from_target("http://WWW.Example.COM/")
            .expect("host should be extracted");
        assert_eq!(host.as_str(), "WWW.Example.COM");

        let host = CandidateHost::from_target("https://Admin:Pw@Intranet.Corp:8443/path?q=1")
            .expect("host should be extracted");
        assert_eq!(host.as_str(), "Intranet.Corp");
    }

    #[test]
    fn parsed_url_host_is_normalized() {
        let url = Url::parse("http://WWW.Example.COM/").expect("test URL should parse");
        let host = CandidateHost::from_url(&url).expect("host should be extracted");
        assert_eq!(host.as_str(), "www.example.com");
    }

    #[test]
    fn authority_host_slicing() {
        assert_eq!(authority_host("http://a.example"), Some("a.example"));
        assert_eq!(authority_host("http://a.example?x#y"), Some("a.example"));
        assert_eq!(authority_host("http://u@p@a.example:1/"), Some("a.example"));
        assert_eq!(authority_host("http://[2001:DB8::1]:80/"), Some("[2001:DB8::1]"));
        assert_eq!(authority_host("http:a.example/"), None);
        assert_eq!(authority_host("mailto:alice@example.com"), None);
    }

    #[test]
    fn authority_less_special_url_uses_parsed_host() {
        let host = CandidateHost::from_target("http:Example.com/").expect("host");
        assert_eq!(host.as_str(), "example.com");
    }

    #[test]
    fn malformed_or_hostless() {
        assert!(CandidateHost::from_target(":::notaurl").is_none());
        assert!(CandidateHost::from_target("www.example.com/no-scheme").is_none());
        assert!(CandidateHost::from_target("mailto:alice@example.com").is_none());
        assert!(CandidateHost::from_target("").is_none());
    }

    #[test]
    fn localhost_is_literal() {
        assert!(CandidateHost::from_target("http://localhost:8080/").expect("host").is_localhost());
        assert!(!CandidateHost::from_target("http://127.0.0.1/").expect("host").is_localhost());
    }

    #[test]
    fn ipv6_keeps_brackets() {
        let host = CandidateHost::from_target("http://[::1]:8080/").expect("host");
        assert_eq!(host.as_str(), "[::1]");
    }
}
