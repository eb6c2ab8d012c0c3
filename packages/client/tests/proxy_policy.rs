use std::sync::Arc;

use http::{HeaderMap, header::PROXY_AUTHORIZATION};
use proxygate_client::{BypassMatcher, ProxyConfig, ProxyPolicy, ProxyRoute, Url};

fn wordpress_policy() -> ProxyPolicy {
    let config = ProxyConfig::with_address("192.168.84.101", 8080)
        .with_bypass_list("localhost, www.example.com, *.wordpress.org");
    ProxyPolicy::new(Arc::new(config)).with_matcher(BypassMatcher::new())
}

#[test]
fn test_disabled_config_is_always_direct() {
    let policy = ProxyPolicy::new(Arc::new(ProxyConfig::new().with_host("proxy")));
    assert_eq!(policy.route("http://www.example.org/"), ProxyRoute::Direct);
    assert_eq!(policy.route(":::notaurl"), ProxyRoute::Direct);
}

#[test]
fn test_routes_follow_bypass_list() {
    let policy = wordpress_policy();

    assert!(policy.route("http://sub.wordpress.org/page").is_direct());
    assert!(policy.route("http://www.example.com/").is_direct());
    assert!(policy.route("http://localhost:8080/").is_direct());

    let route = policy.route("http://wordpress.org/page");
    let target = route.target().expect("request should be proxied");
    assert_eq!(target.host(), "192.168.84.101");
    assert_eq!(target.port(), "8080");
    assert_eq!(target.authority(), "192.168.84.101:8080");
    assert!(target.authorization().is_none());
}

#[test]
fn test_malformed_target_goes_through_proxy() {
    assert!(!wordpress_policy().route(":::notaurl").is_direct());
}

#[test]
fn test_current_host_is_direct() {
    let policy = wordpress_policy().with_current_host("blog.example.net");
    assert!(policy.route("https://blog.example.net/wp-admin/").is_direct());
    assert!(!policy.route("https://shop.example.net/").is_direct());
}

#[test]
fn test_authenticated_target_sets_header() {
    let config = ProxyConfig::with_address("proxy.internal", 3128).with_credentials("alice", "secret");
    let policy = ProxyPolicy::new(Arc::new(config));

    let route = policy.route("https://api.example.com/");
    let target = route.target().expect("request should be proxied");

    let mut headers = HeaderMap::new();
    target.apply_headers(&mut headers);
    let value = headers.get(PROXY_AUTHORIZATION).expect("Proxy-Authorization set");
    assert_eq!(value, "Basic YWxpY2U6c2VjcmV0");
    assert!(value.is_sensitive());
}

#[test]
fn test_empty_password_keeps_header() {
    let config = ProxyConfig::with_address("proxy.internal", 3128).with_credentials("alice", "");
    let policy = ProxyPolicy::new(Arc::new(config));

    let route = policy.route("https://api.example.com/");
    let target = route.target().expect("request should be proxied");

    let mut headers = HeaderMap::new();
    target.apply_headers(&mut headers);
    assert_eq!(
        headers.get(PROXY_AUTHORIZATION).expect("Proxy-Authorization set"),
        "Basic YWxpY2U6"
    );
}

#[test]
fn test_mixed_case_current_host_is_direct() {
    let policy = wordpress_policy().with_current_host("Blog.Example.net");
    assert!(policy.route("https://Blog.Example.net/wp-admin/").is_direct());
}

#[test]
fn test_unauthenticated_target_leaves_headers_alone() {
    let policy = wordpress_policy();
    let route = policy.route("https://api.example.com/");
    let mut headers = HeaderMap::new();
    route.target().expect("request should be proxied").apply_headers(&mut headers);
    assert!(headers.is_empty());
}

#[test]
fn test_target_debug_hides_credentials() {
    let config = ProxyConfig::with_address("proxy.internal", 3128).with_credentials("alice", "secret");
    let route = ProxyPolicy::new(Arc::new(config)).route("https://api.example.com/");
    let debug = format!("{route:?}");
    assert!(!debug.contains("YWxpY2U6c2VjcmV0"));
}

#[test]
fn test_route_url_agrees_with_route() {
    let policy = wordpress_policy();
    for raw in ["http://sub.wordpress.org/page", "http://wordpress.org/page"] {
        let url = Url::parse(raw).expect("test URL should parse");
        assert_eq!(policy.route_url(&url), policy.route(raw), "{raw}");
    }
}

#[test]
fn test_policies_share_config() {
    let config = Arc::new(ProxyConfig::with_address("proxy", 8080).with_bypass_list("*.internal"));
    let first = ProxyPolicy::new(Arc::clone(&config));
    let second = ProxyPolicy::new(Arc::clone(&config)).with_current_host("app.example");

    assert!(Arc::ptr_eq(first.config(), second.config()));
    assert!(first.route("http://db.internal/").is_direct());
    assert!(second.route("http://app.example/").is_direct());
    assert!(!first.route("http://app.example/").is_direct());
}
