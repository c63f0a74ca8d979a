use super::*;
use crate::initialization::init_extractor;

#[test]
fn test_decompose_simple_url() {
    let extractor = init_extractor();
    let parts = decompose(&extractor, "https://www.example.com/login?user=1");

    assert_eq!(parts.scheme, "https");
    assert_eq!(parts.host, "www.example.com");
    assert_eq!(parts.path, "/login");
    assert_eq!(parts.query, "user=1");
    assert_eq!(parts.subdomain, "www");
    assert_eq!(parts.domain_label, "example");
    assert_eq!(parts.suffix, "com");
    assert_eq!(parts.registrable_domain.as_deref(), Some("example.com"));
}

#[test]
fn test_decompose_multi_part_suffix() {
    // A two-label country-code suffix must not be split at the last dot
    let extractor = init_extractor();
    let parts = decompose(&extractor, "https://shop.example.co.uk/");

    assert_eq!(parts.subdomain, "shop");
    assert_eq!(parts.domain_label, "example");
    assert_eq!(parts.suffix, "co.uk");
    assert_eq!(parts.registrable_domain.as_deref(), Some("example.co.uk"));
}

#[test]
fn test_decompose_ip_host() {
    let extractor = init_extractor();
    let parts = decompose(&extractor, "http://192.168.0.1/login");

    assert_eq!(parts.host, "192.168.0.1");
    assert!(parts.host_is_ip());
    assert_eq!(parts.domain_label, "192.168.0.1");
    assert_eq!(parts.subdomain, "");
    assert_eq!(parts.suffix, "");
    assert_eq!(parts.registrable_domain, None);
}

#[test]
fn test_decompose_schemeless_input_is_empty_not_fatal() {
    let extractor = init_extractor();
    let parts = decompose(&extractor, "example.com/path");

    // Relative input does not parse; components degrade to empty strings
    assert_eq!(parts.scheme, "");
    assert_eq!(parts.host, "");
    assert_eq!(parts.path, "");
    assert_eq!(parts.raw, "example.com/path");
}

#[test]
fn test_decompose_garbage_input_is_empty_not_fatal() {
    let extractor = init_extractor();
    let parts = decompose(&extractor, "not a url at all!!!");

    assert_eq!(parts.host, "");
    assert_eq!(parts.registrable_domain, None);
}

#[test]
fn test_decompose_default_port_is_none() {
    let extractor = init_extractor();
    let parts = decompose(&extractor, "https://example.com:443/");
    assert_eq!(parts.port, None);

    let parts = decompose(&extractor, "http://example.com:80/");
    assert_eq!(parts.port, None);
}

#[test]
fn test_decompose_explicit_port() {
    let extractor = init_extractor();
    let parts = decompose(&extractor, "https://example.com:8443/");
    assert_eq!(parts.port, Some(8443));
}

#[test]
fn test_decompose_shortener_domain() {
    // The registrable domain, not the bare label, is what the shortener
    // set matches against
    let extractor = init_extractor();
    let parts = decompose(&extractor, "http://bit.ly/abc123");
    assert_eq!(parts.registrable_domain.as_deref(), Some("bit.ly"));
}

#[test]
fn test_decompose_deep_subdomain() {
    let extractor = init_extractor();
    let parts = decompose(&extractor, "http://paypal.secure.verify.example.com/");
    assert_eq!(parts.subdomain, "paypal.secure.verify");
    assert_eq!(parts.registrable_domain.as_deref(), Some("example.com"));
}

// Decomposition must be total over arbitrary input
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_decompose_never_panics(input in "\\PC{0,200}") {
        let extractor = init_extractor();
        let parts = decompose(&extractor, &input);
        prop_assert_eq!(parts.raw, input);
    }

    #[test]
    fn test_decompose_registrable_requires_both_parts(
        domain in "[a-z]{3,15}",
        tld in "(com|org|net)"
    ) {
        let extractor = init_extractor();
        let url = format!("https://{}.{}/", domain, tld);
        let parts = decompose(&extractor, &url);
        prop_assert_eq!(
            parts.registrable_domain,
            Some(format!("{}.{}", domain, tld))
        );
    }
}
