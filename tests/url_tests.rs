//! Tests for suffix classification and domain/host splitting.

use docid::*;

fn split(url: &str) -> (&str, &str) {
    let parts = split_domain_host(url.as_bytes());
    (&url[parts.domain.clone()], &url[parts.host])
}

#[test]
fn test_listed_suffixes_are_known() {
    let top = ["ac", "co", "com", "org", "name", "info", "travel", "museum"];
    for label in top {
        assert!(is_known_suffix(SuffixTable::TopLevel, label.as_bytes()), "Should be top-level: {}", label);
    }

    let second = ["ha", "hk", "tw", "xz", "com", "edu", "arpa", "museum"];
    for label in second {
        assert!(is_known_suffix(SuffixTable::SecondLevel, label.as_bytes()), "Should be second-level: {}", label);
    }
}

#[test]
fn test_unlisted_suffixes_are_unknown() {
    // Regional codes are second-level only.
    for label in ["hk", "tw", "bj"] {
        assert!(!is_top_level_suffix(label.as_bytes()), "Should not be top-level: {}", label);
    }

    // Lengths with no partition at all.
    assert!(!is_top_level_suffix(b"a"));
    assert!(!is_second_level_suffix(b"abcde"));
    assert!(!is_second_level_suffix(b"abcdefghij"));

    // Same length as listed entries.
    assert!(!is_top_level_suffix(b"xyz"));
    assert!(!is_second_level_suffix(b"uk"));
}

#[test]
fn test_domain_and_host_ranges() {
    let test_cases = vec![
        ("http://www.google.com/", "google.com", "http://www.google.com"),
        ("http://www.google.com", "google.com", "http://www.google.com"),
        ("http://www.google.com.hk/abc", "google.com.hk", "http://www.google.com.hk"),
        ("https://a.b.example.net/x/y", "example.net", "https://a.b.example.net"),
        ("http://www.bbc.co.uk/news", "bbc.co.uk", "http://www.bbc.co.uk"),
        ("http://example.com:8080/", "example.com", "http://example.com:8080"),
        ("www.example.com/no-scheme", "example.com", "www.example.com"),
        ("example.com", "example.com", "example.com"),
    ];

    for (url, domain, host) in test_cases {
        assert_eq!(split(url), (domain, host), "Split failed for: {}", url);
    }
}

#[test]
fn test_widening_requires_both_conditions() {
    // "com" second-level, "hk" not top-level: widen.
    assert_eq!(split("http://x.y.com.hk/").0, "y.com.hk");
    // "com" second-level, "org" top-level: no widening.
    assert_eq!(split("http://x.y.com.org/").0, "com.org");
    // "example" not second-level: no widening.
    assert_eq!(split("http://x.example.hk/").0, "example.hk");
}

#[test]
fn test_malformed_urls_still_split() {
    let urls = vec!["", "/", ":", "::::", "....", "http://", "http://.", "a:b:c", "-.-.-"];
    for url in urls {
        let parts = split_domain_host(url.as_bytes());
        assert!(parts.domain.start <= parts.domain.end, "Bad range for: {:?}", url);
        assert!(parts.domain.end <= url.len(), "Out of bounds for: {:?}", url);
        let _ = assemble(url.as_bytes());
    }
}
