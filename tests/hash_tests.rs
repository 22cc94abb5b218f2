//! Tests for the digests behind each DocID component.

use docid::*;

#[test]
fn test_digest_vectors() {
    let test_cases = vec![
        ("", "d41d8cd98f00b204e9800998ecf8427e"),
        ("1", "c4ca4238a0b923820dcc509a6f75849b"),
        ("http://www.google.com", "ed646a3334ca891fd3467db131372140"),
        ("http://www.google.com/", "ff90821feeb2b02a33a6f9fc8e5f3fcd"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(hex::encode(digest(input.as_bytes())), expected, "Digest failed for: {:?}", input);
    }
}

#[test]
fn test_components_are_digest_prefixes() {
    let id = assemble(b"http://www.google.com.hk/abc");

    assert_eq!(id.domain_id().as_bytes()[..], digest(b"google.com.hk")[..8]);
    assert_eq!(id.site_id().as_bytes()[..], digest(b"http://www.google.com.hk")[..8]);
    assert_eq!(id.url_id().as_bytes()[..], digest(b"http://www.google.com.hk/abc")[..]);
}

#[test]
fn test_assembly_determinism() {
    for _ in 0..10 {
        assert_eq!(assemble(b"http://www.google.com/").to_string(), "1d5920f4b44b27a8-ed646a3334ca891f-ff90821feeb2b02a33a6f9fc8e5f3fcd");
    }
}

#[test]
fn test_single_byte_change_changes_url_id() {
    let a = assemble(b"http://example.com/page1");
    let b = assemble(b"http://example.com/page2");

    assert_eq!(a.domain_id(), b.domain_id());
    assert_eq!(a.site_id(), b.site_id());
    assert_ne!(a.url_id(), b.url_id());
}
