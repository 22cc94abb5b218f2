//! Fingerprint assembly: URL bytes to DocID.

use tracing::trace;

use crate::core::hasher::{digest, truncated_digest};
use crate::types::{DocId, DomainId, SiteId, UrlId, DOMAIN_ID_LEN, SITE_ID_LEN};
use crate::url::splitter::split_domain_host;

/// Fingerprint a URL.
///
/// Total over all byte sequences: malformed URLs still produce a
/// well-defined DocID because the splitter degrades instead of failing.
///
/// # Examples
///
/// ```
/// use docid::assemble;
///
/// let with_slash = assemble(b"http://www.google.com/");
/// let without = assemble(b"http://www.google.com");
///
/// assert_eq!(with_slash.domain_id(), without.domain_id());
/// assert_eq!(with_slash.site_id(), without.site_id());
/// assert_ne!(with_slash.url_id(), without.url_id());
/// ```
pub fn assemble(url: &[u8]) -> DocId {
    let parts = split_domain_host(url);
    let domain = parts.domain(url);
    let host = parts.host(url);

    trace!(
        domain = ?parts.domain,
        host = ?parts.host,
        len = url.len(),
        "split url"
    );

    let domain_id = DomainId(truncated_digest::<DOMAIN_ID_LEN>(domain));
    let site_id = SiteId(truncated_digest::<SITE_ID_LEN>(host));
    let url_id = UrlId(digest(url));

    DocId::from_parts(&domain_id, &site_id, &url_id)
}

impl DocId {
    /// Fingerprint a URL. Same as [`assemble`].
    pub fn from_url(url: impl AsRef<[u8]>) -> Self {
        assemble(url.as_ref())
    }
}
