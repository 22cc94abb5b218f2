//! Core data structures for DocID fingerprints.
//!
//! A DocID is 32 bytes laid out as `DomainID(8) || SiteID(8) || URLID(16)`.
//! The three sub-identifiers live at fixed offsets and are read back out of
//! the DocID rather than stored separately.

use std::fmt;

/// Length of the registrable domain identifier in bytes.
pub const DOMAIN_ID_LEN: usize = 8;
/// Length of the site (host) identifier in bytes.
pub const SITE_ID_LEN: usize = 8;
/// Length of the URL identifier in bytes.
pub const URL_ID_LEN: usize = 16;
/// Length of a binary DocID.
pub const DOC_ID_LEN: usize = DOMAIN_ID_LEN + SITE_ID_LEN + URL_ID_LEN;

/// Byte offset of the SiteID within a DocID.
pub const SITE_ID_OFFSET: usize = DOMAIN_ID_LEN;
/// Byte offset of the URLID within a DocID.
pub const URL_ID_OFFSET: usize = SITE_ID_OFFSET + SITE_ID_LEN;

/// Length of the compact hex form.
pub const DOC_ID_HEX_LEN: usize = DOC_ID_LEN * 2;

/// Position of the dash between the DomainID and SiteID in the readable form.
pub const DOMAIN_SITE_SEP_POS: usize = DOMAIN_ID_LEN * 2;
/// Start of the SiteID hex in the readable form.
pub const SITE_HEX_START: usize = DOMAIN_SITE_SEP_POS + 1;
/// Position of the dash between the SiteID and URLID in the readable form.
pub const SITE_URL_SEP_POS: usize = SITE_HEX_START + SITE_ID_LEN * 2;
/// Start of the URLID hex in the readable form.
pub const URL_HEX_START: usize = SITE_URL_SEP_POS + 1;
/// Length of the readable (dashed) hex form.
pub const DOC_ID_READABLE_LEN: usize = DOC_ID_HEX_LEN + 2;

/// Separator byte of the readable form.
pub const SEPARATOR: u8 = b'-';

macro_rules! hex_id {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// Raw identifier bytes.
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Lowercase hex rendering.
            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }
    };
}

hex_id!(
    /// Identifier of the registrable domain, e.g. `google.com`.
    DomainId,
    DOMAIN_ID_LEN
);
hex_id!(
    /// Identifier of the full host prefix of the URL.
    SiteId,
    SITE_ID_LEN
);
hex_id!(
    /// Identifier of the whole URL.
    UrlId,
    URL_ID_LEN
);

/// A 32-byte URL fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocId(pub(crate) [u8; DOC_ID_LEN]);

impl DocId {
    /// Build a DocID from its three parts.
    pub fn from_parts(domain: &DomainId, site: &SiteId, url: &UrlId) -> Self {
        let mut bytes = [0u8; DOC_ID_LEN];
        bytes[..SITE_ID_OFFSET].copy_from_slice(&domain.0);
        bytes[SITE_ID_OFFSET..URL_ID_OFFSET].copy_from_slice(&site.0);
        bytes[URL_ID_OFFSET..].copy_from_slice(&url.0);
        DocId(bytes)
    }

    /// The binary form.
    pub fn as_bytes(&self) -> &[u8; DOC_ID_LEN] {
        &self.0
    }

    /// Registrable domain identifier (bytes `[0, 8)`).
    pub fn domain_id(&self) -> DomainId {
        let mut id = [0u8; DOMAIN_ID_LEN];
        id.copy_from_slice(&self.0[..SITE_ID_OFFSET]);
        DomainId(id)
    }

    /// Site identifier (bytes `[8, 16)`).
    pub fn site_id(&self) -> SiteId {
        let mut id = [0u8; SITE_ID_LEN];
        id.copy_from_slice(&self.0[SITE_ID_OFFSET..URL_ID_OFFSET]);
        SiteId(id)
    }

    /// URL identifier (bytes `[16, 32)`).
    pub fn url_id(&self) -> UrlId {
        let mut id = [0u8; URL_ID_LEN];
        id.copy_from_slice(&self.0[URL_ID_OFFSET..]);
        UrlId(id)
    }
}

impl From<[u8; DOC_ID_LEN]> for DocId {
    fn from(bytes: [u8; DOC_ID_LEN]) -> Self {
        DocId(bytes)
    }
}

impl AsRef<[u8]> for DocId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
