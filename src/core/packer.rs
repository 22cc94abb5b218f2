//! Textual encodings of a DocID.
//!
//! - compact: 64 lowercase hex characters
//! - readable: `domain-site-url`, 66 characters with dashes at 16 and 33

use std::fmt;

use crate::types::{
    DocId, DOC_ID_HEX_LEN, DOC_ID_READABLE_LEN, DOMAIN_SITE_SEP_POS, SEPARATOR, SITE_URL_SEP_POS,
};

/// Encode a DocID as 64 lowercase hex characters.
pub fn to_hex(id: &DocId) -> String {
    hex::encode(id.as_bytes())
}

/// Encode a DocID in the dashed readable form.
pub fn to_readable_hex(id: &DocId) -> String {
    format!("{}-{}-{}", id.domain_id(), id.site_id(), id.url_id())
}

impl DocId {
    /// Compact hex form.
    pub fn to_hex(&self) -> String {
        to_hex(self)
    }

    /// Readable dashed hex form.
    pub fn to_readable_hex(&self) -> String {
        to_readable_hex(self)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_readable_hex(self))
    }
}

/// Whether `data` has the length of the compact hex form.
pub fn is_hex_len(data: &[u8]) -> bool {
    data.len() == DOC_ID_HEX_LEN
}

/// Whether `data` has the length and dash positions of the readable form.
pub fn is_readable_shape(data: &[u8]) -> bool {
    data.len() == DOC_ID_READABLE_LEN
        && data[DOMAIN_SITE_SEP_POS] == SEPARATOR
        && data[SITE_URL_SEP_POS] == SEPARATOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_docid_hex() {
        let id = DocId::from([0u8; 32]);
        assert_eq!(to_hex(&id), "0".repeat(64));
        assert_eq!(
            to_readable_hex(&id),
            format!("{}-{}-{}", "0".repeat(16), "0".repeat(16), "0".repeat(32))
        );
    }

    #[test]
    fn test_readable_matches_compact() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37);
        }
        let id = DocId::from(bytes);
        let compact = id.to_hex();
        let readable = id.to_readable_hex();

        assert_eq!(readable.len(), DOC_ID_READABLE_LEN);
        assert_eq!(readable.replace('-', ""), compact);
        assert_eq!(&readable[..16], id.domain_id().to_hex());
        assert_eq!(&readable[17..33], id.site_id().to_hex());
        assert_eq!(&readable[34..], id.url_id().to_hex());
    }

    #[test]
    fn test_display_is_readable() {
        let id = DocId::from([0xabu8; 32]);
        assert_eq!(id.to_string(), id.to_readable_hex());
    }

    #[test]
    fn test_shape_checks() {
        let readable = DocId::from([1u8; 32]).to_readable_hex();
        assert!(is_readable_shape(readable.as_bytes()));
        assert!(!is_readable_shape(&[b'0'; DOC_ID_READABLE_LEN]));
        assert!(is_hex_len(&[b'0'; DOC_ID_HEX_LEN]));
        assert!(!is_hex_len(b"1"));
    }
}
