//! DocID decoding and input dispatch.
//!
//! The explicit decoders ([`from_hex`], [`from_readable_hex`],
//! [`from_binary`]) are strict. [`from_bytes`] picks a decoder from the input
//! length and falls back to fingerprinting the input as a URL whenever that
//! decoder rejects it, so it never fails.

use std::any::Any;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::core::encoder::assemble;
use crate::core::packer::{is_hex_len, is_readable_shape};
use crate::error::DocIdError;
use crate::types::{
    DocId, DOC_ID_LEN, DOMAIN_SITE_SEP_POS, SITE_HEX_START, SITE_ID_OFFSET, SITE_URL_SEP_POS,
    URL_HEX_START, URL_ID_OFFSET,
};

/// Decode the 64-character compact hex form. Both hex cases are accepted.
pub fn from_hex(data: &[u8]) -> Result<DocId, DocIdError> {
    if !is_hex_len(data) {
        return Err(DocIdError::invalid(data));
    }

    let mut bytes = [0u8; DOC_ID_LEN];
    hex::decode_to_slice(data, &mut bytes).map_err(|_| DocIdError::invalid(data))?;
    Ok(DocId(bytes))
}

/// Decode the 66-character readable form (`domain-site-url`).
pub fn from_readable_hex(data: &[u8]) -> Result<DocId, DocIdError> {
    if !is_readable_shape(data) {
        return Err(DocIdError::invalid(data));
    }

    let mut bytes = [0u8; DOC_ID_LEN];
    let (domain, rest) = bytes.split_at_mut(SITE_ID_OFFSET);
    let (site, url) = rest.split_at_mut(URL_ID_OFFSET - SITE_ID_OFFSET);

    hex::decode_to_slice(&data[..DOMAIN_SITE_SEP_POS], domain)
        .and_then(|_| hex::decode_to_slice(&data[SITE_HEX_START..SITE_URL_SEP_POS], site))
        .and_then(|_| hex::decode_to_slice(&data[URL_HEX_START..], url))
        .map_err(|_| DocIdError::invalid(data))?;

    Ok(DocId(bytes))
}

/// Decode the 32-byte binary form.
pub fn from_binary(data: &[u8]) -> Result<DocId, DocIdError> {
    let bytes: [u8; DOC_ID_LEN] = data.try_into().map_err(|_| DocIdError::invalid(data))?;
    Ok(DocId(bytes))
}

/// Decode either hex form, or fingerprint `data` as a URL.
///
/// Length 64 is tried as compact hex, length 66 with dashes at the separator
/// positions as readable hex. Everything else, including hex-length input
/// that fails to decode, is hashed as a URL.
///
/// # Examples
///
/// ```
/// use docid::{assemble, from_bytes};
///
/// let readable = "1d5920f4b44b27a8-ed646a3334ca891f-ff90821feeb2b02a33a6f9fc8e5f3fcd";
/// assert_eq!(from_bytes(readable.as_bytes()), assemble(b"http://www.google.com/"));
///
/// // Short input is a URL, not a malformed DocID.
/// assert_eq!(from_bytes(b"1"), assemble(b"1"));
/// ```
pub fn from_bytes(data: &[u8]) -> DocId {
    let decoded = if is_hex_len(data) {
        from_hex(data).ok()
    } else if is_readable_shape(data) {
        from_readable_hex(data).ok()
    } else {
        None
    };
    decoded.unwrap_or_else(|| assemble(data))
}

/// Dynamically typed entry point.
///
/// Accepts `String`, `&str`, `Vec<u8>` and `&[u8]` and dispatches through
/// [`from_bytes`]. Any other type is rejected.
pub fn new(data: &dyn Any) -> Result<DocId, DocIdError> {
    if let Some(s) = data.downcast_ref::<String>() {
        Ok(from_bytes(s.as_bytes()))
    } else if let Some(s) = data.downcast_ref::<&str>() {
        Ok(from_bytes(s.as_bytes()))
    } else if let Some(b) = data.downcast_ref::<Vec<u8>>() {
        Ok(from_bytes(b))
    } else if let Some(b) = data.downcast_ref::<&[u8]>() {
        Ok(from_bytes(b))
    } else {
        Err(DocIdError::UnsupportedInputType(
            "expected String, &str, Vec<u8> or &[u8]",
        ))
    }
}

impl DocId {
    /// See [`from_bytes`].
    pub fn from_bytes(data: impl AsRef<[u8]>) -> Self {
        from_bytes(data.as_ref())
    }

    /// See [`from_hex`].
    pub fn from_hex(data: impl AsRef<[u8]>) -> Result<Self, DocIdError> {
        from_hex(data.as_ref())
    }

    /// See [`from_readable_hex`].
    pub fn from_readable_hex(data: impl AsRef<[u8]>) -> Result<Self, DocIdError> {
        from_readable_hex(data.as_ref())
    }

    /// See [`from_binary`].
    pub fn from_binary(data: impl AsRef<[u8]>) -> Result<Self, DocIdError> {
        from_binary(data.as_ref())
    }
}

impl TryFrom<&[u8]> for DocId {
    type Error = DocIdError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        from_binary(data)
    }
}

/// Strict parse of either hex form; URLs are not accepted here.
impl FromStr for DocId {
    type Err = DocIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data = s.as_bytes();
        if is_hex_len(data) {
            from_hex(data)
        } else {
            from_readable_hex(data)
        }
    }
}

impl Serialize for DocId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DocId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocIdVisitor;

        impl Visitor<'_> for DocIdVisitor {
            type Value = DocId;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a compact or readable hex DocID")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<DocId, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DocIdVisitor)
    }
}
