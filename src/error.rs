//! Error types for DocID decoding operations.

use thiserror::Error;

/// Errors that can occur while decoding a DocID.
///
/// Fingerprinting a URL never fails; only the explicit decoders and the
/// dynamically typed entry point [`crate::new`] can return an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocIdError {
    /// The input has the wrong length for the requested form, is missing a
    /// separator, or contains non-hexadecimal characters.
    #[error("docid: invalid bytes {0:?}")]
    InvalidInput(String),

    /// The value handed to [`crate::new`] is neither bytes nor text.
    #[error("docid: unsupported input type {0}")]
    UnsupportedInputType(&'static str),
}

impl DocIdError {
    pub(crate) fn invalid(data: &[u8]) -> Self {
        DocIdError::InvalidInput(String::from_utf8_lossy(data).into_owned())
    }
}
