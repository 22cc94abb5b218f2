//! 128-bit MD5 digests used to derive the DocID sub-identifiers.

use md5::{Digest, Md5};

/// Digest width in bytes.
pub const DIGEST_LEN: usize = 16;

/// Hash `data` with MD5.
pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Md5::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash `data` and keep the first `N` bytes of the digest.
///
/// `N` must not exceed [`DIGEST_LEN`].
pub fn truncated_digest<const N: usize>(data: &[u8]) -> [u8; N] {
    let full = digest(data);
    let mut out = [0u8; N];
    out.copy_from_slice(&full[..N]);
    out
}
