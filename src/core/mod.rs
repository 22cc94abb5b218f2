//! Core DocID operations.
//!
//! This module contains:
//! - Digest computation
//! - Fingerprint assembly from URL bytes
//! - Hex encoding (compact and readable)
//! - Decoding and input dispatch

pub mod decoder;
pub mod encoder;
pub mod hasher;
pub mod packer;

pub use decoder::{from_binary, from_bytes, from_hex, from_readable_hex, new};
pub use encoder::assemble;
pub use hasher::{digest, truncated_digest};
pub use packer::{to_hex, to_readable_hex};
