//! DocID - three-part URL fingerprints
//!
//! A DocID identifies a URL at three granularities at once: its registrable
//! domain, its site (everything before the path), and the exact URL. Pages
//! can be grouped by any prefix of the identifier for deduplication, crawl
//! scheduling or politeness partitioning.
//!
//! # Quick Start
//!
//! ```
//! use docid::{assemble, DocId};
//!
//! let id = assemble(b"http://www.google.com/");
//! assert_eq!(
//!     id.to_string(),
//!     "1d5920f4b44b27a8-ed646a3334ca891f-ff90821feeb2b02a33a6f9fc8e5f3fcd"
//! );
//!
//! // Any of the three textual forms decodes back to the same value.
//! let parsed: DocId = id.to_hex().parse()?;
//! assert_eq!(parsed, id);
//! # Ok::<(), docid::DocIdError>(())
//! ```
//!
//! # DocID Format
//!
//! | Component | Bytes     | Source                         |
//! |-----------|-----------|--------------------------------|
//! | domain    | [0..8)    | MD5 of the registrable domain  |
//! | site      | [8..16)   | MD5 of the URL up to the path  |
//! | url       | [16..32)  | MD5 of the whole URL           |
//!
//! Representations:
//!
//! - binary: 32 bytes
//! - compact hex: 64 lowercase hex characters
//! - readable hex: `domain-site-url`, 66 characters
//!
//! # Error Handling
//!
//! Fingerprinting never fails. The strict decoders return
//! [`DocIdError::InvalidInput`]; the dynamically typed [`new`] returns
//! [`DocIdError::UnsupportedInputType`] for values that are not bytes or text.

// Re-export main operations
pub use crate::core::{assemble, from_binary, from_bytes, from_hex, from_readable_hex, new};
pub use crate::core::{digest, to_hex, to_readable_hex};

// Re-export domain splitting
pub use crate::url::{
    is_known_suffix, is_second_level_suffix, is_top_level_suffix, split_domain_host, DomainHost,
    SuffixSet, SuffixTable,
};

// Re-export public types
pub use error::DocIdError;
pub use types::{DocId, DomainId, SiteId, UrlId};

// Module declarations
pub mod core;
pub mod error;
pub mod types;
pub mod url;
