//! Locating the registrable domain and host inside raw URL bytes.
//!
//! - Curated top-level and second-level suffix tables
//! - Single-pass domain/host splitting

pub mod splitter;
pub mod suffix;

pub use splitter::{split_domain_host, DomainHost};
pub use suffix::{
    is_known_suffix, is_second_level_suffix, is_top_level_suffix, SuffixSet, SuffixTable,
};
