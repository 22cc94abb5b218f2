//! Curated suffix tables used to locate the registrable domain.
//!
//! Two tables exist: top-level suffixes and second-level indicators. A
//! second-level indicator followed by a label that is not a top-level suffix
//! (`com.hk`, `edu.cn`) makes the domain boundary move one label to the left.
//!
//! Each table is partitioned by label length and every partition is sorted by
//! a rotated key (byte 1, then byte 0, then the rest), so most misses are
//! rejected after two byte comparisons.

use std::cmp::Ordering;
use std::sync::LazyLock;

/// Top-level suffixes.
pub const TOP_LEVEL_SUFFIXES: &[&str] = &[
    "ac", "co",
    "cat", "edu", "net", "biz", "mil", "int", "com", "gov", "org", "pro",
    "name", "aero", "info", "coop", "jobs", "mobi", "arpa",
    "travel", "museum",
];

/// Second-level indicators: regional codes plus the generic suffixes.
pub const SECOND_LEVEL_SUFFIXES: &[&str] = &[
    "ha", "hb", "ac", "sc", "gd", "sd", "he", "ah", "qh", "sh", "hi",
    "bj", "fj", "tj", "xj", "zj", "hk", "hl", "jl", "nm", "hn", "ln",
    "sn", "yn", "co", "mo", "cq", "gs", "js", "tw", "gx", "jx", "nx",
    "sx", "gz", "xz",
    "cat", "edu", "net", "biz", "mil", "int", "com", "gov", "org", "pro",
    "name", "aero", "info", "coop", "jobs", "mobi", "arpa",
    "travel", "museum",
];

static TOP_LEVEL: LazyLock<SuffixSet> = LazyLock::new(|| SuffixSet::new(TOP_LEVEL_SUFFIXES));
static SECOND_LEVEL: LazyLock<SuffixSet> =
    LazyLock::new(|| SuffixSet::new(SECOND_LEVEL_SUFFIXES));

/// Which suffix table to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixTable {
    /// Generic top-level suffixes (`com`, `org`, ...).
    TopLevel,
    /// Tokens that form a compound suffix with a following label.
    SecondLevel,
}

impl SuffixTable {
    fn set(self) -> &'static SuffixSet {
        match self {
            SuffixTable::TopLevel => &TOP_LEVEL,
            SuffixTable::SecondLevel => &SECOND_LEVEL,
        }
    }
}

/// Check whether `label` is listed in `table`.
///
/// # Examples
///
/// ```
/// use docid::{is_known_suffix, SuffixTable};
///
/// assert!(is_known_suffix(SuffixTable::TopLevel, b"com"));
/// assert!(is_known_suffix(SuffixTable::SecondLevel, b"hk"));
/// assert!(!is_known_suffix(SuffixTable::TopLevel, b"hk"));
/// ```
pub fn is_known_suffix(table: SuffixTable, label: &[u8]) -> bool {
    table.set().contains(label)
}

/// Shorthand for [`SuffixTable::TopLevel`] lookups.
pub fn is_top_level_suffix(label: &[u8]) -> bool {
    TOP_LEVEL.contains(label)
}

/// Shorthand for [`SuffixTable::SecondLevel`] lookups.
pub fn is_second_level_suffix(label: &[u8]) -> bool {
    SECOND_LEVEL.contains(label)
}

/// An immutable set of short ASCII labels partitioned by length.
#[derive(Debug)]
pub struct SuffixSet {
    // Indexed by label length; an empty bucket means no partition.
    buckets: Vec<Vec<&'static [u8]>>,
}

impl SuffixSet {
    /// Build the set from a list of labels. Order of `labels` is irrelevant.
    pub fn new(labels: &[&'static str]) -> Self {
        let max_len = labels.iter().map(|l| l.len()).max().unwrap_or(0);
        let mut buckets: Vec<Vec<&'static [u8]>> = vec![Vec::new(); max_len + 1];

        for label in labels {
            buckets[label.len()].push(label.as_bytes());
        }
        for bucket in &mut buckets {
            bucket.sort_by(|a, b| rotated_cmp(a, b));
            bucket.dedup();
        }

        SuffixSet { buckets }
    }

    /// Membership test: O(1) reject on unknown lengths, binary search otherwise.
    pub fn contains(&self, label: &[u8]) -> bool {
        match self.buckets.get(label.len()) {
            Some(bucket) if !bucket.is_empty() => bucket
                .binary_search_by(|entry| rotated_cmp(entry, label))
                .is_ok(),
            _ => false,
        }
    }

    /// Number of labels in the set.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compare two labels of equal length by byte 1, then byte 0, then the rest.
fn rotated_cmp(a: &[u8], b: &[u8]) -> Ordering {
    if a.len() < 2 || b.len() < 2 {
        return a.cmp(b);
    }
    a[1].cmp(&b[1])
        .then(a[0].cmp(&b[0]))
        .then_with(|| a[2..].cmp(&b[2..]))
}
