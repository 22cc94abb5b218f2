//! Single-pass location of the registrable domain and host inside a URL.
//!
//! The scan never materializes a list of labels. It keeps four rolling
//! boundary markers: the positions of the last delimiters seen, oldest first.
//! A marker of `None` stands for "before the first byte".

use std::ops::Range;

use crate::url::suffix::{is_second_level_suffix, is_top_level_suffix};

const DOT: u8 = b'.';
const SLASH: u8 = b'/';
const COLON: u8 = b':';

/// Byte ranges of the registrable domain and the host within a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainHost {
    /// Registrable domain, e.g. `google.com` in `http://www.google.com/`.
    pub domain: Range<usize>,
    /// Everything before the first path slash, scheme included:
    /// `http://www.google.com` in `http://www.google.com/`.
    pub host: Range<usize>,
}

impl DomainHost {
    pub fn domain<'a>(&self, url: &'a [u8]) -> &'a [u8] {
        &url[self.domain.clone()]
    }

    pub fn host<'a>(&self, url: &'a [u8]) -> &'a [u8] {
        &url[self.host.clone()]
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct LabelWindow {
    pre: Option<usize>,
    head: Option<usize>,
    post: Option<usize>,
    tail: Option<usize>,
}

impl LabelWindow {
    fn reset(&mut self, at: usize) {
        *self = LabelWindow {
            pre: Some(at),
            head: Some(at),
            post: Some(at),
            tail: Some(at),
        };
    }

    fn shift(&mut self, at: usize) {
        self.pre = self.head;
        self.head = self.post;
        self.post = self.tail;
        self.tail = Some(at);
    }
}

/// Bytes strictly between two delimiter markers; empty when the markers do
/// not describe a real label.
fn label_between(url: &[u8], from: Option<usize>, to: Option<usize>) -> &[u8] {
    let Some(end) = to else {
        return &[];
    };
    let start = after(from);
    if start <= end && end <= url.len() {
        &url[start..end]
    } else {
        &[]
    }
}

fn after(marker: Option<usize>) -> usize {
    marker.map_or(0, |p| p + 1)
}

/// Locate the registrable domain and host of `url` in one left-to-right scan.
///
/// - `://` ends the scheme; the markers restart at its last slash.
/// - The first other `:` is taken as the host/port separator and closes the
///   last label.
/// - `/` ends the host.
/// - `.` closes a label.
///
/// When the label before the last is a second-level indicator and the last
/// label is not a top-level suffix, the domain grows by one label to the left.
///
/// # Examples
///
/// ```
/// use docid::split_domain_host;
///
/// let url = b"http://www.google.com.hk/abc";
/// let parts = split_domain_host(url);
/// assert_eq!(parts.domain(url), b"google.com.hk");
/// assert_eq!(parts.host(url), b"http://www.google.com.hk");
/// ```
pub fn split_domain_host(url: &[u8]) -> DomainHost {
    let mut window = LabelWindow::default();
    let mut port_seen = false;

    let mut i = 0;
    while i < url.len() {
        match url[i] {
            SLASH => break,
            COLON if url.get(i + 1) == Some(&SLASH) && url.get(i + 2) == Some(&SLASH) => {
                window.reset(i + 2);
                i += 3;
                continue;
            }
            COLON if !port_seen => {
                port_seen = true;
                window.shift(i);
            }
            DOT => window.shift(i),
            _ => {}
        }
        i += 1;
    }

    let host_end = i;
    if !port_seen {
        window.shift(host_end);
    }

    let second = label_between(url, window.head, window.post);
    let last = label_between(url, window.post, window.tail);
    let boundary = if is_second_level_suffix(second) && !is_top_level_suffix(last) {
        window.pre
    } else {
        window.head
    };

    let domain_end = window.tail.unwrap_or(host_end).min(url.len());
    let domain_start = after(boundary).min(domain_end);

    DomainHost {
        domain: domain_start..domain_end,
        host: 0..host_end,
    }
}
