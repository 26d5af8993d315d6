//! Non-owning string views over byte storage.
//!
//! [`StrView`] is the string counterpart of
//! [`SliceView`](crate::view::SliceView): a read-only window over bytes
//! owned elsewhere. It is byte-oriented — content read from files need
//! not be UTF-8 — with [`StrView::to_str`] as the checked escape hatch.

use std::borrow::Cow;
use std::fmt;
use std::str;

/// Read-only, non-owning reference to a run of bytes treated as text.
///
/// Pure value object: no allocation, `Copy`, comparisons are raw byte
/// compares over the visible length. Validity is scoped by lifetime to
/// the storage the view borrows.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrView<'a> {
    data: &'a [u8],
}

impl<'a> StrView<'a> {
    /// View over a string slice.
    pub fn from_str(s: &'a str) -> Self {
        Self { data: s.as_bytes() }
    }

    /// View over raw bytes.
    pub fn from_bytes(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Number of bytes visible through the view.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the view covers zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The underlying bytes, borrowed for the view's full lifetime.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// The content as `&str`, or `None` when it is not valid UTF-8.
    pub fn to_str(&self) -> Option<&'a str> {
        str::from_utf8(self.data).ok()
    }

    /// Sub-view over the byte range `[start, end)` with clamping.
    ///
    /// Both bounds are clamped into `[0, len]`; a range that is inverted
    /// after clamping collapses to an empty view. Never reads out of
    /// bounds, never panics.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.data.len());
        let start = start.min(end);
        Self {
            data: &self.data[start..end],
        }
    }

    /// Byte-wise equality with another view.
    pub fn equals(&self, other: StrView<'_>) -> bool {
        self.data == other.data
    }

    /// Whether the view begins with `prefix`. An empty prefix matches
    /// any view.
    pub fn starts_with(&self, prefix: StrView<'_>) -> bool {
        self.data.starts_with(prefix.data)
    }

    /// Whether the view ends with `suffix`. An empty suffix matches
    /// any view.
    pub fn ends_with(&self, suffix: StrView<'_>) -> bool {
        self.data.ends_with(suffix.data)
    }

    /// Lossy text rendition, replacing invalid UTF-8 sequences.
    pub fn to_string_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.data)
    }
}

impl<'a> From<&'a str> for StrView<'a> {
    fn from(s: &'a str) -> Self {
        Self::from_str(s)
    }
}

impl<'a> From<&'a [u8]> for StrView<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::from_bytes(data)
    }
}

impl fmt::Display for StrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

// Debug renders as a quoted (lossy) string, matching how the view is
// read in test failures.
impl fmt::Debug for StrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}
