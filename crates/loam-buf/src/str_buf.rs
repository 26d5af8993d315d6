//! Owning, growable string buffer with a zero terminator.

use std::fmt;

use loam_core::error::AllocError;
use loam_core::growth;
use loam_core::str_view::StrView;

/// A byte string builder with capacity-doubling growth.
///
/// Content is byte-oriented (input read from files need not be UTF-8);
/// [`StrBuf::to_str`] is the checked conversion. Whenever the buffer is
/// allocated, a zero byte sits immediately after the `len` content
/// bytes, so `capacity >= len + 1` and the content is always usable as
/// a C string. An unallocated buffer (`capacity == 0`) carries no
/// terminator.
///
/// Growth shares the array's doubling algorithm, with one extra byte
/// reserved for the terminator. A failed growth leaves the builder in
/// its last-known-good state.
pub struct StrBuf {
    // Invariant: empty (unallocated) or content bytes + one trailing 0.
    data: Vec<u8>,
}

impl StrBuf {
    /// Create an empty builder with no allocation.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a builder with at least `capacity` bytes pre-allocated
    /// and an empty, terminated content.
    ///
    /// A requested capacity of zero falls back to the default minimum
    /// ([`growth::MIN_CAPACITY`]).
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocError> {
        let capacity = if capacity == 0 {
            growth::MIN_CAPACITY
        } else {
            capacity
        };
        let mut data = Vec::new();
        growth::reserve_exact(&mut data, capacity)?;
        data.push(0);
        Ok(Self { data })
    }

    /// Take ownership of `bytes` as the builder's content.
    ///
    /// Reuses the vector's allocation where possible; only the
    /// terminator byte may force a reservation.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, AllocError> {
        let mut data = bytes;
        let needed = data
            .len()
            .checked_add(1)
            .ok_or(AllocError::CapacityOverflow { requested: usize::MAX })?;
        growth::reserve_exact(&mut data, needed)?;
        data.push(0);
        Ok(Self { data })
    }

    /// Number of content bytes (terminator excluded).
    pub fn len(&self) -> usize {
        self.data.len().saturating_sub(1)
    }

    /// Whether the builder holds no content bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of allocated bytes (terminator slot included).
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Make room for at least `additional` content bytes plus the
    /// terminator. No-op when the capacity already suffices; on error
    /// the builder is unchanged.
    pub fn ensure(&mut self, additional: usize) -> Result<(), AllocError> {
        let needed = self
            .len()
            .checked_add(additional)
            .and_then(|n| n.checked_add(1))
            .ok_or(AllocError::CapacityOverflow { requested: usize::MAX })?;
        let new_capacity =
            growth::grow_capacity(self.data.capacity(), needed, growth::max_capacity::<u8>())?;
        growth::reserve_exact(&mut self.data, new_capacity)
    }

    /// Append raw bytes. Appending an empty slice is a no-op.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<(), AllocError> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.ensure(bytes.len())?;
        // Capacity is settled; swap the terminator for the new content.
        self.data.pop();
        self.data.extend_from_slice(bytes);
        self.data.push(0);
        Ok(())
    }

    /// Append a string slice.
    pub fn push_str(&mut self, s: &str) -> Result<(), AllocError> {
        self.push_bytes(s.as_bytes())
    }

    /// Append a single character (UTF-8 encoded).
    pub fn push_char(&mut self, c: char) -> Result<(), AllocError> {
        let mut encoded = [0u8; 4];
        self.push_bytes(c.encode_utf8(&mut encoded).as_bytes())
    }

    /// Append the content of a view.
    pub fn push_view(&mut self, view: StrView<'_>) -> Result<(), AllocError> {
        self.push_bytes(view.as_bytes())
    }

    /// The content bytes (terminator excluded).
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    /// The content bytes including the trailing zero terminator.
    ///
    /// Empty (no terminator) only when the builder has never allocated.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data
    }

    /// Read-only view over the content bytes.
    pub fn as_view(&self) -> StrView<'_> {
        StrView::from_bytes(self.as_bytes())
    }

    /// The content as `&str`, or `None` when it is not valid UTF-8.
    pub fn to_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// Drop the content, keeping the allocation and the terminator.
    pub fn clear(&mut self) {
        if !self.data.is_empty() {
            self.data.clear();
            self.data.push(0);
        }
    }

    /// Release the backing storage entirely.
    ///
    /// Afterwards `len == 0` and `capacity == 0`, exactly as freshly
    /// constructed. Safe to call repeatedly; `Drop` performs the same
    /// release for builders that are never reset explicitly.
    pub fn reset(&mut self) {
        self.data = Vec::new();
    }
}

impl Default for StrBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_view(), f)
    }
}

impl fmt::Debug for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_view(), f)
    }
}

impl PartialEq for StrBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for StrBuf {}
