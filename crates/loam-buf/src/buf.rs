//! Generic growable array with explicit capacity management.

use std::fmt;
use std::slice;

use loam_core::error::AllocError;
use loam_core::growth;
use loam_core::view::SliceView;

/// A growable array of `T` with capacity-doubling growth.
///
/// `Buf` keeps the invariants of its backing storage explicit:
/// `len <= capacity` at all times, and storage is unallocated exactly
/// when `capacity == 0`. All growth is fallible and routed through the
/// workspace allocation gateway; a failed growth leaves the container
/// unchanged — same contents, same length, same capacity.
///
/// Index-taking mutators (`set`, `insert`, `remove`) treat an
/// out-of-range index as a silent no-op rather than an error. Callers
/// that need strict bounds checking validate indices themselves.
pub struct Buf<T> {
    data: Vec<T>,
}

impl<T> Buf<T> {
    /// Create an empty buffer with no allocation.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a buffer with at least `capacity` slots pre-allocated.
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
        Ok(Self { data })
    }

    /// Number of valid elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Make room for at least `extra` additional elements.
    ///
    /// No-op when the current capacity already suffices; otherwise the
    /// capacity doubles until the requirement fits. On error the buffer
    /// is unchanged.
    pub fn ensure(&mut self, extra: usize) -> Result<(), AllocError> {
        let needed = self
            .data
            .len()
            .checked_add(extra)
            .ok_or(AllocError::CapacityOverflow { requested: usize::MAX })?;
        let new_capacity =
            growth::grow_capacity(self.data.capacity(), needed, growth::max_capacity::<T>())?;
        growth::reserve_exact(&mut self.data, new_capacity)
    }

    /// Grow the capacity to at least `new_capacity` slots, without the
    /// doubling policy. No-op when the capacity already suffices.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        growth::reserve_exact(&mut self.data, new_capacity)
    }

    /// Append an element, growing if necessary.
    pub fn push(&mut self, value: T) -> Result<(), AllocError> {
        self.ensure(1)?;
        self.data.push(value);
        Ok(())
    }

    /// Remove and return the last element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable element at `index`, or `None` when out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Overwrite the element at `index`.
    ///
    /// Out-of-range indices are a silent no-op; the incoming value is
    /// dropped and the buffer is unchanged.
    pub fn set(&mut self, index: usize, value: T) {
        if let Some(slot) = self.data.get_mut(index) {
            *slot = value;
        }
    }

    /// Insert `value` at `index`, shifting later elements up one slot.
    ///
    /// Valid indices are `0..=len` (`len` appends). An out-of-range
    /// index is a silent no-op: the value is dropped and the buffer is
    /// unchanged. The growth check runs first, so a full buffer with a
    /// valid index either grows or reports the failure untouched.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), AllocError> {
        if index > self.data.len() {
            return Ok(());
        }
        self.ensure(1)?;
        self.data.insert(index, value);
        Ok(())
    }

    /// Remove the element at `index`, shifting later elements down one
    /// slot and preserving their order.
    ///
    /// Returns the removed element, or `None` (and no state change)
    /// when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.data.len() {
            Some(self.data.remove(index))
        } else {
            None
        }
    }

    /// Drop all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Release the backing storage entirely.
    ///
    /// Afterwards `len == 0` and `capacity == 0`, exactly as freshly
    /// constructed. Safe to call repeatedly; `Drop` performs the same
    /// release for buffers that are never reset explicitly.
    pub fn reset(&mut self) {
        self.data = Vec::new();
    }

    /// The valid elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The valid elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Read-only view over the valid elements.
    pub fn as_view(&self) -> SliceView<'_, T> {
        SliceView::new(&self.data)
    }

    /// Iterator over the valid elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Clone> Buf<T> {
    /// Append every element of `items`, growing at most once.
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<(), AllocError> {
        self.ensure(items.len())?;
        self.data.extend_from_slice(items);
        Ok(())
    }

    /// Resize to exactly `new_len` elements.
    ///
    /// Grows by cloning `value` into the new slots, or truncates when
    /// `new_len` is smaller than the current length.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), AllocError> {
        if new_len > self.data.len() {
            self.ensure(new_len - self.data.len())?;
        }
        self.data.resize(new_len, value);
        Ok(())
    }
}

impl<T> Default for Buf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Buf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.data).finish()
    }
}

impl<T: PartialEq> PartialEq for Buf<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for Buf<T> {}

impl<'a, T> IntoIterator for &'a Buf<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> IntoIterator for Buf<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
