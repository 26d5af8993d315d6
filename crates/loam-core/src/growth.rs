//! Capacity-growth policy and the fallible allocation gateway.
//!
//! Every growable structure in the workspace sizes itself through
//! [`grow_capacity`] and commits the result through [`reserve_exact`].
//! No other code path in the workspace touches the allocator, so
//! overflow checking and the strong failure guarantee live in exactly
//! one place.

use std::mem;

use crate::error::AllocError;

/// Capacity handed out when a zero-capacity container first grows.
pub const MIN_CAPACITY: usize = 16;

/// Checked byte size of `count` items of `item_size` bytes each.
///
/// Returns `None` when the multiplication would overflow `usize`. The
/// allocator must never see a wrapped-around size.
pub fn byte_size(item_size: usize, count: usize) -> Option<usize> {
    item_size.checked_mul(count)
}

/// Largest element count storage for `T` may hold.
///
/// Rust allocations are capped at `isize::MAX` bytes. Zero-sized types
/// are unbounded.
pub fn max_capacity<T>() -> usize {
    let size = mem::size_of::<T>();
    if size == 0 {
        usize::MAX
    } else {
        isize::MAX as usize / size
    }
}

/// Compute the capacity a container should grow to.
///
/// Doubles `capacity` (starting from [`MIN_CAPACITY`] when zero) until
/// it reaches `needed`, clamping at `limit`. Returns `capacity`
/// unchanged when `needed` already fits.
///
/// Fails with [`AllocError::CapacityOverflow`] when even the clamped
/// capacity cannot hold `needed`; the caller must leave its buffer
/// completely untouched in that case.
pub fn grow_capacity(capacity: usize, needed: usize, limit: usize) -> Result<usize, AllocError> {
    if needed <= capacity {
        return Ok(capacity);
    }
    if needed > limit {
        return Err(AllocError::CapacityOverflow { requested: needed });
    }
    let mut new_capacity = if capacity == 0 {
        MIN_CAPACITY.min(limit)
    } else {
        capacity
    };
    while new_capacity < needed {
        new_capacity = match new_capacity.checked_mul(2) {
            Some(doubled) if doubled <= limit => doubled,
            // Doubling overflowed or passed the limit: clamp. The limit
            // is known to hold `needed` from the check above.
            _ => limit,
        };
    }
    Ok(new_capacity)
}

/// Grow a vector's storage to hold at least `new_capacity` elements.
///
/// This is the sole gateway through which workspace containers acquire
/// heap storage. The byte size is validated before the allocator is
/// invoked, and a failed reservation leaves the vector fully intact:
/// same pointer, same length, same capacity.
pub fn reserve_exact<T>(vec: &mut Vec<T>, new_capacity: usize) -> Result<(), AllocError> {
    if new_capacity <= vec.capacity() {
        return Ok(());
    }
    if new_capacity > max_capacity::<T>() {
        return Err(AllocError::CapacityOverflow {
            requested: new_capacity,
        });
    }
    let bytes = byte_size(mem::size_of::<T>(), new_capacity).ok_or(AllocError::CapacityOverflow {
        requested: new_capacity,
    })?;
    let additional = new_capacity - vec.len();
    vec.try_reserve_exact(additional)
        .map_err(|_| AllocError::AllocationFailed { bytes })
}
