//! Allocation-specific error types.

use std::error::Error;
use std::fmt;

/// Errors from capacity growth and heap allocation.
///
/// Both variants leave the container that reported them in its
/// last-known-good state: a failed growth never partially mutates the
/// buffer it was asked to grow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// A capacity or byte-size computation would overflow the platform's
    /// size type. Detected before the allocator is invoked, so a
    /// wrapped-around, undersized buffer can never be handed out.
    CapacityOverflow {
        /// The element count that could not be represented.
        requested: usize,
    },
    /// The underlying allocator could not satisfy the request.
    AllocationFailed {
        /// Number of bytes requested from the allocator.
        bytes: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} elements exceed the addressable range")
            }
            Self::AllocationFailed { bytes } => {
                write!(f, "allocation failed: {bytes} bytes")
            }
        }
    }
}

impl Error for AllocError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_request_size() {
        let err = AllocError::CapacityOverflow { requested: 42 };
        assert!(err.to_string().contains("42"));
        let err = AllocError::AllocationFailed { bytes: 4096 };
        assert!(err.to_string().contains("4096"));
    }
}
