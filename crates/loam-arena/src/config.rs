//! Arena configuration parameters.

/// Configuration for the arena allocator.
///
/// Immutable after construction. The only tunable is the block size;
/// oversized allocations still get a dedicated block of exactly the
/// requested size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of each arena block in bytes.
    ///
    /// Default: 4096. Requests larger than this get a block sized to
    /// the request instead.
    pub block_size: usize,
}

impl ArenaConfig {
    /// Default block size in bytes.
    pub const DEFAULT_BLOCK_SIZE: usize = 4096;

    /// Create a config with the given block size.
    ///
    /// # Panics
    ///
    /// Panics if `block_size` is zero.
    pub fn new(block_size: usize) -> Self {
        assert!(block_size > 0, "arena block size must be non-zero");
        Self { block_size }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BLOCK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_block_size_is_4096() {
        assert_eq!(ArenaConfig::default().block_size, 4096);
    }

    #[test]
    fn custom_block_size_preserved() {
        assert_eq!(ArenaConfig::new(128).block_size, 128);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn zero_block_size_rejected() {
        ArenaConfig::new(0);
    }
}
