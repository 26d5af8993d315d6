//! The arena allocator: owned blocks, bump allocation, bulk release.

use smallvec::SmallVec;

use loam_core::error::AllocError;

use crate::block::Block;
use crate::config::ArenaConfig;
use crate::handle::ArenaHandle;

/// Block-based bump allocator.
///
/// Serves aligned byte allocations from the newest of its owned
/// blocks, appending a fresh block when the current one is exhausted.
/// Individual allocations are never freed; [`Arena::clear`] releases
/// every block at once and returns the arena to its freshly
/// constructed state. `Drop` performs the same release.
///
/// Allocations are addressed by [`ArenaHandle`] and resolved through
/// [`Arena::get`] / [`Arena::get_mut`]; the handle design keeps the
/// blocks owned by the arena while allowing any number of outstanding
/// allocations.
pub struct Arena {
    /// Owned blocks, oldest first. The last block is the bump target.
    blocks: SmallVec<[Block; 4]>,
    config: ArenaConfig,
}

impl Arena {
    /// Create an empty arena with the default block size.
    ///
    /// No block is allocated until the first allocation request.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an empty arena with the given configuration.
    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            blocks: SmallVec::new(),
            config,
        }
    }

    /// Allocate `size` bytes aligned to pointer width.
    ///
    /// Tries the current block first; when the aligned region does not
    /// fit (or no block exists yet), a new block of
    /// `max(block_size, size)` bytes is appended and the allocation is
    /// re-validated against it. A failed block allocation surfaces as
    /// `Err` — the arena never reads or writes out of bounds, and a
    /// failed call leaves it unchanged.
    pub fn alloc(&mut self, size: usize) -> Result<ArenaHandle, AllocError> {
        if let Some(block) = self.blocks.last_mut() {
            if let Some(offset) = block.alloc(size) {
                return Ok(ArenaHandle::new(self.blocks.len() - 1, offset, size));
            }
        }
        self.grow(size)?;
        let index = self.blocks.len() - 1;
        let block = &mut self.blocks[index];
        // Re-validate against the fresh block; a fresh cursor is
        // aligned, so only an impossible size can still fail.
        let offset = block
            .alloc(size)
            .ok_or(AllocError::AllocationFailed { bytes: size })?;
        Ok(ArenaHandle::new(index, offset, size))
    }

    /// Allocate and initialise in one step.
    pub fn alloc_bytes(&mut self, bytes: &[u8]) -> Result<ArenaHandle, AllocError> {
        let handle = self.alloc(bytes.len())?;
        self.get_mut(handle).copy_from_slice(bytes);
        Ok(handle)
    }

    /// Append a new block of `max(block_size, min_size)` bytes.
    fn grow(&mut self, min_size: usize) -> Result<(), AllocError> {
        let size = self.config.block_size.max(min_size);
        let block = Block::new(size)?;
        self.blocks.push(block);
        Ok(())
    }

    /// Resolve a handle to its bytes.
    ///
    /// # Panics
    ///
    /// Panics if `handle` came from another arena or predates a
    /// [`Arena::clear`].
    pub fn get(&self, handle: ArenaHandle) -> &[u8] {
        self.blocks[handle.block].bytes(handle.offset, handle.len)
    }

    /// Resolve a handle to its bytes, mutably.
    ///
    /// # Panics
    ///
    /// Panics if `handle` came from another arena or predates a
    /// [`Arena::clear`].
    pub fn get_mut(&mut self, handle: ArenaHandle) -> &mut [u8] {
        self.blocks[handle.block].bytes_mut(handle.offset, handle.len)
    }

    /// Release every block at once.
    ///
    /// All outstanding handles become invalid. The arena is left in
    /// the same state as newly constructed — clearing twice is a
    /// no-op, and new allocations may follow immediately.
    pub fn clear(&mut self) {
        // Replace rather than clear: drops the block list's own spill
        // storage along with the blocks.
        self.blocks = SmallVec::new();
    }

    /// Number of blocks currently owned.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Bytes consumed by allocations across all blocks, padding
    /// included.
    pub fn used(&self) -> usize {
        self.blocks.iter().map(Block::used).sum()
    }

    /// Total backing storage across all blocks in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.blocks.iter().map(Block::capacity).sum()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
