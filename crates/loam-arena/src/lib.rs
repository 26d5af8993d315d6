//! Block-based bump allocation for the loam runtime-support library.
//!
//! An [`Arena`] serves many small allocations out of large owned
//! blocks and releases them all at once — the intended discharge
//! mechanism for graphs of objects that share one lifetime (parse
//! trees, request-scoped scratch data).
//!
//! # Architecture
//!
//! ```text
//! Arena (orchestrator)
//! ├── Block[] (owned, append-only; current block is the newest)
//! │   └── zero-initialised byte region + bump cursor
//! └── ArenaHandle (block index + offset + len, resolved via the arena)
//! ```
//!
//! Allocations are aligned to pointer width and never individually
//! freed. Storage is acquired exclusively through the `loam-core`
//! allocation gateway, so block-allocation failure surfaces as an
//! error instead of an abort.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod arena;
pub mod block;
pub mod config;
pub mod handle;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use block::ALIGN;
pub use config::ArenaConfig;
pub use handle::ArenaHandle;
