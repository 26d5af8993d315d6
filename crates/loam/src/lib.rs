//! Loam: a runtime-support library of growable buffers, arena
//! allocation, and zero-copy views.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all loam sub-crates. For most users, adding `loam` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use loam::prelude::*;
//!
//! # fn main() -> Result<(), loam::AllocError> {
//! // A growable array with explicit, fallible growth.
//! let mut numbers = Buf::new();
//! for n in 1..=5 {
//!     numbers.push(n)?;
//! }
//! numbers.insert(2, 99)?;
//! assert_eq!(numbers.as_slice(), &[1, 2, 99, 3, 4, 5]);
//!
//! // A string builder that stays zero-terminated.
//! let mut line = StrBuf::new();
//! line.push_str("hello")?;
//! line.push_char(' ')?;
//! line.push_view(StrView::from_str("world"))?;
//! assert_eq!(line.to_str(), Some("hello world"));
//! assert!(line.as_view().starts_with(StrView::from_str("hello")));
//!
//! // An arena for same-lifetime allocations, released in one call.
//! let mut arena = Arena::new();
//! let greeting = arena.alloc_bytes(line.as_bytes())?;
//! assert_eq!(arena.get(greeting), b"hello world");
//! arena.clear();
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `loam-core` | `AllocError`, growth policy, view types |
//! | [`buf`] | `loam-buf` | `Buf`, `StrBuf` |
//! | [`arena`] | `loam-arena` | `Arena`, `ArenaConfig`, `ArenaHandle` |
//! | [`logging`] | `loam-log` | `LogConfig`, `ConsoleLogger`, `init` |
//! | [`io`] | `loam-io` | whole-file read/write helpers |
//! | [`raster`] | `loam-raster` | `Canvas`, `Rgb8`, drawing, PPM |

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Core types: errors, growth policy, views (`loam-core`).
pub mod types {
    pub use loam_core::*;
}

/// Growable containers (`loam-buf`).
pub mod buf {
    pub use loam_buf::*;
}

/// Arena allocation (`loam-arena`).
pub mod arena {
    pub use loam_arena::*;
}

/// Console logging backend (`loam-log`).
pub mod logging {
    pub use loam_log::*;
}

/// Whole-file I/O helpers (`loam-io`).
pub mod io {
    pub use loam_io::*;
}

/// Raster canvas and PPM output (`loam-raster`).
pub mod raster {
    pub use loam_raster::*;
}

// Primary API surface, re-exported at the crate root.
pub use loam_arena::{Arena, ArenaConfig, ArenaHandle};
pub use loam_buf::{Buf, StrBuf};
pub use loam_core::{AllocError, SliceView, StrView};

/// The most commonly used items in one import.
pub mod prelude {
    pub use loam_arena::{Arena, ArenaConfig, ArenaHandle};
    pub use loam_buf::{Buf, StrBuf};
    pub use loam_core::{AllocError, SliceView, StrView};
}
