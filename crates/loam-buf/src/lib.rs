//! Growable containers for the loam runtime-support library.
//!
//! Two owning buffer types share one growth algorithm:
//!
//! - [`Buf`]: a generic growable array with explicit, fallible capacity
//!   management.
//! - [`StrBuf`]: a byte string builder that keeps a zero terminator
//!   after its content for C interop.
//!
//! Both size themselves through `loam_core::growth` — the single
//! gateway to the allocator — and guarantee that any failed growth
//! leaves the container in its last-known-good state.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod buf;
pub mod str_buf;

// Public re-exports for the primary API surface.
pub use buf::Buf;
pub use str_buf::StrBuf;
