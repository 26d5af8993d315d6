//! Raster drawing on an RGB canvas, with PPM output.
//!
//! A collaborator of the memory core: the pixel store is a
//! `loam_buf::Buf` and the PPM encoder writes into a
//! `loam_buf::StrBuf`, so every byte of image data flows through the
//! workspace's growth machinery. Drawing uses the classic integer
//! algorithms (Bresenham lines, midpoint circles) and clips by
//! treating out-of-bounds pixels as silent no-ops.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod canvas;
pub mod color;
pub mod draw;
pub mod ppm;

// Public re-exports for the primary API surface.
pub use canvas::Canvas;
pub use color::Rgb8;
