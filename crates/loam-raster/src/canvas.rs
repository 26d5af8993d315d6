//! The pixel canvas.

use loam_buf::Buf;
use loam_core::error::AllocError;
use loam_core::view::SliceView;

use crate::color::Rgb8;

/// A fixed-size RGB canvas backed by a growable pixel buffer.
///
/// Pixel access follows the workspace's index policy: out-of-bounds
/// writes are silent no-ops, out-of-bounds reads return `None`. Row 0
/// is the top of the image.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Buf<Rgb8>,
}

impl Canvas {
    /// Create a canvas of `width * height` black pixels.
    ///
    /// The pixel storage is allocated up front through the workspace
    /// allocation gateway, so an impossible size reports an error
    /// instead of aborting.
    pub fn new(width: u32, height: u32) -> Result<Self, AllocError> {
        let count = (width as usize)
            .checked_mul(height as usize)
            .ok_or(AllocError::CapacityOverflow { requested: usize::MAX })?;
        let mut pixels = Buf::new();
        pixels.resize(count, Rgb8::BLACK)?;
        log::debug!("canvas {}x{} ({} pixels)", width, height, count);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgb8) {
        for px in self.pixels.as_mut_slice() {
            *px = color;
        }
    }

    /// Write one pixel. Out-of-bounds coordinates are a silent no-op.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb8) {
        if let Some(index) = self.index(x, y) {
            self.pixels.set(index, color);
        }
    }

    /// Read one pixel, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb8> {
        self.index(x, y).and_then(|i| self.pixels.get(i)).copied()
    }

    /// Read-only view over the pixels in row-major order.
    pub fn pixels(&self) -> SliceView<'_, Rgb8> {
        self.pixels.as_view()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_black() {
        let canvas = Canvas::new(4, 3).unwrap();
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert_eq!(canvas.pixels().len(), 12);
        assert!(canvas.pixels().iter().all(|&p| p == Rgb8::BLACK));
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.set(3, 5, Rgb8::RED);
        assert_eq!(canvas.get(3, 5), Some(Rgb8::RED));
        assert_eq!(canvas.get(5, 3), Some(Rgb8::BLACK));
    }

    #[test]
    fn out_of_bounds_set_is_noop_and_get_is_none() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.set(2, 0, Rgb8::RED);
        canvas.set(0, 2, Rgb8::RED);
        assert!(canvas.pixels().iter().all(|&p| p == Rgb8::BLACK));
        assert_eq!(canvas.get(2, 0), None);
    }

    #[test]
    fn fill_covers_every_pixel() {
        let mut canvas = Canvas::new(3, 3).unwrap();
        canvas.fill(Rgb8::from_hex(0x1a1a1a));
        assert!(canvas.pixels().iter().all(|&p| p == Rgb8::from_hex(0x1a1a1a)));
    }

    #[test]
    fn zero_sized_canvas_is_valid() {
        let canvas = Canvas::new(0, 100).unwrap();
        assert_eq!(canvas.pixels().len(), 0);
        assert_eq!(canvas.get(0, 0), None);
    }

    #[test]
    fn row_major_layout() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.set(2, 1, Rgb8::BLUE);
        assert_eq!(canvas.pixels().get(5), Some(&Rgb8::BLUE));
    }
}
