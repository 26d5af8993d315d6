//! Integer drawing primitives.
//!
//! Classic raster algorithms on signed coordinates: shapes may hang
//! off any edge of the canvas and the out-of-bounds parts are simply
//! not drawn.

use crate::canvas::Canvas;
use crate::color::Rgb8;

impl Canvas {
    /// Plot a pixel at signed coordinates, clipping to the canvas.
    pub fn plot(&mut self, x: i32, y: i32, color: Rgb8) {
        if x >= 0 && y >= 0 {
            self.set(x as u32, y as u32, color);
        }
    }

    /// Draw a line from `(x0, y0)` to `(x1, y1)` (Bresenham).
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb8) {
        let (mut x, mut y) = (x0, y0);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw a circle outline centred at `(cx, cy)` (midpoint).
    ///
    /// A negative radius draws nothing; radius zero plots the centre.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb8) {
        if radius < 0 {
            return;
        }
        let mut x = radius;
        let mut y = 0;
        let mut err = 1 - radius;
        while x >= y {
            self.plot(cx + x, cy + y, color);
            self.plot(cx + y, cy + x, color);
            self.plot(cx - y, cy + x, color);
            self.plot(cx - x, cy + y, color);
            self.plot(cx - x, cy - y, color);
            self.plot(cx - y, cy - x, color);
            self.plot(cx + y, cy - x, color);
            self.plot(cx + x, cy - y, color);
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Draw a rectangle outline with its top-left corner at `(x, y)`.
    ///
    /// Zero width or height draws nothing.
    pub fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb8) {
        if width == 0 || height == 0 {
            return;
        }
        let x1 = x + (width - 1) as i32;
        let y1 = y + (height - 1) as i32;
        self.draw_line(x, y, x1, y, color);
        self.draw_line(x, y1, x1, y1, color);
        self.draw_line(x, y, x, y1, color);
        self.draw_line(x1, y, x1, y1, color);
    }

    /// Fill a rectangle with its top-left corner at `(x, y)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb8) {
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                self.plot(x + dx, y + dy, color);
            }
        }
    }

    /// Draw a triangle outline through three vertices.
    pub fn draw_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Rgb8,
    ) {
        self.draw_line(x0, y0, x1, y1, color);
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x2, y2, x0, y0, color);
    }
}
