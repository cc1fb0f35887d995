//! A software RGB pixel buffer.
//!
//! Models draw into a [`Canvas`]; graphical backends copy it onto their
//! surface. Everything is clipped to the canvas bounds, so callers can draw
//! partially off-screen shapes without checks.

use crate::geom::Point;
use crate::style::Color;

/// A row-major buffer of opaque `0xAARRGGBB` pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Canvas {
    /// Create a black canvas of `width` x `height` pixels.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK.to_pixel(); width * height],
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw pixel data, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Colour at pixel `(x, y)`, or `None` outside the canvas.
    pub fn at(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| Color(self.pixels[i] & 0x00FF_FFFF))
    }

    /// Fill the whole canvas.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color.to_pixel());
    }

    /// Fill the rectangle with top-left corner `(x, y)` and size `w` x `h`.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let px = color.to_pixel();
        for row in y0..y1 {
            let start = row as usize * self.width;
            self.pixels[start + x0 as usize..start + x1 as usize].fill(px);
        }
    }

    /// Draw a straight line from `from` to `to` with a square brush of
    /// `thickness` pixels (Bresenham).
    pub fn draw_line(&mut self, from: Point, to: Point, color: Color, thickness: i32) {
        let t = thickness.max(1);
        let off = t / 2;
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);
        loop {
            self.fill_rect(x - off, y - off, t, t, color);
            if x == to.x && y == to.y {
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

    /// Copy the canvas into a surface buffer of `buf_width` x `buf_height`
    /// pixels. Areas of the buffer not covered by the canvas are cleared to
    /// black.
    pub fn blit_to(&self, buf: &mut [u32], buf_width: usize, buf_height: usize) {
        let copy_w = self.width.min(buf_width);
        let copy_h = self.height.min(buf_height);

        if buf_width > self.width || buf_height > self.height {
            buf.fill(Color::BLACK.to_pixel());
        }

        for y in 0..copy_h {
            let src_start = y * self.width;
            let dst_start = y * buf_width;
            if dst_start + copy_w <= buf.len() {
                buf[dst_start..dst_start + copy_w]
                    .copy_from_slice(&self.pixels[src_start..src_start + copy_w]);
            }
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }
}
