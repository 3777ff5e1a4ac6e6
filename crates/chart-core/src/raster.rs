// File: crates/chart-core/src/raster.rs
// Summary: Owned 24-bit RGB pixel buffer with clipped line, rectangle and bitmap-text primitives.

use crate::glyphs::{self, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

/// 8-bit truecolor pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub const fn r(self) -> u8 { self.0 }
    pub const fn g(self) -> u8 { self.1 }
    pub const fn b(self) -> u8 { self.2 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectMode {
    Fill,
    Outline,
}

/// Row-major pixel buffer. Writes outside the surface are dropped.
#[derive(Clone, Debug)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    background: Rgb,
    pixels: Vec<Rgb>,
}

impl RasterSurface {
    /// Create a surface filled with `background`. Zero dimensions are raised to 1.
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            background,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn background(&self) -> Rgb { self.background }
    pub fn pixels(&self) -> &[Rgb] { &self.pixels }

    /// Pixel rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> + '_ {
        self.pixels.chunks_exact(self.width as usize)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Integer Bresenham line, both endpoints inclusive.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.set_pixel(x, y, color);
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

    /// Axis-aligned box with top-left (`x`, `y`). Non-positive sizes draw nothing.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb, mode: RectMode) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (right, bottom) = (x + w - 1, y + h - 1);
        match mode {
            RectMode::Fill => {
                let x_lo = x.max(0);
                let x_hi = right.min(self.width as i32 - 1);
                let y_lo = y.max(0);
                let y_hi = bottom.min(self.height as i32 - 1);
                for yy in y_lo..=y_hi {
                    for xx in x_lo..=x_hi {
                        self.set_pixel(xx, yy, color);
                    }
                }
            }
            RectMode::Outline => {
                self.draw_line(x, y, right, y, color);
                self.draw_line(x, y, x, bottom, color);
                self.draw_line(right, y, right, bottom, color);
                self.draw_line(x, bottom, right, bottom, color);
            }
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`), each glyph pixel
    /// expanded to a `scale` x `scale` block. Unknown characters are blank.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgb, scale: i32) {
        let scale = scale.max(1);
        let mut cursor_x = x;
        for ch in text.chars() {
            if let Some(glyph) = glyphs::glyph(ch) {
                for row in 0..GLYPH_HEIGHT {
                    for col in 0..GLYPH_WIDTH {
                        if glyphs::is_lit(glyph, col, row) {
                            self.draw_rect(
                                cursor_x + col * scale,
                                y + row * scale,
                                scale,
                                scale,
                                color,
                                RectMode::Fill,
                            );
                        }
                    }
                }
            }
            cursor_x += GLYPH_ADVANCE * scale;
        }
    }

    /// Width in pixels covered by `text` at `scale`, without the trailing spacing column.
    pub fn text_width(text: &str, scale: i32) -> i32 {
        let n = text.chars().count() as i32;
        if n == 0 {
            return 0;
        }
        n * GLYPH_ADVANCE * scale.max(1) - scale.max(1)
    }

    /// Height in pixels of one line of text at `scale`.
    pub fn text_height(scale: i32) -> i32 {
        GLYPH_HEIGHT * scale.max(1)
    }
}
