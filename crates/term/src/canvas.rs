//! Pixel canvas rasterized into half-block terminal cells.
//!
//! Terminal cells are roughly twice as tall as they are wide, so each cell
//! carries two square pixels: the upper one as the `▀` foreground and the
//! lower one as the background.

use crate::assets::Sprite;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Sprite texels with alpha below this are treated as transparent.
pub const ALPHA_CUTOFF: u8 = 128;

const UPPER_HALF_BLOCK: char = '▀';

/// A resizable RGB pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, reusing the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels
            .resize((width as usize) * (height as usize), Rgb::BLACK);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    pub fn set(&mut self, x: u16, y: u16, color: Rgb) {
        if x < self.width && y < self.height {
            self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = color;
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Stretch an opaque image over the whole canvas.
    pub fn draw_background(&mut self, sprite: &Sprite) {
        let w = self.width as f32;
        let h = self.height as f32;
        for y in 0..self.height {
            let v = (y as f32 + 0.5) / h;
            for x in 0..self.width {
                let u = (x as f32 + 0.5) / w;
                let [r, g, b, _] = sprite.sample(u, v);
                self.set(x, y, Rgb::new(r, g, b));
            }
        }
    }

    /// Draw `sprite` into the pixel-space rectangle at (`left`, `top`), alpha-tested.
    ///
    /// The rectangle may hang off any edge; only the visible part is drawn.
    pub fn draw_sprite(&mut self, sprite: &Sprite, left: f32, top: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let x0 = left.floor().max(0.0) as u32;
        let y0 = top.floor().max(0.0) as u32;
        let x1 = (left + width).ceil().clamp(0.0, self.width as f32) as u32;
        let y1 = (top + height).ceil().clamp(0.0, self.height as f32) as u32;

        for py in y0..y1 {
            let v = (py as f32 + 0.5 - top) / height;
            if !(0.0..1.0).contains(&v) {
                continue;
            }
            for px in x0..x1 {
                let u = (px as f32 + 0.5 - left) / width;
                if !(0.0..1.0).contains(&u) {
                    continue;
                }
                let [r, g, b, a] = sprite.sample(u, v);
                if a >= ALPHA_CUTOFF {
                    self.set(px as u16, py as u16, Rgb::new(r, g, b));
                }
            }
        }
    }

    /// Pack pixel pairs into half-block cells with the top-left cell at (`x`, `y`).
    pub fn present_into(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        for row in 0..self.height.div_ceil(2) {
            let top_y = row * 2;
            for col in 0..self.width {
                let Some(top) = self.get(col, top_y) else {
                    continue;
                };
                // An odd final row repeats its colour in the lower half.
                let bottom = self.get(col, top_y + 1).unwrap_or(top);
                fb.put_char(
                    x.saturating_add(col),
                    y.saturating_add(row),
                    UPPER_HALF_BLOCK,
                    CellStyle::pixels(top, bottom),
                );
            }
        }
    }
}
