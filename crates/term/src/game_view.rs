//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::assets::{Assets, Sprite};
use crate::canvas::PixelCanvas;
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CAR_HEIGHT, FIELD_HEIGHT_PX, FIELD_WIDTH_PX, PLAYER_Y};

/// Smallest playfield worth drawing, in pixels.
const MIN_FIELD_WIDTH_PX: u16 = 10;
const MIN_FIELD_HEIGHT_PX: u16 = 14;

const TOO_SMALL: &str = "terminal too small";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the playfield lands inside the viewport.
///
/// `x`/`y` are the cell coordinates of the top-left playfield cell (inside
/// the border). The field is `width_px` pixels wide (one per column) and
/// `height_px` pixels tall (two per row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub x: u16,
    pub y: u16,
    pub width_px: u16,
    pub height_px: u16,
}

impl Field {
    /// Largest field with the 500:700 aspect that fits inside `viewport` with a border.
    pub fn fit(viewport: Viewport) -> Option<Self> {
        let cols = viewport.width.saturating_sub(2) as u32;
        let rows = viewport.height.saturating_sub(2) as u32;

        let mut height_px = (rows * 2).min(cols * FIELD_HEIGHT_PX / FIELD_WIDTH_PX);
        height_px -= height_px % 2;
        let width_px = (height_px * FIELD_WIDTH_PX + FIELD_HEIGHT_PX / 2) / FIELD_HEIGHT_PX;

        let width_px = u16::try_from(width_px).ok()?;
        let height_px = u16::try_from(height_px).ok()?;
        if width_px < MIN_FIELD_WIDTH_PX || height_px < MIN_FIELD_HEIGHT_PX {
            return None;
        }

        let frame_w = width_px + 2;
        let frame_h = height_px / 2 + 2;
        Some(Self {
            x: viewport.width.saturating_sub(frame_w) / 2 + 1,
            y: viewport.height.saturating_sub(frame_h) / 2 + 1,
            width_px,
            height_px,
        })
    }

    pub fn cols(&self) -> u16 {
        self.width_px
    }

    pub fn rows(&self) -> u16 {
        self.height_px.div_ceil(2)
    }

    /// World x in `[-1, 1]` to canvas pixel column.
    pub fn px_x(&self, x: f32) -> f32 {
        (x + 1.0) / 2.0 * self.width_px as f32
    }

    /// World y in `[-1, 1]` (up) to canvas pixel row (down).
    pub fn px_y(&self, y: f32) -> f32 {
        (1.0 - y) / 2.0 * self.height_px as f32
    }

    /// Terminal cell holding the world point, if it lies on the field.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let col = self.px_x(x).floor();
        let row = (self.px_y(y) / 2.0).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols() as f32 || row >= self.rows() as f32 {
            return None;
        }
        Some((self.x + col as u16, self.y + row as u16))
    }
}

/// A lightweight terminal renderer for the racing game.
#[derive(Debug, Clone)]
pub struct GameView {
    canvas: PixelCanvas,
    text: CellStyle,
    border: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            canvas: PixelCanvas::new(0, 0),
            text: CellStyle {
                fg: Rgb::WHITE,
                bg: Rgb::BLACK,
                bold: true,
                dim: false,
            },
            border: CellStyle {
                fg: Rgb::new(200, 200, 200),
                bg: Rgb::BLACK,
                bold: false,
                dim: false,
            },
        }
    }
}

impl GameView {
    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; the pixel canvas is
    /// kept inside the view and only reallocated when the field size changes.
    pub fn render_into(
        &mut self,
        snap: &GameSnapshot,
        assets: &Assets,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let Some(field) = Field::fit(viewport) else {
            self.draw_too_small(fb, viewport);
            return;
        };

        self.canvas.resize(field.width_px, field.height_px);
        self.canvas.draw_background(&assets.background);

        if snap.playing() {
            self.draw_car(&field, &assets.player, snap.player_x, PLAYER_Y);
            for enemy in &snap.enemies {
                self.draw_car(&field, &assets.enemy, enemy.x, enemy.y);
            }
        }

        self.canvas.present_into(fb, field.x, field.y);
        self.draw_border(fb, &field);

        if snap.playing() {
            self.draw_text(fb, &field, -0.95, 0.9, "Score: ", Some(snap.score));
        } else {
            self.draw_text(fb, &field, -0.3, 0.2, "GAME OVER", None);
            self.draw_text(fb, &field, -0.3, 0.1, "Score: ", Some(snap.score));
            self.draw_text(fb, &field, -0.45, 0.0, "Press ENTER to retry", None);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &mut self,
        snap: &GameSnapshot,
        assets: &Assets,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, assets, viewport, &mut fb);
        fb
    }

    /// Car centred on world `x` with its bottom edge at world `y`.
    ///
    /// Height is fixed; width follows the sprite's own aspect ratio.
    fn draw_car(&mut self, field: &Field, sprite: &Sprite, x: f32, y: f32) {
        let top = field.px_y(y + CAR_HEIGHT);
        let height = field.px_y(y) - top;
        let width = height * sprite.aspect();
        let left = field.px_x(x) - width / 2.0;
        self.canvas.draw_sprite(sprite, left, top, width, height);
    }

    /// Text with its first character at world (`x`, `y`), clipped to the field.
    fn draw_text(
        &self,
        fb: &mut FrameBuffer,
        field: &Field,
        x: f32,
        y: f32,
        label: &str,
        value: Option<u32>,
    ) {
        let Some((col, row)) = field.cell_at(x, y) else {
            return;
        };
        let right = field.x + field.cols();
        let end = fb.put_str_until(col, row, right, label, self.text);
        if let Some(v) = value {
            fb.put_u32_until(end, row, right, v, self.text);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, field: &Field) {
        let x = field.x - 1;
        let y = field.y - 1;
        let w = field.cols() + 2;
        let h = field.rows() + 2;
        let style = self.border;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let text_w = TOO_SMALL.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        let y = viewport.height / 2;
        fb.put_str(x, y, TOO_SMALL, self.text);
    }
}

trait IntoCell {
    fn into_cell(self, ch: char) -> crate::fb::Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> crate::fb::Cell {
        crate::fb::Cell { ch, style: self }
    }
}
