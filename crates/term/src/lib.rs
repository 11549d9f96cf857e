//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead rasterizes the
//! road and cars into a pixel canvas, packs two pixels per character cell
//! with the upper-half block, and flushes the result to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw the real sprite images, not ASCII stand-ins
//! - Keep the playfield's 5:7 aspect ratio on any terminal size

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_racer_assets as assets;
pub use tui_racer_core as core;
pub use tui_racer_types as types;

pub use canvas::PixelCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{Field, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
