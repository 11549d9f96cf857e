//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Lane changes are
//! discrete, one per key press, so there is no auto-repeat handling here.

pub mod map;

pub use tui_racer_types as types;

pub use map::{handle_key_event, should_quit};
