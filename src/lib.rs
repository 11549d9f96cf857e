//! TUI Racer (workspace facade crate).
//!
//! Re-exports the workspace crates under short names
//! (`tui_racer::{core,assets,input,term,types}`) and hosts the binary's
//! configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_racer_assets as assets;
pub use tui_racer_core as core;
pub use tui_racer_input as input;
pub use tui_racer_term as term;
pub use tui_racer_types as types;

pub use config::Config;
