//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminals, images, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Randomness is injected through [`LaneRng`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: No allocation per tick; enemies live in a fixed-capacity buffer
//!
//! # Module Structure
//!
//! - [`game_state`]: Player lane, enemies, scoring, difficulty ramp and lifecycle
//! - [`rng`]: Injectable random source plus a seeded LCG
//! - [`snapshot`]: Plain copy of the state for renderers
//!
//! # Game Rules
//!
//! - **Lanes**: the player drives in one of three lanes and moves one lane per key press
//! - **Spawning**: enemies arrive in batches of one or two, never two in the same lane
//! - **Scoring**: one point per enemy that scrolls past the player row
//! - **Difficulty**: every 5 points the scroll speed grows by a fixed step, up to a ceiling
//! - **Crash**: an enemy reaching the player row in the player's lane ends the game
//!
//! # Example
//!
//! ```
//! use tui_racer_core::GameState;
//! use tui_racer_types::{GameAction, Lane};
//!
//! // Create a game; the first batch of enemies is already on its way.
//! let mut game = GameState::new(12345);
//! assert!(!game.enemies().is_empty());
//!
//! // Steer and advance one frame.
//! game.apply_action(GameAction::MoveLeft);
//! game.tick();
//!
//! assert_eq!(game.player_lane(), Lane::Left);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep: call [`GameState::tick`](game_state::GameState::tick)
//! once every 16ms (approximately 60 FPS). Speed is expressed per tick, not per second.

pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_racer_types as types;

// Re-export commonly used types for convenience
pub use game_state::{Enemy, GameState};
pub use rng::{LaneRng, SimpleRng};
pub use snapshot::GameSnapshot;
