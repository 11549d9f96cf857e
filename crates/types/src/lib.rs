//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Playfield Coordinates
//!
//! The playfield is a normalized square: both axes span `[-1, 1]`, with `+y`
//! pointing up. It is displayed stretched to a 500:700 portrait frame.
//!
//! - **Lanes**: three fixed columns at `x = -0.6, 0.0, 0.6`
//! - **Player row**: the player car's bottom edge sits at `y = -0.9`
//! - **Spawn**: enemies appear at `y = 1.2` (just above the top edge) and
//!   scroll down toward the player
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `BASE_SPEED` | 0.01 | Scroll distance per tick at start |
//! | `SPEED_STEP` | 0.002 | Speed gained every `SPEED_UP_EVERY` points |
//! | `MAX_SPEED` | 0.05 | Speed ceiling |
//! | `PASSED_Y` | -1.2 | An enemy below this row scores a point |
//! | `DESPAWN_Y` | -1.2 | An enemy below this row is removed |
//! | `COLLISION_TOLERANCE_X` | 0.2 | Horizontal hit distance |
//! | `COLLISION_TOLERANCE_Y` | 0.15 | Vertical hit distance from the player row |
//!
//! # Examples
//!
//! ```
//! use tui_racer_types::{GameAction, Lane, LANE_X};
//!
//! let lane = Lane::Center;
//! assert_eq!(lane.x(), LANE_X[1]);
//!
//! // Edges clamp rather than wrap.
//! assert_eq!(Lane::Left.left(), Lane::Left);
//! assert_eq!(Lane::Left.right(), Lane::Center);
//!
//! assert_eq!(GameAction::Restart.as_str(), "restart");
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Number of lanes on the road
pub const LANE_COUNT: usize = 3;

/// Lane centre x-coordinates, left to right
pub const LANE_X: [f32; LANE_COUNT] = [-0.6, 0.0, 0.6];

/// Bottom edge of the player car
pub const PLAYER_Y: f32 = -0.9;

/// Displayed height of every car sprite
pub const CAR_HEIGHT: f32 = 0.3;

/// Scroll distance per tick after a restart
pub const BASE_SPEED: f32 = 0.01;

/// Speed increment applied by the difficulty ramp
pub const SPEED_STEP: f32 = 0.002;

/// Speed ceiling
pub const MAX_SPEED: f32 = 0.05;

/// The ramp fires whenever the score reaches a multiple of this
pub const SPEED_UP_EVERY: u32 = 5;

/// An enemy whose bottom edge drops below this row has been passed
pub const PASSED_Y: f32 = -1.2;

/// An enemy whose bottom edge drops below this row is removed
pub const DESPAWN_Y: f32 = -1.2;

/// Bottom edge of the first enemy in a spawn batch
pub const SPAWN_Y: f32 = 1.2;

/// Extra height added for each further enemy in the same batch
pub const SPAWN_STAGGER: f32 = 0.3;

/// Smallest spawn batch
pub const SPAWN_MIN: u32 = 1;

/// Largest spawn batch
pub const SPAWN_MAX: u32 = 2;

/// Horizontal distance under which an enemy shares the player's lane
pub const COLLISION_TOLERANCE_X: f32 = 0.2;

/// Vertical distance between an enemy's centre and the player row that counts as a hit
pub const COLLISION_TOLERANCE_Y: f32 = 0.15;

/// Playfield width in display units (sets the aspect ratio)
pub const FIELD_WIDTH_PX: u32 = 500;

/// Playfield height in display units (sets the aspect ratio)
pub const FIELD_HEIGHT_PX: u32 = 700;


/// One of the three lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lane {
    Left,
    #[default]
    Center,
    Right,
}

impl Lane {
    /// All lanes, left to right
    pub const ALL: [Lane; LANE_COUNT] = [Lane::Left, Lane::Center, Lane::Right];

    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Center => 1,
            Lane::Right => 2,
        }
    }

    /// Lane centre x-coordinate
    pub fn x(self) -> f32 {
        LANE_X[self.index()]
    }

    /// Neighbour to the left, clamped at the leftmost lane
    pub fn left(self) -> Self {
        match self {
            Lane::Left | Lane::Center => Lane::Left,
            Lane::Right => Lane::Center,
        }
    }

    /// Neighbour to the right, clamped at the rightmost lane
    pub fn right(self) -> Self {
        match self {
            Lane::Left => Lane::Center,
            Lane::Center | Lane::Right => Lane::Right,
        }
    }
}

/// Player-facing game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    /// Start over; only honoured after a crash
    Restart,
}

impl GameAction {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Restart => "restart",
        }
    }
}
