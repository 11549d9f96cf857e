use arrayvec::ArrayVec;

use crate::game_state::Enemy;
use crate::types::{Lane, BASE_SPEED, LANE_COUNT};

/// Read-only copy of everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub player_lane: Lane,
    pub player_x: f32,
    pub enemies: ArrayVec<Enemy, LANE_COUNT>,
    pub score: u32,
    pub speed: f32,
    pub game_over: bool,
    pub episode_id: u32,
    pub frame: u32,
}

impl GameSnapshot {
    pub fn playing(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            player_lane: Lane::Center,
            player_x: Lane::Center.x(),
            enemies: ArrayVec::new(),
            score: 0,
            speed: BASE_SPEED,
            game_over: false,
            episode_id: 0,
            frame: 0,
        }
    }
}
