//! Game state module - manages the complete game state
//!
//! This module ties together the player lane, the enemy cars, the injected RNG
//! and scoring. It handles per-frame scrolling, collision, the difficulty ramp
//! and the game lifecycle.

use arrayvec::ArrayVec;

use crate::rng::{LaneRng, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// An enemy car scrolling toward the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    /// Lane x-coordinate
    pub x: f32,
    /// Bottom edge; decreases every tick
    pub y: f32,
    /// Whether this enemy has already been scored
    pub passed: bool,
}

impl Enemy {
    /// Create a fresh enemy in `lane` with its bottom edge at `y`
    pub fn new(lane: Lane, y: f32) -> Self {
        Self {
            x: lane.x(),
            y,
            passed: false,
        }
    }

    /// Check whether this enemy overlaps the player car at `player_x`
    ///
    /// The enemy's vertical centre must be near the player row and it must
    /// share the player's lane.
    pub fn hits_player(&self, player_x: f32) -> bool {
        let center_y = self.y + CAR_HEIGHT / 2.0;
        (center_y - PLAYER_Y).abs() < COLLISION_TOLERANCE_Y
            && (self.x - player_x).abs() < COLLISION_TOLERANCE_X
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    player: Lane,
    /// Scroll distance per tick; only ever grows until restart.
    speed: f32,
    score: u32,
    game_over: bool,
    /// At most one enemy per lane is ever alive.
    enemies: ArrayVec<Enemy, LANE_COUNT>,
    rng: R,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Ticks simulated in the current episode.
    frame: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: LaneRng> GameState<R> {
    /// Create a new game drawing from `rng`
    ///
    /// The game starts in the playing state with its first batch spawned.
    pub fn with_rng(rng: R) -> Self {
        let mut state = Self {
            player: Lane::Center,
            speed: BASE_SPEED,
            score: 0,
            game_over: false,
            enemies: ArrayVec::new(),
            rng,
            episode_id: 0,
            frame: 0,
        };
        state.spawn_batch();
        state
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn player_lane(&self) -> Lane {
        self.player
    }

    pub fn player_x(&self) -> f32 {
        self.player.x()
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    #[cfg(test)]
    pub(crate) fn enemies_mut(&mut self) -> &mut ArrayVec<Enemy, LANE_COUNT> {
        &mut self.enemies
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    #[cfg(test)]
    pub(crate) fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.player_lane = self.player;
        out.player_x = self.player.x();
        out.enemies.clear();
        out.enemies.extend(self.enemies.iter().copied());
        out.score = self.score;
        out.speed = self.speed;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.frame = self.frame;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Reset everything and spawn a fresh batch
    pub fn restart(&mut self) {
        self.player = Lane::Center;
        self.speed = BASE_SPEED;
        self.score = 0;
        self.game_over = false;
        self.frame = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.enemies.clear();
        self.spawn_batch();
        log::info!("episode {} started", self.episode_id);
    }

    /// Spawn one or two enemies in distinct lanes
    ///
    /// Only called with an empty enemy set, so the batch always fits.
    fn spawn_batch(&mut self) {
        let mut lanes = Lane::ALL;
        self.rng.shuffle(&mut lanes);

        let count = SPAWN_MIN + self.rng.next_range(SPAWN_MAX - SPAWN_MIN + 1);
        for (i, &lane) in lanes.iter().take(count as usize).enumerate() {
            // Stagger so a batch doesn't emerge from a single row.
            let y = SPAWN_Y + i as f32 * SPAWN_STAGGER;
            if self.enemies.try_push(Enemy::new(lane, y)).is_err() {
                break;
            }
        }
    }

    /// Move the player one lane to the left
    ///
    /// Returns `true` if the lane changed.
    pub fn move_left(&mut self) -> bool {
        self.move_to(self.player.left())
    }

    /// Move the player one lane to the right
    ///
    /// Returns `true` if the lane changed.
    pub fn move_right(&mut self) -> bool {
        self.move_to(self.player.right())
    }

    fn move_to(&mut self, lane: Lane) -> bool {
        if self.game_over || lane == self.player {
            return false;
        }
        self.player = lane;
        true
    }

    /// Advance the simulation by one frame
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }
        self.frame = self.frame.wrapping_add(1);

        let player_x = self.player.x();
        for i in 0..self.enemies.len() {
            // Read speed per enemy: a ramp earned earlier this frame applies to the rest.
            let speed = self.speed;
            let enemy = &mut self.enemies[i];
            enemy.y -= speed;

            let newly_passed = !enemy.passed && enemy.y < PASSED_Y;
            if newly_passed {
                enemy.passed = true;
            }
            let hit = enemy.hits_player(player_x);

            if newly_passed {
                self.award_point();
            }
            // The rest of the frame still runs; the state is terminal either way.
            if hit && !self.game_over {
                self.game_over = true;
                log::info!(
                    "crashed in {:?} lane after {} frames, score {}",
                    self.player,
                    self.frame,
                    self.score
                );
            }
        }

        self.enemies.retain(|e| e.y >= DESPAWN_Y);
        if self.enemies.is_empty() {
            self.spawn_batch();
        }
    }

    fn award_point(&mut self) {
        self.score += 1;
        if self.score % SPEED_UP_EVERY == 0 && self.speed < MAX_SPEED {
            self.speed = (self.speed + SPEED_STEP).min(MAX_SPEED);
            log::debug!("score {}: speed up to {:.3}", self.score, self.speed);
        }
    }

    /// Apply a game action
    ///
    /// Returns `true` if the state changed. `Restart` is ignored while the
    /// game is still running.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Restart => {
                if !self.game_over {
                    return false;
                }
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy)]
    enum Step {
        Tick,
        Left,
        Right,
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            8 => Just(Step::Tick),
            1 => Just(Step::Left),
            1 => Just(Step::Right),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Score and speed never decrease while playing and speed stays capped.
        #[test]
        fn prop_score_and_speed_monotone(seed in any::<u32>(), steps in prop::collection::vec(step(), 1..2000)) {
            let mut state = GameState::new(seed);
            let mut last_score = state.score();
            let mut last_speed = state.speed();

            for s in steps {
                match s {
                    Step::Tick => state.tick(),
                    Step::Left => { state.move_left(); }
                    Step::Right => { state.move_right(); }
                }
                prop_assert!(state.score() >= last_score);
                prop_assert!(state.speed() >= last_speed);
                prop_assert!(state.speed() <= MAX_SPEED);
                if !state.game_over() {
                    prop_assert!(!state.enemies().is_empty());
                }
                last_score = state.score();
                last_speed = state.speed();
            }
        }

        /// Restart always produces a fresh, playable session.
        #[test]
        fn prop_restart_resets(seed in any::<u32>(), ticks in 0usize..3000) {
            let mut state = GameState::new(seed);
            for _ in 0..ticks {
                state.tick();
            }
            state.restart();

            prop_assert!(!state.game_over());
            prop_assert_eq!(state.score(), 0);
            prop_assert!((state.speed() - BASE_SPEED).abs() < f32::EPSILON);
            prop_assert!(!state.enemies().is_empty());
        }

        /// The player lane index always stays in range.
        #[test]
        fn prop_moves_stay_in_lanes(moves in prop::collection::vec(any::<bool>(), 0..64)) {
            let mut state = GameState::new(1);
            for left in moves {
                if left { state.move_left(); } else { state.move_right(); }
                prop_assert!(state.player_lane().index() < LANE_COUNT);
            }
        }
    }
}
