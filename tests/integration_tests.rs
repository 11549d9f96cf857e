//! Integration tests for the main game loop

use tui_racer::core::{GameState, LaneRng, SimpleRng};
use tui_racer::input::handle_key_event;
use tui_racer::types::{GameAction, Lane, BASE_SPEED, MAX_SPEED, SPAWN_Y};

use crossterm::event::{KeyCode, KeyEvent};

fn press(state: &mut GameState, code: KeyCode) -> bool {
    match handle_key_event(KeyEvent::from(code)) {
        Some(action) => state.apply_action(action),
        None => false,
    }
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert!(!state.game_over());
    assert_eq!(state.score(), 0);
    assert_eq!(state.player_lane(), Lane::Center);
    assert!(!state.enemies().is_empty());
    assert!(state.enemies().iter().all(|e| e.y >= SPAWN_Y));

    // Standing still in the centre eventually ends the game.
    let mut ticks = 0u32;
    while !state.game_over() {
        state.tick();
        ticks += 1;
        assert!(ticks < 100_000, "player never crashed");
    }

    // Frozen until restart.
    let frozen = state.snapshot();
    for _ in 0..30 {
        state.tick();
    }
    assert!(!press(&mut state, KeyCode::Left));
    assert_eq!(state.snapshot(), frozen);

    // Enter brings it back.
    assert!(press(&mut state, KeyCode::Enter));
    assert!(!state.game_over());
    assert_eq!(state.score(), 0);
    assert_eq!(state.speed(), BASE_SPEED);
    assert_eq!(state.episode_id(), 1);
    assert!(!state.enemies().is_empty());
}

#[test]
fn test_enter_ignored_while_playing() {
    let mut state = GameState::new(7);
    assert!(press(&mut state, KeyCode::Right));
    assert!(!press(&mut state, KeyCode::Enter));
    assert_eq!(state.player_lane(), Lane::Right);
    assert_eq!(state.episode_id(), 0);
}

#[test]
fn test_keys_clamp_lane() {
    let mut state = GameState::new(7);
    for _ in 0..5 {
        press(&mut state, KeyCode::Left);
    }
    assert_eq!(state.player_lane(), Lane::Left);
    for _ in 0..5 {
        press(&mut state, KeyCode::Char('d'));
    }
    assert_eq!(state.player_lane(), Lane::Right);
}

/// Steer away from whichever enemy is about to reach the player row.
fn dodge(state: &mut GameState) {
    let threatened = state.enemies().iter().any(|e| {
        (e.x - state.player_x()).abs() < 0.2 && e.y < -0.4 && e.y > -1.2
    });
    if !threatened {
        return;
    }
    let candidates = [Lane::Left, Lane::Center, Lane::Right];
    for lane in candidates {
        let busy = state
            .enemies()
            .iter()
            .any(|e| (e.x - lane.x()).abs() < 0.2 && e.y < 0.0 && e.y > -1.2);
        if !busy {
            while state.player_lane().index() > lane.index() {
                state.apply_action(GameAction::MoveLeft);
            }
            while state.player_lane().index() < lane.index() {
                state.apply_action(GameAction::MoveRight);
            }
            return;
        }
    }
}

#[test]
fn test_dodging_scores_and_ramps_speed() {
    let mut state = GameState::new(99);
    let mut last_score = 0;
    let mut last_speed = state.speed();

    for _ in 0..20_000 {
        dodge(&mut state);
        state.tick();
        if state.game_over() {
            break;
        }
        assert!(state.score() >= last_score);
        assert!(state.speed() >= last_speed);
        assert!(state.speed() <= MAX_SPEED);
        last_score = state.score();
        last_speed = state.speed();
    }

    assert!(state.score() >= 5, "dodger only scored {}", state.score());
    assert!(state.speed() > BASE_SPEED);
}

#[test]
fn test_seeded_rng_replays() {
    let mut a = SimpleRng::new(31337);
    let mut b = SimpleRng::new(31337);
    for _ in 0..32 {
        assert_eq!(a.next_range(3), b.next_range(3));
    }

    let mut g1 = GameState::new(31337);
    let mut g2 = GameState::new(31337);
    for _ in 0..2_000 {
        g1.tick();
        g2.tick();
    }
    assert_eq!(g1.snapshot(), g2.snapshot());
}
