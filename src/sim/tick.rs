//! Per-frame simulation step and input routing
//!
//! Order within a frame: every enemy moves, then every enemy is checked
//! against the player. Input is applied by the host between frames.

use super::state::{GameEvent, GameState};
use crate::input::Direction;

/// Advance every enemy by `dt` seconds and resolve collisions.
///
/// A player caught by an enemy goes back to the start cell. The win flag is
/// not touched.
pub fn update_all(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.frames += 1;

    for (index, enemy) in state.enemies.iter_mut().enumerate() {
        if enemy.update(dt, &mut state.rng) {
            log::debug!("Enemy {} wrapped, new speed {}", index, enemy.speed());
            events.push(GameEvent::EnemyWrapped {
                index,
                speed: enemy.speed(),
            });
        }
    }

    let player_pos = state.player.pos();
    let hit = state
        .enemies
        .iter()
        .position(|e| e.check_collision(player_pos.x, player_pos.y));

    if let Some(index) = hit {
        log::debug!("Enemy {} hit player at ({}, {})", index, player_pos.x, player_pos.y);
        state.player.reset();
        events.push(GameEvent::PlayerHit { index });
    }

    events
}

/// Forward a direction to the player. Yields `PlayerWon` on the winning move.
pub fn handle_input(state: &mut GameState, direction: Direction) -> Option<GameEvent> {
    if state.player.handle_input(direction) {
        log::info!("Player won after {} frames", state.frames);
        Some(GameEvent::PlayerWon)
    } else {
        None
    }
}

/// Map a raw key name and forward it. Unmapped keys are dropped.
pub fn handle_key(state: &mut GameState, key: &str) -> Option<GameEvent> {
    let direction = Direction::from_key(key)?;
    handle_input(state, direction)
}

/// Host acknowledged the win notification: clear the win and restart
pub fn acknowledge_win(state: &mut GameState) {
    if state.player.has_won() {
        log::info!("Win acknowledged, restarting");
    }
    state.player.acknowledge_win();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::Enemy;
    use crate::sim::player::PLAYER_START;
    use glam::Vec2;

    /// Frame delta at 60 fps
    const DT: f32 = 1.0 / 60.0;

    fn press(state: &mut GameState, keys: &[&str]) -> Vec<GameEvent> {
        keys.iter().filter_map(|k| handle_key(state, k)).collect()
    }

    #[test]
    fn test_enemies_advance() {
        let mut state = GameState::new(1);
        let before: Vec<f32> = state.enemies.iter().map(|e| e.x()).collect();

        let events = update_all(&mut state, 0.5);
        assert!(events.is_empty());
        assert_eq!(state.frames, 1);

        for (enemy, x) in state.enemies.iter().zip(before) {
            assert_eq!(enemy.x(), x + enemy.speed() * 0.5);
        }
    }

    #[test]
    fn test_wrap_reports_event() {
        let mut state = GameState::new(3);
        let events = update_all(&mut state, 2.5);

        // Only the bottom bug (300 px/s) runs off the end in 2.5 s
        assert_eq!(events.len(), 1);
        match events[0] {
            GameEvent::EnemyWrapped { index, speed } => {
                assert_eq!(index, 2);
                assert_eq!(state.enemies[2].x(), ENEMY_START_X);
                assert_eq!(state.enemies[2].speed(), speed);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_collision_sends_player_home() {
        let mut state = GameState::new(1);
        press(&mut state, &["ArrowUp", "ArrowUp"]);
        assert_eq!(state.player.pos(), Vec2::new(202.0, LANE_BOTTOM_Y));

        state.enemies[2] = Enemy::new(195.0, LANE_BOTTOM_Y - ENEMY_Y_ADJUST, 0.0);
        let events = update_all(&mut state, DT);

        assert_eq!(events, vec![GameEvent::PlayerHit { index: 2 }]);
        assert_eq!(state.player.pos(), PLAYER_START);
    }

    #[test]
    fn test_enemy_on_other_lane_misses() {
        let mut state = GameState::new(1);
        press(&mut state, &["ArrowUp", "ArrowUp", "ArrowUp"]);
        assert_eq!(state.player.y(), LANE_MIDDLE_Y);

        state.enemies[2] = Enemy::new(202.0, LANE_BOTTOM_Y - ENEMY_Y_ADJUST, 0.0);
        assert!(update_all(&mut state, DT).is_empty());
        assert_eq!(state.player.y(), LANE_MIDDLE_Y);
    }

    #[test]
    fn test_win_flow() {
        let mut state = GameState::new(1);

        let events = press(&mut state, &["ArrowUp"; 5]);
        assert_eq!(events, vec![GameEvent::PlayerWon]);
        assert!(state.player.has_won());

        // Frozen until acknowledged
        assert!(press(&mut state, &["ArrowDown", "ArrowLeft"]).is_empty());
        assert_eq!(state.player.y(), LANE_TOP_Y - STEP_Y);

        acknowledge_win(&mut state);
        assert!(!state.player.has_won());
        assert_eq!(state.player.pos(), PLAYER_START);

        acknowledge_win(&mut state);
        assert_eq!(state.player.pos(), PLAYER_START);

        press(&mut state, &["ArrowRight"]);
        assert_eq!(state.player.pos(), Vec2::new(303.0, 404.0));
    }

    #[test]
    fn test_unmapped_keys_dropped() {
        let mut state = GameState::new(1);
        assert!(press(&mut state, &["a", "Enter", "Escape"]).is_empty());
        assert_eq!(state.player.pos(), PLAYER_START);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        for frame in 0..2000 {
            if frame % 45 == 0 {
                handle_input(&mut state1, Direction::Up);
                handle_input(&mut state2, Direction::Up);
            }
            let e1 = update_all(&mut state1, DT);
            let e2 = update_all(&mut state2, DT);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.enemies, state2.enemies);
        assert_eq!(state1.player, state2.player);
    }
}
