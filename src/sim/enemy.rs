//! Enemy bugs crossing the stone lanes

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::enemy_touches_player;
use crate::consts::*;
use crate::renderer::Canvas;

/// Enemy artwork
pub const ENEMY_SPRITE: &str = "images/enemy-bug.png";

/// Stone lanes, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lane {
    Top,
    Middle,
    Bottom,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Top, Lane::Middle, Lane::Bottom];

    /// Player row y-coordinate of this lane
    pub fn y(&self) -> f32 {
        match self {
            Lane::Top => LANE_TOP_Y,
            Lane::Middle => LANE_MIDDLE_Y,
            Lane::Bottom => LANE_BOTTOM_Y,
        }
    }

    /// y-coordinate an enemy on this lane is drawn at
    pub fn enemy_y(&self) -> f32 {
        self.y() - ENEMY_Y_ADJUST
    }
}

/// An enemy entity. Its y never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pos: Vec2,
    speed: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            speed,
        }
    }

    /// Enemy at the start of the track on `lane`
    pub fn on_lane(lane: Lane, speed: f32) -> Self {
        Self::new(ENEMY_START_X, lane.enemy_y(), speed)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Current speed in pixels per second
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Advance by `speed * dt`.
    ///
    /// Once past the end of the track the enemy goes back to the start with a
    /// new speed drawn from `rng`. Returns true when that wrap happened.
    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) -> bool {
        self.pos.x += self.speed * dt;

        if self.pos.x > ENEMY_END_X {
            self.pos.x = ENEMY_START_X;
            self.speed = rng.random_range(ENEMY_MIN_SPEED..=ENEMY_MAX_SPEED) as f32;
            return true;
        }
        false
    }

    /// Whether this enemy touches a player standing at (`player_x`, `player_y`)
    pub fn check_collision(&self, player_x: f32, player_y: f32) -> bool {
        enemy_touches_player(self.pos, Vec2::new(player_x, player_y))
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_sprite(ENEMY_SPRITE, self.pos.x, self.pos.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingCanvas;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_lane_heights() {
        assert_eq!(Lane::Top.enemy_y(), 60.0);
        assert_eq!(Lane::Middle.enemy_y(), 143.0);
        assert_eq!(Lane::Bottom.enemy_y(), 226.0);
    }

    #[test]
    fn test_update_moves_by_speed_times_dt() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut enemy = Enemy::on_lane(Lane::Top, 200.0);

        assert!(!enemy.update(0.5, &mut rng));
        assert_eq!(enemy.x(), -1.0);
        assert_eq!(enemy.speed(), 200.0);

        assert!(!enemy.update(0.0, &mut rng));
        assert_eq!(enemy.x(), -1.0);
    }

    #[test]
    fn test_wraps_past_end_with_new_speed() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut enemy = Enemy::new(500.0, Lane::Middle.enemy_y(), 10.0);

        // Exactly at the end is still on the track
        assert!(!enemy.update(0.5, &mut rng));
        assert_eq!(enemy.x(), ENEMY_END_X);

        assert!(enemy.update(0.5, &mut rng));
        assert_eq!(enemy.x(), ENEMY_START_X);
        assert_eq!(enemy.y(), Lane::Middle.enemy_y());
        let speed = enemy.speed();
        assert!((ENEMY_MIN_SPEED as f32..=ENEMY_MAX_SPEED as f32).contains(&speed));
        assert_eq!(speed.fract(), 0.0);
    }

    #[test]
    fn test_same_seed_same_speeds() {
        let mut rng1 = Pcg32::seed_from_u64(7);
        let mut rng2 = Pcg32::seed_from_u64(7);
        let mut a = Enemy::new(505.0, 60.0, 100.0);
        let mut b = a.clone();

        for _ in 0..20 {
            a.update(10.0, &mut rng1);
            b.update(10.0, &mut rng2);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_check_collision_uses_own_position() {
        let enemy = Enemy::new(250.0, LANE_MIDDLE_Y - ENEMY_Y_ADJUST, 100.0);
        assert!(enemy.check_collision(260.0, LANE_MIDDLE_Y));
        assert!(!enemy.check_collision(400.0, LANE_MIDDLE_Y));
        assert!(!enemy.check_collision(260.0, LANE_TOP_Y));
    }

    #[test]
    fn test_render_draws_bug_at_position() {
        let mut canvas = RecordingCanvas::default();
        Enemy::new(12.5, 60.0, 80.0).render(&mut canvas);
        assert_eq!(canvas.calls.len(), 1);
        assert_eq!(canvas.calls[0].sprite, ENEMY_SPRITE);
        assert_eq!((canvas.calls[0].x, canvas.calls[0].y), (12.5, 60.0));
    }

    proptest! {
        #[test]
        fn prop_update_law(
            x in ENEMY_START_X..=ENEMY_END_X,
            speed in ENEMY_MIN_SPEED..=ENEMY_MAX_SPEED,
            dt in 0.0f32..1.0,
            seed in any::<u64>(),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let lane_y = Lane::Bottom.enemy_y();
            let mut enemy = Enemy::new(x, lane_y, speed as f32);
            let expected = x + speed as f32 * dt;

            let wrapped = enemy.update(dt, &mut rng);

            prop_assert_eq!(enemy.y(), lane_y);
            if expected > ENEMY_END_X {
                prop_assert!(wrapped);
                prop_assert_eq!(enemy.x(), ENEMY_START_X);
                prop_assert!(enemy.speed() >= ENEMY_MIN_SPEED as f32);
                prop_assert!(enemy.speed() <= ENEMY_MAX_SPEED as f32);
            } else {
                prop_assert!(!wrapped);
                prop_assert_eq!(enemy.x(), expected);
                prop_assert_eq!(enemy.speed(), speed as f32);
            }
        }
    }
}
