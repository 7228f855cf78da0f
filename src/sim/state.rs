//! Game state: every entity plus the seeded RNG
//!
//! The host owns one `GameState` and hands it to the frame step by `&mut`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, Lane};
use super::player::Player;
use crate::consts::ENEMY_INITIAL_SPEEDS;
use crate::settings::{CharacterSkin, Settings};

/// Something the host may want to react to, produced by the frame step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player reached the top row; show the win notification
    PlayerWon,
    /// Enemy `index` caught the player, who went back to the start
    PlayerHit { index: usize },
    /// Enemy `index` left the board and restarted with `speed`
    EnemyWrapped { index: usize, speed: f32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Speed draws for wrapping enemies
    pub rng: Pcg32,
    /// One enemy per lane, top to bottom
    pub enemies: Vec<Enemy>,
    pub player: Player,
    /// Frames stepped so far
    pub frames: u64,
}

impl GameState {
    /// Create a new game state with the given seed and the default skin
    pub fn new(seed: u64) -> Self {
        Self::with_skin(seed, CharacterSkin::default())
    }

    pub fn with_skin(seed: u64, skin: CharacterSkin) -> Self {
        let enemies = Lane::ALL
            .iter()
            .zip(ENEMY_INITIAL_SPEEDS)
            .map(|(&lane, speed)| Enemy::on_lane(lane, speed))
            .collect();

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            enemies,
            player: Player::new(skin),
            frames: 0,
        }
    }

    /// Build from settings, using `fallback_seed` when none is configured
    pub fn from_settings(settings: &Settings, fallback_seed: u64) -> Self {
        Self::with_skin(settings.seed_or(fallback_seed), settings.skin)
    }
}
