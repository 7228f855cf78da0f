//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only
//! - Stable iteration order (enemies top lane to bottom lane)
//! - No platform dependencies; drawing goes through `renderer::Canvas`

pub mod collision;
pub mod enemy;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::enemy_touches_player;
pub use enemy::{ENEMY_SPRITE, Enemy, Lane};
pub use player::{PLAYER_START, Player};
pub use state::{GameEvent, GameState};
pub use tick::{acknowledge_win, handle_input, handle_key, update_all};
