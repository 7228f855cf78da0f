//! Bug Crossing - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (enemies, player, collisions, frame step)
//! - `input`: Key name to direction mapping
//! - `renderer`: Draw-target abstraction and fixed-order rendering
//! - `settings`: Player-selectable configuration

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use input::Direction;
pub use settings::{CharacterSkin, Settings};

/// Board layout and tuning constants
pub mod consts {
    /// Board grid
    pub const NUM_COLS: u32 = 5;
    pub const NUM_ROWS: u32 = 6;
    pub const CELL_WIDTH: f32 = 101.0;
    pub const CELL_HEIGHT: f32 = 83.0;
    pub const CANVAS_WIDTH: u32 = 505;
    pub const CANVAS_HEIGHT: u32 = 606;

    /// Character artwork size (shared by enemies and player)
    pub const SPRITE_WIDTH: f32 = 101.0;
    pub const SPRITE_HEIGHT: f32 = 171.0;

    /// Stone lanes the enemies travel along (player row y-coordinates)
    pub const LANE_TOP_Y: f32 = 72.0;
    pub const LANE_MIDDLE_Y: f32 = 155.0;
    pub const LANE_BOTTOM_Y: f32 = 238.0;

    /// Enemies are drawn this much higher than the lane to sit on the stones
    pub const ENEMY_Y_ADJUST: f32 = 12.0;
    pub const ENEMY_START_X: f32 = -101.0;
    pub const ENEMY_END_X: f32 = 505.0;
    /// Inclusive speed range (pixels/s) drawn on every wrap
    pub const ENEMY_MIN_SPEED: u32 = 80;
    pub const ENEMY_MAX_SPEED: u32 = 400;
    /// First-pass speeds for the top, middle and bottom lanes
    pub const ENEMY_INITIAL_SPEEDS: [f32; 3] = [200.0, 100.0, 300.0];

    /// Fraction of the sprite width inside which an enemy touches the player
    pub const COLLISION_WIDTH_FACTOR: f32 = 0.7;

    /// Player grid movement
    pub const PLAYER_START_X: f32 = 202.0;
    pub const PLAYER_START_Y: f32 = 404.0;
    pub const PLAYER_MIN_X: f32 = 0.0;
    pub const PLAYER_MIN_Y: f32 = 0.0;
    pub const PLAYER_MAX_X: f32 = 404.0;
    pub const PLAYER_MAX_Y: f32 = 404.0;
    pub const STEP_X: f32 = 101.0;
    pub const STEP_Y: f32 = 83.0;

    /// Largest frame delta the host feeds the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
