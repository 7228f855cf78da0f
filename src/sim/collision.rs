//! Enemy/player contact test
//!
//! Horizontal overlap uses a band of 0.7 sprite widths either side of the
//! player. Vertically there is no band at all: the enemy must sit exactly on
//! the lane the player is standing on.

use glam::Vec2;

use crate::consts::*;

/// Half-width of the horizontal contact band
#[inline]
pub fn contact_half_width() -> f32 {
    SPRITE_WIDTH * COLLISION_WIDTH_FACTOR
}

/// True when an enemy at `enemy_pos` touches a player at `player_pos`.
///
/// The enemy x is floored before comparing; the lane check is an exact float
/// equality against the player's y shifted by the enemy draw adjustment.
pub fn enemy_touches_player(enemy_pos: Vec2, player_pos: Vec2) -> bool {
    let enemy_x = enemy_pos.x.floor();
    let band = contact_half_width();

    let past_left_edge = enemy_x > player_pos.x - band;
    let before_right_edge = enemy_x < player_pos.x + band;
    let same_lane = enemy_pos.y == player_pos.y - ENEMY_Y_ADJUST;

    past_left_edge && before_right_edge && same_lane
}
