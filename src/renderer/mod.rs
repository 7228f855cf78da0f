//! Rendering module
//!
//! The simulation draws through the `Canvas` trait; the host supplies the
//! actual 2D context and image lookup. Draw order each frame is the board,
//! then every enemy, then the player.

pub mod board;
pub mod recording;

pub use board::{BOARD_ROWS, all_sprites, render_board};
pub use recording::{DrawCall, RecordingCanvas};

use crate::sim::GameState;

/// A surface sprites can be drawn on
pub trait Canvas {
    /// Draw the image at `sprite` (a resource path) with its top-left at (x, y)
    fn draw_sprite(&mut self, sprite: &str, x: f32, y: f32);
}

/// Draw every entity: enemies in lane order, then the player on top
pub fn render_all<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    for enemy in &state.enemies {
        enemy.render(canvas);
    }
    state.player.render(canvas);
}

/// Board then entities
pub fn render_frame<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    render_board(canvas);
    render_all(state, canvas);
}
