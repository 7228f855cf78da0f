//! Background tiles: water on top, three stone lanes, two rows of grass

use super::Canvas;
use crate::consts::*;

/// Tile image for each row, top to bottom
pub const BOARD_ROWS: [&str; NUM_ROWS as usize] = [
    "images/water-block.png",
    "images/stone-block.png",
    "images/stone-block.png",
    "images/stone-block.png",
    "images/grass-block.png",
    "images/grass-block.png",
];

/// Every image the game may ask the resource loader for
pub fn all_sprites() -> Vec<&'static str> {
    let mut sprites: Vec<&'static str> = BOARD_ROWS.to_vec();
    sprites.push(crate::sim::ENEMY_SPRITE);
    sprites.extend(crate::CharacterSkin::ALL.iter().map(|s| s.sprite()));
    sprites.sort_unstable();
    sprites.dedup();
    sprites
}

pub fn render_board<C: Canvas + ?Sized>(canvas: &mut C) {
    for (row, tile) in BOARD_ROWS.iter().enumerate() {
        for col in 0..NUM_COLS {
            canvas.draw_sprite(tile, col as f32 * CELL_WIDTH, row as f32 * CELL_HEIGHT);
        }
    }
}
