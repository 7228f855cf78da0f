//! The player: one grid step per key press, wins on reaching the water
//!
//! States are Playing and Won. Reaching the top row after a move switches to
//! Won and all input is ignored until the host calls `acknowledge_win`.
//!
//! Steps are taken from the start cell, so the rows are 404, 321, 238, 155,
//! 72 and -11. The top row is anything at or above `PLAYER_MIN_Y`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::input::Direction;
use crate::renderer::Canvas;
use crate::settings::CharacterSkin;

/// Start cell, bottom row middle column
pub const PLAYER_START: Vec2 = Vec2::new(PLAYER_START_X, PLAYER_START_Y);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pos: Vec2,
    won: bool,
    pub skin: CharacterSkin,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(CharacterSkin::default())
    }
}

impl Player {
    pub fn new(skin: CharacterSkin) -> Self {
        Self {
            pos: PLAYER_START,
            won: false,
            skin,
        }
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

    #[inline]
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Move one step in `direction` if that stays on the board.
    ///
    /// Returns true only on the move that takes the player into the Won
    /// state; the host uses it to show the win notification.
    pub fn handle_input(&mut self, direction: Direction) -> bool {
        if self.won {
            return false;
        }

        match direction {
            Direction::Left if self.pos.x > PLAYER_MIN_X => self.pos.x -= STEP_X,
            Direction::Right if self.pos.x < PLAYER_MAX_X => self.pos.x += STEP_X,
            Direction::Up if self.pos.y > PLAYER_MIN_Y => self.pos.y -= STEP_Y,
            Direction::Down if self.pos.y < PLAYER_MAX_Y => self.pos.y += STEP_Y,
            _ => {}
        }

        if self.pos.y <= PLAYER_MIN_Y {
            self.won = true;
            return true;
        }
        false
    }

    /// Back to the start cell. Leaves the win flag alone.
    pub fn reset(&mut self) {
        self.pos = PLAYER_START;
    }

    /// Dismiss a win and start over from the start cell
    pub fn acknowledge_win(&mut self) {
        self.won = false;
        self.reset();
    }

    pub fn sprite(&self) -> &'static str {
        self.skin.sprite()
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_sprite(self.sprite(), self.pos.x, self.pos.y);
    }
}
