//! Canvas that records draw calls instead of drawing
//!
//! Used by tests and by the headless native build.

use serde::{Deserialize, Serialize};

use super::Canvas;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCall {
    pub sprite: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded calls (start of a new frame)
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw_sprite(&mut self, sprite: &str, x: f32, y: f32) {
        log::trace!("draw {} at ({}, {})", sprite, x, y);
        self.calls.push(DrawCall {
            sprite: sprite.to_string(),
            x,
            y,
        });
    }
}
