//! Sprite sheet atlas
//!
//! Source rectangles inside `image/sprite.png`.

use glam::Vec2;

use crate::consts::*;
use crate::sim::state::ANIMATION_LEN;

/// Path of the sprite sheet, relative to the page
pub const SPRITE_SHEET: &str = "image/sprite.png";

/// A source rectangle on the sprite sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl SpriteRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }
}

/// Buildings and clouds
pub const BACKGROUND: SpriteRect = SpriteRect::new(0.0, 0.0, BG_WIDTH, BG_HEIGHT);

/// Yellow ground strip
pub const FOREGROUND: SpriteRect = SpriteRect::new(276.0, 0.0, FG_WIDTH, FG_HEIGHT);

/// Wing cycle: up, middle, down, middle
pub const BIRD_FRAMES: [SpriteRect; ANIMATION_LEN] = [
    SpriteRect::new(276.0, 112.0, BIRD_WIDTH, BIRD_HEIGHT),
    SpriteRect::new(276.0, 139.0, BIRD_WIDTH, BIRD_HEIGHT),
    SpriteRect::new(276.0, 164.0, BIRD_WIDTH, BIRD_HEIGHT),
    SpriteRect::new(276.0, 139.0, BIRD_WIDTH, BIRD_HEIGHT),
];

pub const GET_READY: SpriteRect = SpriteRect::new(0.0, 228.0, 173.0, 152.0);

pub const GAME_OVER: SpriteRect = SpriteRect::new(175.0, 228.0, 225.0, 202.0);

/// Pipe hanging from the top (cap at the bottom)
pub const PIPE_TOP: SpriteRect = SpriteRect::new(553.0, 0.0, PIPE_WIDTH, PIPE_HEIGHT);

/// Pipe rising from the ground (cap at the top)
pub const PIPE_BOTTOM: SpriteRect = SpriteRect::new(502.0, 0.0, PIPE_WIDTH, PIPE_HEIGHT);
