//! Rendering module
//!
//! The scene is drawn by a stateless function onto anything implementing
//! `Surface`: the browser canvas in production, a command recorder in tests.

pub mod scene;
pub mod sprites;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

pub use scene::{draw, draw_fps};
pub use sprites::SpriteRect;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// Filled-and-outlined text settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// CSS font shorthand
    pub font: &'static str,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub line_width: f32,
    /// Canvas `textAlign` keyword ("start" or "center")
    pub align: &'static str,
}

/// A 2D drawing target that blits from the sprite sheet
pub trait Surface {
    /// Fill a rectangle with a CSS color
    fn fill_rect(&mut self, color: &str, pos: Vec2, size: Vec2);

    /// Copy a sprite unscaled with its top-left corner at `pos`
    fn draw_sprite(&mut self, sprite: SpriteRect, pos: Vec2);

    /// Copy a sprite unscaled, centered on `center` and rotated by `angle` radians
    fn draw_sprite_rotated(&mut self, sprite: SpriteRect, center: Vec2, angle: f32);

    /// Fill then stroke text anchored at `pos` (alphabetic baseline, `style.align`)
    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle);
}
