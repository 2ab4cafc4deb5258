//! Flappy Canvas - A Flappy Bird style side-scroller
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (bird physics, pipes, collisions, game phase)
//! - `renderer`: Stateless scene drawing onto a 2D `Surface`
//! - `platform`: Browser/native platform abstraction (storage, input mapping)
//! - `highscores`: Persisted best score
//! - `settings`: User preferences

pub mod audio;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield size (matches the canvas element)
    pub const CANVAS_WIDTH: f32 = 320.0;
    pub const CANVAS_HEIGHT: f32 = 480.0;

    pub const SKY_COLOR: &str = "#70c5ce";

    /// One degree in radians
    pub const DEGREE: f32 = std::f32::consts::PI / 180.0;

    /// Bird defaults
    pub const BIRD_X: f32 = 50.0;
    /// Resting center y while waiting for the first tap
    pub const BIRD_REST_Y: f32 = 150.0;
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 26.0;
    /// Collision radius (smaller than the sprite, forgives the wing tips)
    pub const BIRD_RADIUS: f32 = 12.0;

    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 0.25;
    /// Flap impulse; a flap sets the speed to `-JUMP`
    pub const JUMP: f32 = 4.6;
    pub const ROTATION_RISING: f32 = -25.0 * DEGREE;
    pub const ROTATION_FALLING: f32 = 90.0 * DEGREE;

    /// Frames per animation step
    pub const FLAP_PERIOD_READY: u64 = 10;
    pub const FLAP_PERIOD_PLAYING: u64 = 5;
    /// Wing pose shown while diving
    pub const DIVE_FRAME: usize = 1;

    /// Background tile (static)
    pub const BG_WIDTH: f32 = 275.0;
    pub const BG_HEIGHT: f32 = 226.0;

    /// Foreground (ground) tile
    pub const FG_WIDTH: f32 = 224.0;
    pub const FG_HEIGHT: f32 = 112.0;
    pub const FG_SPEED: f32 = 2.0;
    /// Top edge of the ground strip
    pub const GROUND_Y: f32 = CANVAS_HEIGHT - FG_HEIGHT;

    /// Pipe geometry
    pub const PIPE_WIDTH: f32 = 53.0;
    pub const PIPE_HEIGHT: f32 = 400.0;
    /// Vertical gap between the top pipe's bottom and the bottom pipe's top
    pub const PIPE_GAP: f32 = 85.0;
    /// Spawn y is `PIPE_MAX_Y * (1 + r)` for r in [0, 1), i.e. (-300, -150]
    pub const PIPE_MAX_Y: f32 = -150.0;
    pub const PIPE_SPEED: f32 = 2.0;
    pub const PIPE_SPAWN_INTERVAL: u64 = 100;

    /// Restart button on the game over banner
    pub const RESTART_BUTTON_X: f32 = 120.0;
    pub const RESTART_BUTTON_Y: f32 = 263.0;
    pub const RESTART_BUTTON_W: f32 = 83.0;
    pub const RESTART_BUTTON_H: f32 = 29.0;
}
