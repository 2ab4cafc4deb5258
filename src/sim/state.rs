//! Game state and core simulation types
//!
//! One `GameState` holds everything the frame loop mutates. Input handlers and
//! the tick both take it by `&mut`, so there is exactly one writer at a time.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Bird hovers at rest, waiting for the first tap
    #[default]
    GetReady,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for the restart button
    GameOver,
}

/// Things that happened during a tick that the frontend reacts to
/// (sounds, persisting the best score, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// GetReady -> Playing
    Started,
    /// Bird flapped
    Flapped,
    /// A pipe pair was passed
    Scored { value: u32, best: u32 },
    /// Bird hit a pipe (Playing -> GameOver)
    HitPipe,
    /// Bird hit the ground while playing (Playing -> GameOver)
    HitGround,
    /// GameOver -> GetReady
    Restarted,
}

/// Number of entries in the wing animation cycle
pub const ANIMATION_LEN: usize = 4;

/// The player's bird
#[derive(Debug, Clone)]
pub struct Bird {
    /// Center of the sprite
    pub pos: Vec2,
    /// Vertical speed (pixels/frame, positive is down)
    pub speed: f32,
    /// Sprite rotation (radians, clockwise)
    pub rotation: f32,
    /// Index into the wing animation cycle
    pub frame: usize,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BIRD_X, BIRD_REST_Y),
            speed: 0.0,
            rotation: 0.0,
            frame: 0,
        }
    }
}

impl Bird {
    pub fn flap(&mut self) {
        self.speed = -JUMP;
    }

    pub fn reset_speed(&mut self) {
        self.speed = 0.0;
    }

    /// True once the bird is falling at least as fast as a flap lifts it
    pub fn is_diving(&self) -> bool {
        self.speed >= JUMP
    }

    /// Top edge of the collision circle
    pub fn top(&self) -> f32 {
        self.pos.y - BIRD_RADIUS
    }

    /// Advance the wing animation one step every `period` frames
    pub fn animate(&mut self, frames: u64, period: u64) {
        if frames % period == 0 {
            self.frame += 1;
        }
        self.frame %= ANIMATION_LEN;
    }
}

/// Sprite rotation for a given vertical speed
///
/// Two buckets: nose up while rising or gently falling, nose down once diving.
pub fn rotation_for_speed(speed: f32) -> f32 {
    if speed >= JUMP {
        ROTATION_FALLING
    } else {
        ROTATION_RISING
    }
}

/// A top+bottom pipe pair sharing an x position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Top edge of the top pipe (always negative, the sprite runs off-screen)
    pub y: f32,
}

impl Pipe {
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, self.y, PIPE_WIDTH, PIPE_HEIGHT)
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x, self.bottom_y(), PIPE_WIDTH, PIPE_HEIGHT)
    }

    /// Top edge of the bottom pipe
    pub fn bottom_y(&self) -> f32 {
        self.y + PIPE_HEIGHT + PIPE_GAP
    }

    pub fn right(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Fully scrolled past the left edge of the playfield
    pub fn is_offscreen(&self) -> bool {
        self.right() <= 0.0
    }
}

/// Scrolling ground strip
#[derive(Debug, Clone, Default)]
pub struct Foreground {
    /// Horizontal offset, in (-FG_WIDTH / 2, 0]
    pub x: f32,
}

impl Foreground {
    pub fn scroll(&mut self) {
        // `%` truncates toward zero, so the offset runs 0, -2, ..., -110, 0
        self.x = (self.x - FG_SPEED) % (FG_WIDTH / 2.0);
    }
}

/// Current run score and best score ever
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
    pub best: u32,
}

impl Score {
    pub fn new(best: u32) -> Self {
        Self { value: 0, best }
    }

    /// Count one passed pipe; best never decreases
    pub fn record_point(&mut self) {
        self.value += 1;
        self.best = self.best.max(self.value);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Frames simulated since the session started (never reset)
    pub frames: u64,
    pub phase: GamePhase,
    pub bird: Bird,
    /// Oldest first; pipes scroll in creation order
    pub pipes: VecDeque<Pipe>,
    pub foreground: Foreground,
    pub score: Score,
    /// Events emitted during the most recent tick/tap, drained by the frontend
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new session with the given seed and previously stored best score
    pub fn new(seed: u64, best: u32) -> Self {
        Self {
            seed,
            frames: 0,
            phase: GamePhase::GetReady,
            bird: Bird::default(),
            pipes: VecDeque::new(),
            foreground: Foreground::default(),
            score: Score::new(best),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Take the pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Back to GetReady for another run (best score is kept)
    pub fn restart(&mut self) {
        self.pipes.clear();
        self.bird.reset_speed();
        self.score.reset();
        self.phase = GamePhase::GetReady;
    }
}
