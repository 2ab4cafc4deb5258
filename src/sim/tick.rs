//! Per-frame simulation tick
//!
//! Core game loop step: apply the buffered tap, then update the bird,
//! the ground and the pipes, in that order.

use glam::Vec2;
use rand::Rng;

use super::autopilot;
use super::collision::{RESTART_BUTTON, bird_ground_collision, circle_rect_overlap, ground_rest_y};
use super::state::{GameEvent, GamePhase, GameState, Pipe, rotation_for_speed};
use crate::consts::*;

/// Input buffered between frames
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Click/tap/key press since the last frame
    pub tap: bool,
    /// Where the tap landed, in playfield coordinates (None for keyboard taps)
    pub tap_pos: Option<Vec2>,
    /// Demo mode - the autopilot taps instead of the player
    pub autopilot: bool,
}

impl TickInput {
    /// Clear one-shot inputs after they have been applied
    pub fn consume_tap(&mut self) {
        self.tap = false;
        self.tap_pos = None;
    }
}

/// Apply a single tap to the state machine
pub fn handle_tap(state: &mut GameState, pos: Option<Vec2>) {
    match state.phase {
        GamePhase::GetReady => {
            state.phase = GamePhase::Playing;
            state.events.push(GameEvent::Started);
        }
        GamePhase::Playing => {
            // Already pressed against the top of the playfield
            if state.bird.top() <= 0.0 {
                return;
            }
            state.bird.flap();
            state.events.push(GameEvent::Flapped);
        }
        GamePhase::GameOver => {
            if pos.is_some_and(|p| RESTART_BUTTON.contains(p)) {
                state.restart();
                state.events.push(GameEvent::Restarted);
            }
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if input.autopilot {
        if let Some(pos) = autopilot::decide(state) {
            handle_tap(state, Some(pos));
        }
    } else if input.tap {
        handle_tap(state, input.tap_pos);
    }

    update_bird(state);
    if state.phase == GamePhase::Playing {
        state.foreground.scroll();
    }
    update_pipes(state);

    state.frames += 1;
}

fn update_bird(state: &mut GameState) {
    let period = if state.phase == GamePhase::GetReady {
        FLAP_PERIOD_READY
    } else {
        FLAP_PERIOD_PLAYING
    };
    let bird = &mut state.bird;
    bird.animate(state.frames, period);

    if state.phase == GamePhase::GetReady {
        bird.pos.y = BIRD_REST_Y;
        bird.rotation = 0.0;
        return;
    }

    bird.speed += GRAVITY;
    bird.pos.y += bird.speed;

    if bird_ground_collision(bird.pos.y) {
        bird.pos.y = ground_rest_y();
        if state.phase == GamePhase::Playing {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::HitGround);
        }
    }

    bird.rotation = rotation_for_speed(bird.speed);
    if bird.is_diving() {
        bird.frame = DIVE_FRAME;
    }
}

fn update_pipes(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    if state.frames % PIPE_SPAWN_INTERVAL == 0 {
        spawn_pipe(state);
    }

    let center = state.bird.pos;
    let hit = state.pipes.iter().any(|pipe| {
        circle_rect_overlap(center, BIRD_RADIUS, &pipe.top_rect())
            || circle_rect_overlap(center, BIRD_RADIUS, &pipe.bottom_rect())
    });
    if hit {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::HitPipe);
        return;
    }

    for pipe in state.pipes.iter_mut() {
        pipe.x -= PIPE_SPEED;
    }

    // Pipes scroll at one speed, so the oldest always leaves first
    while state.pipes.front().is_some_and(Pipe::is_offscreen) {
        state.pipes.pop_front();
        state.score.record_point();
        state.events.push(GameEvent::Scored {
            value: state.score.value,
            best: state.score.best,
        });
    }
}

/// Append a pipe pair at the right edge with a random vertical offset
pub fn spawn_pipe(state: &mut GameState) {
    let r: f32 = state.rng.random();
    state.pipes.push_back(Pipe {
        x: CANVAS_WIDTH,
        y: PIPE_MAX_Y * (r + 1.0),
    });
}
