//! Demo-mode player
//!
//! Keeps the bird bobbing just above the bottom edge of the next gap. Used by
//! the attract/idle mode in the browser and by the headless native runner.

use glam::Vec2;

use super::collision::{RESTART_BUTTON, ground_rest_y};
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Clearance kept between the bird's lower edge and the bottom pipe
const FLAP_MARGIN: f32 = 10.0;
/// Stand-in gap bottom when no pipe is ahead
const CRUISE_FLOOR: f32 = 260.0;

/// Decide whether to tap this frame
///
/// Returns the tap position in playfield coordinates, or None to hold.
pub fn decide(state: &GameState) -> Option<Vec2> {
    let bird = &state.bird;
    match state.phase {
        GamePhase::GetReady => Some(bird.pos),
        GamePhase::Playing => {
            let gap_bottom = state
                .pipes
                .iter()
                .find(|pipe| pipe.right() >= bird.pos.x - BIRD_RADIUS)
                .map(|pipe| pipe.bottom_y())
                .unwrap_or(CRUISE_FLOOR);

            (bird.pos.y + BIRD_RADIUS > gap_bottom - FLAP_MARGIN).then_some(bird.pos)
        }
        // Wait for the bird to land before pressing restart
        GamePhase::GameOver => (bird.pos.y >= ground_rest_y())
            .then(|| RESTART_BUTTON.min + RESTART_BUTTON.size / 2.0),
    }
}
