//! Simulation module
//!
//! All gameplay logic lives here. One call to `tick` is one animation frame:
//! - Frame-counted timing only (no wall clock)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{RESTART_BUTTON, Rect, circle_rect_overlap};
pub use state::{Bird, Foreground, GameEvent, GamePhase, GameState, Pipe, Score};
pub use tick::{TickInput, handle_tap, tick};
