//! Collision tests for the bird
//!
//! Everything on the playfield is axis-aligned, so the bird is tested as the
//! bounding box of its collision circle against pipe rectangles and the
//! ground line.

use glam::Vec2;

use crate::consts::*;

/// Axis-aligned rectangle in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Inclusive point test (edges count as inside)
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }
}

/// The restart button drawn on the game over banner
pub const RESTART_BUTTON: Rect = Rect::new(
    RESTART_BUTTON_X,
    RESTART_BUTTON_Y,
    RESTART_BUTTON_W,
    RESTART_BUTTON_H,
);

/// Check whether a circle's bounding box overlaps a rectangle
///
/// Strict inequalities: touching edges is not a hit.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let max = rect.max();
    center.x + radius > rect.min.x
        && center.x - radius < max.x
        && center.y + radius > rect.min.y
        && center.y - radius < max.y
}

/// Check if the bird's lower edge has reached the ground strip
pub fn bird_ground_collision(center_y: f32) -> bool {
    center_y + BIRD_HEIGHT / 2.0 >= GROUND_Y
}

/// Center y of a bird sitting exactly on the ground
pub fn ground_rest_y() -> f32 {
    GROUND_Y - BIRD_HEIGHT / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_inclusive() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(rect.contains(Vec2::new(40.0, 60.0)));
        assert!(rect.contains(Vec2::new(25.0, 30.0)));
        assert!(!rect.contains(Vec2::new(9.9, 30.0)));
        assert!(!rect.contains(Vec2::new(25.0, 60.1)));
    }

    #[test]
    fn test_restart_button_bounds() {
        assert!(RESTART_BUTTON.contains(Vec2::new(120.0, 263.0)));
        assert!(RESTART_BUTTON.contains(Vec2::new(203.0, 292.0)));
        assert!(!RESTART_BUTTON.contains(Vec2::new(204.0, 280.0)));
        assert!(!RESTART_BUTTON.contains(Vec2::new(150.0, 262.0)));
    }

    #[test]
    fn test_circle_rect_overlap() {
        let pipe = Rect::new(100.0, 0.0, PIPE_WIDTH, 200.0);

        // Well clear to the left
        assert!(!circle_rect_overlap(Vec2::new(50.0, 100.0), 12.0, &pipe));
        // Bounding box just reaches into the pipe
        assert!(circle_rect_overlap(Vec2::new(89.0, 100.0), 12.0, &pipe));
        // Exactly touching the left edge does not count
        assert!(!circle_rect_overlap(Vec2::new(88.0, 100.0), 12.0, &pipe));
        // Below the pipe's bottom edge
        assert!(!circle_rect_overlap(Vec2::new(120.0, 212.0), 12.0, &pipe));
        assert!(circle_rect_overlap(Vec2::new(120.0, 211.0), 12.0, &pipe));
    }

    #[test]
    fn test_ground_collision() {
        assert_eq!(GROUND_Y, 368.0);
        assert_eq!(ground_rest_y(), 355.0);
        assert!(!bird_ground_collision(354.9));
        assert!(bird_ground_collision(355.0));
        assert!(bird_ground_collision(1000.0));
    }
}
