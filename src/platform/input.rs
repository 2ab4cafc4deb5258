//! Pointer coordinate mapping

use glam::Vec2;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Convert a pointer position in client (CSS pixel) space into playfield space
///
/// `rect_origin`/`rect_size` are the canvas bounding client rect. The canvas
/// may be scaled by CSS, so the offset is rescaled to the 320x480 playfield.
pub fn client_to_playfield(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Vec2 {
    let offset = client - rect_origin;
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return offset;
    }
    offset * Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT) / rect_size
}
