//! Collision tests for circles and the canvas rectangle
//!
//! Everything in the game is a circle, so contact is a gap check: the
//! distance between centers minus both radii. A small epsilon absorbs the
//! per-tick step so fast movers don't slip past each other.

use glam::Vec2;

use crate::distance;

/// Gap between two circle surfaces (negative when overlapping)
#[inline]
pub fn surface_gap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> f32 {
    distance(a_pos, b_pos) - a_radius - b_radius
}

/// Check whether two circles touch, within `epsilon`
#[inline]
pub fn circles_touch(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32, epsilon: f32) -> bool {
    surface_gap(a_pos, a_radius, b_pos, b_radius) < epsilon
}

/// Check whether a circle is entirely outside the `[0, width] x [0, height]` canvas
pub fn fully_off_canvas(pos: Vec2, radius: f32, width: f32, height: f32) -> bool {
    pos.x + radius < 0.0
        || pos.x - radius > width
        || pos.y + radius < 0.0
        || pos.y - radius > height
}
