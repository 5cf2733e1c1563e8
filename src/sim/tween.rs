//! Cosmetic radius easing for shrunk enemies
//!
//! Collision math never reads the tween; it only drives `Enemy::display_radius`.

use crate::consts::SHRINK_EASE_SECS;

/// Ease-out interpolation between two radii
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusTween {
    pub from: f32,
    pub to: f32,
    pub elapsed: f32,
    pub duration: f32,
}

impl RadiusTween {
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: SHRINK_EASE_SECS,
        }
    }

    /// Step forward by `dt` seconds and return the current radius
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> f32 {
        let t = if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.from + (self.to - self.from) * ease_out_quad(t)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Quadratic ease-out: fast start, gentle landing
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
