//! Radial Blaster - a 2D arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, tick)
//! - `session`: Session controller owning all mutable game state
//! - `renderer`: Flattens state into circle instances for any front end
//! - `settings`: Presentation preferences
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use settings::{QualityPreset, Settings};
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Target display refresh rate; one tick per frame
    pub const FRAME_RATE: f32 = 60.0;
    /// Nominal duration of one tick in seconds
    pub const SIM_DT: f32 = 1.0 / FRAME_RATE;
    /// Largest elapsed time a single frame may feed the spawn timer
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Duration of the cosmetic shrink animation (seconds)
    pub const SHRINK_EASE_SECS: f32 = 0.5;

    /// Default canvas dimensions
    pub const DEFAULT_CANVAS_WIDTH: f32 = 800.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;
}

/// Angle (radians) of the vector pointing from `from` to `to`
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Unit vector for an angle
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
