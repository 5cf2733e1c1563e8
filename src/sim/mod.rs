//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, velocities in distance-per-tick
//! - Seeded RNG only
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod particles;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod tween;

pub use collision::{circles_touch, fully_off_canvas, surface_gap};
pub use spawn::{SpawnTimer, spawn_enemy};
pub use state::{
    Enemy, EventQueue, GameEvent, GamePhase, GameState, Hsl, MAX_PENDING_EVENTS, Particle, Player,
    Projectile,
};
pub use tick::tick;
pub use tween::RadiusTween;
