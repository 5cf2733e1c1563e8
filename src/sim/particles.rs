//! Particle bursts and decay

use glam::Vec2;
use rand::Rng;

use super::state::{Hsl, Particle};
use crate::tuning::Tuning;

/// Number of particles a hit on an enemy of `enemy_radius` produces
#[inline]
pub fn burst_count(enemy_radius: f32) -> usize {
    (enemy_radius * 2.0).floor().max(0.0) as usize
}

/// Push a burst of sparks at `origin` in the enemy's color.
///
/// Each axis draws `(u1 - 0.5) * (u2 * speed)`, so speeds cluster near zero.
pub fn emit_burst<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    origin: Vec2,
    enemy_radius: f32,
    color: Hsl,
    tuning: &Tuning,
) {
    let count = burst_count(enemy_radius);
    particles.reserve(count);
    for _ in 0..count {
        let radius = rng.random::<f32>() * tuning.particle_max_radius;
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * (rng.random::<f32>() * tuning.particle_speed),
            (rng.random::<f32>() - 0.5) * (rng.random::<f32>() * tuning.particle_speed),
        );
        particles.push(Particle::new(origin, vel, radius, color));
    }
}

/// Drop faded particles and advance the rest by one tick
pub fn decay(particles: &mut Vec<Particle>, tuning: &Tuning) {
    particles.retain_mut(|particle| {
        if particle.is_faded() {
            return false;
        }
        particle.update(tuning.particle_friction, tuning.particle_fade);
        true
    });
}
