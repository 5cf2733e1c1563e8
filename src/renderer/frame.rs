//! Per-frame draw list
//!
//! Flattens the game state into circles in draw order so any front end
//! (canvas, wgpu, terminal) only has to fill circles.

use super::instance::{CircleInstance, colors};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState};

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Translucent fill drawn over the previous frame before the circles
    pub overlay: [f32; 4],
    /// Player, particles, projectiles, enemies (back to front)
    pub circles: Vec<CircleInstance>,
    pub score: u64,
    /// Show the final score and restart button
    pub game_over: bool,
}

impl RenderFrame {
    pub fn build(state: &GameState, settings: &Settings) -> Self {
        let particle_budget = settings.max_particles();
        let mut circles = Vec::with_capacity(
            1 + state.projectiles.len()
                + state.enemies.len()
                + state.particles.len().min(particle_budget),
        );

        circles.push(CircleInstance::new(
            state.player.pos,
            state.player.radius,
            colors::PLAYER,
        ));

        circles.extend(
            state
                .particles
                .iter()
                .filter(|p| p.alpha > 0.0)
                .take(particle_budget)
                .map(|p| CircleInstance::new(p.pos, p.radius, p.color.to_rgba(p.alpha.min(1.0)))),
        );

        circles.extend(
            state
                .projectiles
                .iter()
                .map(|p| CircleInstance::new(p.pos, p.radius, colors::PROJECTILE)),
        );

        let eased = settings.effective_eased_shrink();
        circles.extend(state.enemies.iter().map(|e| {
            let radius = if eased { e.display_radius } else { e.radius };
            CircleInstance::new(e.pos, radius, e.color.to_rgba(1.0))
        }));

        let mut overlay = colors::BACKGROUND;
        overlay[3] = settings.effective_trail_alpha();

        Self {
            overlay,
            circles,
            score: state.score,
            game_over: state.phase == GamePhase::Terminal,
        }
    }

    /// Raw bytes for uploading `circles` as an instance buffer
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.circles)
    }
}
