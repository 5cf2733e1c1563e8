//! Data-driven game balance
//!
//! Every gameplay number lives here so a front end can load a JSON override
//! without recompiling. Missing fields fall back to the defaults.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SIM_DT;

/// Reasons a tuning file can be rejected
#[derive(Debug)]
pub enum TuningError {
    /// The JSON could not be parsed into `Tuning`
    Parse(serde_json::Error),
    /// A value parsed but is outside its valid range
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "failed to parse tuning: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning field `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Player ===
    pub player_radius: f32,

    // === Projectiles ===
    pub projectile_radius: f32,
    /// Distance travelled per tick
    pub projectile_speed: f32,

    // === Enemies ===
    /// Inclusive lower bound of spawn radius
    pub enemy_min_spawn_radius: f32,
    /// Exclusive upper bound of spawn radius
    pub enemy_max_spawn_radius: f32,
    /// Radius lost per survived hit
    pub enemy_shrink_step: f32,
    /// A hit enemy survives only if its shrunk radius stays above this
    pub enemy_min_radius: f32,
    /// Seconds between spawns
    pub spawn_interval_secs: f32,

    // === Collisions ===
    /// Circles closer than this gap count as touching
    pub collision_epsilon: f32,

    // === Scoring ===
    pub score_shrink: u64,
    pub score_destroy: u64,
    pub score_wasted_penalty: u64,

    // === Particles ===
    /// Per-tick velocity damping
    pub particle_friction: f32,
    /// Alpha lost per tick
    pub particle_fade: f32,
    /// Exclusive upper bound of particle radius
    pub particle_max_radius: f32,
    /// Scale of the burst velocity distribution
    pub particle_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: crate::consts::DEFAULT_CANVAS_WIDTH,
            canvas_height: crate::consts::DEFAULT_CANVAS_HEIGHT,

            player_radius: 10.0,

            projectile_radius: 5.0,
            projectile_speed: 5.0,

            enemy_min_spawn_radius: 7.0,
            enemy_max_spawn_radius: 30.0,
            enemy_shrink_step: 10.0,
            enemy_min_radius: 7.0,
            spawn_interval_secs: 1.0,

            collision_epsilon: 1.0,

            score_shrink: 100,
            score_destroy: 250,
            score_wasted_penalty: 200,

            particle_friction: 0.98,
            particle_fade: 0.02,
            particle_max_radius: 2.0,
            particle_speed: 8.0,
        }
    }
}

impl Tuning {
    /// Default tuning on a canvas of the given size
    pub fn with_canvas(width: f32, height: f32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Center of the canvas (player position and enemy aim point)
    pub fn canvas_center(&self) -> Vec2 {
        Vec2::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    /// Check every range the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }

        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        positive("player_radius", self.player_radius)?;
        positive("projectile_radius", self.projectile_radius)?;
        positive("projectile_speed", self.projectile_speed)?;
        positive("enemy_min_spawn_radius", self.enemy_min_spawn_radius)?;
        positive("enemy_max_spawn_radius", self.enemy_max_spawn_radius)?;
        positive("enemy_shrink_step", self.enemy_shrink_step)?;
        positive("enemy_min_radius", self.enemy_min_radius)?;
        positive("spawn_interval_secs", self.spawn_interval_secs)?;
        positive("particle_fade", self.particle_fade)?;
        positive("particle_max_radius", self.particle_max_radius)?;

        // At most one spawn per tick
        if self.spawn_interval_secs < SIM_DT {
            return Err(TuningError::Invalid {
                field: "spawn_interval_secs",
                reason: "must be at least one tick long",
            });
        }
        if self.enemy_max_spawn_radius <= self.enemy_min_spawn_radius {
            return Err(TuningError::Invalid {
                field: "enemy_max_spawn_radius",
                reason: "must exceed enemy_min_spawn_radius",
            });
        }
        if !(self.particle_friction > 0.0 && self.particle_friction < 1.0) {
            return Err(TuningError::Invalid {
                field: "particle_friction",
                reason: "must be in (0, 1)",
            });
        }
        if !self.collision_epsilon.is_finite() || self.collision_epsilon < 0.0 {
            return Err(TuningError::Invalid {
                field: "collision_epsilon",
                reason: "must be a non-negative finite number",
            });
        }
        if !self.particle_speed.is_finite() || self.particle_speed < 0.0 {
            return Err(TuningError::Invalid {
                field: "particle_speed",
                reason: "must be a non-negative finite number",
            });
        }
        Ok(())
    }
}
