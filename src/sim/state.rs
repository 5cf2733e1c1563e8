//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`. Entities are plain
//! records; none of them hold a reference back to the state or to each other.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::tween::RadiusTween;
use crate::tuning::Tuning;
use crate::{angle_to, direction};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks run, enemies spawn, clicks fire
    Running,
    /// Player was hit; frozen until restart
    Terminal,
}

/// HSL color as produced by the spawner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Degrees in [0, 360)
    pub hue: f32,
    /// 0-1
    pub saturation: f32,
    /// 0-1
    pub lightness: f32,
}

impl Hsl {
    pub const WHITE: Hsl = Hsl::new(0.0, 0.0, 1.0);

    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to sRGB-encoded RGBA (components 0-1, no gamma linearization)
    pub fn to_rgba(&self, alpha: f32) -> [f32; 4] {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * self.lightness - 1.0).abs()) * self.saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = self.lightness - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        [r + m, g + m, b + m, alpha]
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsl({:.0}, {:.0}%, {:.0}%)",
            self.hue,
            self.saturation * 100.0,
            self.lightness * 100.0
        )
    }
}

/// The player: a fixed point at canvas center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Hsl,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "player radius must be positive");
        Self {
            pos,
            radius,
            color: Hsl::WHITE,
        }
    }
}

/// A shot fired from the player toward a click
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Hsl,
}

impl Projectile {
    /// Straight-line motion, no drag
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// A homing circle that ends the run on contact with the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision radius; drops instantly on a survived hit
    pub radius: f32,
    /// Radius to draw; eases toward `radius` after a shrink
    pub display_radius: f32,
    pub color: Hsl,
    #[serde(skip)]
    pub shrink: Option<RadiusTween>,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32, color: Hsl) -> Self {
        debug_assert!(radius > 0.0, "enemy radius must be positive");
        Self {
            id,
            pos,
            vel,
            radius,
            display_radius: radius,
            color,
            shrink: None,
        }
    }

    /// Move one tick and progress any running shrink animation
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel;
        if let Some(tween) = self.shrink.as_mut() {
            self.display_radius = tween.advance(dt);
            if tween.is_finished() {
                self.shrink = None;
            }
        }
    }

    /// Drop the collision radius by `step` and start easing the drawn radius
    pub fn shrink_by(&mut self, step: f32) {
        let target = self.radius - step;
        debug_assert!(target > 0.0, "shrunk enemy radius must stay positive");
        self.radius = target;
        self.shrink = Some(RadiusTween::new(self.display_radius, target));
    }
}

/// A fading spark from a hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Hsl,
    /// Opacity, starts at 1 and only decreases
    pub alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Hsl) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            alpha: 1.0,
        }
    }

    /// One tick of motion, friction and fade
    pub fn update(&mut self, friction: f32, fade: f32) {
        self.pos += self.vel;
        self.vel *= friction;
        self.alpha -= fade;
    }

    pub fn is_faded(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Things that happened during spawning or a tick, for the display layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemySpawned { id: u32 },
    /// Enemy survived a hit at a smaller radius
    EnemyShrunk { id: u32, radius: f32 },
    EnemyDestroyed { id: u32 },
    /// Projectile left the canvas; score after the penalty
    ProjectileWasted { id: u32, score: u64 },
    /// Session became terminal
    PlayerHit { final_score: u64 },
}

/// Undrained events kept before the oldest start being dropped
pub const MAX_PENDING_EVENTS: usize = 1024;

/// Bounded FIFO of `GameEvent`s.
///
/// The display layer is expected to drain it every frame; a front end that
/// never does keeps only the newest `MAX_PENDING_EVENTS`.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: GameEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Remove and return every pending event, oldest first
    pub fn take(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance values this session runs with
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Shared RNG for spawns and particle bursts
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    /// Ticks since the last reset
    pub time_ticks: u64,
    pub player: Player,
    /// Active projectiles (creation order)
    pub projectiles: Vec<Projectile>,
    /// Active enemies (creation order)
    pub enemies: Vec<Enemy>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Undrained events, oldest first
    pub events: EventQueue,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a running state with the given tuning and seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        debug_assert!(tuning.validate().is_ok(), "GameState needs validated tuning");
        let player = Player::new(tuning.canvas_center(), tuning.player_radius);
        Self {
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            score: 0,
            time_ticks: 0,
            player,
            projectiles: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            events: EventQueue::default(),
            next_id: 1,
        }
    }

    /// Fresh player, empty collections, zero score, running.
    /// The RNG keeps its stream so consecutive runs differ.
    pub fn reset(&mut self) {
        self.player = Player::new(self.tuning.canvas_center(), self.tuning.player_radius);
        self.projectiles.clear();
        self.enemies.clear();
        self.particles.clear();
        self.events.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        self.next_id = 1;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Fire a projectile from canvas center toward `target`.
    /// Returns the new projectile's id, or `None` when not running.
    pub fn spawn_projectile(&mut self, target: Vec2) -> Option<u32> {
        if !self.is_running() {
            return None;
        }
        let origin = self.tuning.canvas_center();
        let vel = direction(angle_to(origin, target)) * self.tuning.projectile_speed;
        let id = self.next_entity_id();
        self.projectiles.push(Projectile {
            id,
            pos: origin,
            vel,
            radius: self.tuning.projectile_radius,
            color: Hsl::WHITE,
        });
        Some(id)
    }
}
