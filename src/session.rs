//! Session controller
//!
//! Owns the `GameState` and is the only entry point for the front end:
//! frame callbacks, the spawn timer, clicks and restart requests all go
//! through `&mut Session` on a single thread.

use glam::Vec2;
use serde::Serialize;

use crate::consts::MAX_FRAME_DT;
use crate::sim::{
    Enemy, GameEvent, GamePhase, GameState, Particle, Player, Projectile, SpawnTimer, spawn_enemy,
    tick,
};
use crate::tuning::Tuning;

/// Read-only view of everything the display layer draws
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub score: u64,
    pub player: &'a Player,
    pub projectiles: &'a [Projectile],
    pub enemies: &'a [Enemy],
    pub particles: &'a [Particle],
}

impl Snapshot<'_> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A single play session: Running until the player is hit, then Terminal
/// until `restart`.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    spawn_timer: SpawnTimer,
}

impl Session {
    /// Create a session and start it
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let spawn_timer = SpawnTimer::new(tuning.spawn_interval_secs);
        let mut session = Self {
            state: GameState::new(tuning, seed),
            spawn_timer,
        };
        session.start();
        session
    }

    /// Reset to a fresh running state and restart the spawn timer
    pub fn start(&mut self) {
        self.state.reset();
        self.spawn_timer.reset();
        log::info!(
            "Session started (seed {}, canvas {}x{})",
            self.state.seed,
            self.state.tuning.canvas_width,
            self.state.tuning.canvas_height
        );
    }

    /// Same as `start`; safe to call from any phase
    pub fn restart(&mut self) {
        if self.state.phase == GamePhase::Terminal {
            log::info!("Restarting after game over (score {})", self.state.score);
        }
        self.start();
    }

    /// Fire toward a pointer position. Ignored unless running.
    pub fn fire(&mut self, target: Vec2) -> Option<u32> {
        let id = self.state.spawn_projectile(target);
        if id.is_none() {
            log::debug!("Ignoring fire at ({}, {}) while terminal", target.x, target.y);
        }
        id
    }

    /// Spawn timer callback for front ends with their own interval timer
    pub fn spawn_tick(&mut self) -> Option<u32> {
        spawn_enemy(&mut self.state)
    }

    /// Frame callback: feed the spawn timer with `elapsed` seconds, spawn
    /// what fell due, then run exactly one tick.
    pub fn frame(&mut self, elapsed: f32) {
        if !self.state.is_running() {
            return;
        }
        let elapsed = elapsed.clamp(0.0, MAX_FRAME_DT);

        let due = self.spawn_timer.advance(elapsed);
        for _ in 0..due {
            spawn_enemy(&mut self.state);
        }

        tick(&mut self.state, elapsed);
    }

    /// Run one tick without touching the spawn timer
    pub fn step(&mut self) {
        tick(&mut self.state, crate::consts::SIM_DT);
    }

    /// Take all events recorded since the last drain.
    ///
    /// Call once per frame; past `MAX_PENDING_EVENTS` undrained events the
    /// oldest are dropped.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.events.take()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.state.phase,
            score: self.state.score,
            player: &self.state.player,
            projectiles: &self.state.projectiles,
            enemies: &self.state.enemies,
            particles: &self.state.particles,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for front ends that script scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.state.tuning
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.state.phase == GamePhase::Terminal
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.state.projectiles
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.state.enemies
    }

    pub fn particles(&self) -> &[Particle] {
        &self.state.particles
    }

    /// Seconds until the spawn timer next fires
    pub fn next_spawn_in(&self) -> f32 {
        self.spawn_timer.remaining()
    }
}
