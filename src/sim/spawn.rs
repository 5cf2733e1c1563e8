//! Enemy spawner
//!
//! Enemies appear just outside a random canvas edge and head straight for the
//! canvas center.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameEvent, GameState, Hsl};
use crate::{angle_to, direction};

/// Enemy saturation and lightness; only the hue varies
const ENEMY_SATURATION: f32 = 0.5;
const ENEMY_LIGHTNESS: f32 = 0.5;

/// Pick an off-canvas spawn point for an enemy of `radius`
pub fn edge_position<R: Rng + ?Sized>(rng: &mut R, radius: f32, width: f32, height: f32) -> Vec2 {
    if rng.random_bool(0.5) {
        // Left or right edge
        let x = if rng.random_bool(0.5) {
            -radius
        } else {
            width + radius
        };
        Vec2::new(x, rng.random_range(0.0..height))
    } else {
        // Top or bottom edge
        let y = if rng.random_bool(0.5) {
            -radius
        } else {
            height + radius
        };
        Vec2::new(rng.random_range(0.0..width), y)
    }
}

/// Append one enemy to the state. Returns its id, or `None` when not running.
pub fn spawn_enemy(state: &mut GameState) -> Option<u32> {
    if !state.is_running() {
        return None;
    }

    let tuning = &state.tuning;
    let (min_r, max_r) = (tuning.enemy_min_spawn_radius, tuning.enemy_max_spawn_radius);
    let (width, height) = (tuning.canvas_width, tuning.canvas_height);
    let center = tuning.canvas_center();

    let radius = state.rng.random_range(min_r..max_r);
    let pos = edge_position(&mut state.rng, radius, width, height);
    let hue = state.rng.random_range(0.0..360.0);
    let color = Hsl::new(hue, ENEMY_SATURATION, ENEMY_LIGHTNESS);
    let vel = direction(angle_to(pos, center));

    let id = state.next_entity_id();
    state.enemies.push(Enemy::new(id, pos, vel, radius, color));
    state.events.push(GameEvent::EnemySpawned { id });
    log::debug!("Spawned enemy {} r={:.1} at ({:.0}, {:.0})", id, radius, pos.x, pos.y);
    Some(id)
}

/// Fixed-interval timer driven by frame elapsed time
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTimer {
    pub interval: f32,
    accumulator: f32,
}

impl SpawnTimer {
    pub fn new(interval: f32) -> Self {
        debug_assert!(interval > 0.0, "spawn interval must be positive");
        Self {
            interval,
            accumulator: 0.0,
        }
    }

    /// Add elapsed seconds and return how many spawns fell due
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.max(0.0);
        let mut due = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            due += 1;
        }
        due
    }

    /// Seconds until the next spawn
    pub fn remaining(&self) -> f32 {
        self.interval - self.accumulator
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    use crate::sim::GamePhase;
    use crate::tuning::Tuning;

    #[test]
    fn test_spawned_enemies_are_in_range_and_off_canvas() {
        let mut state = GameState::new(Tuning::with_canvas(800.0, 600.0), 42);
        for _ in 0..200 {
            spawn_enemy(&mut state);
        }
        assert_eq!(state.enemies.len(), 200);

        let (mut saw_vertical, mut saw_horizontal) = (false, false);
        for enemy in &state.enemies {
            assert!(enemy.radius >= 7.0 && enemy.radius < 30.0);
            let on_vertical_edge = (enemy.pos.x + enemy.radius).abs() < 1e-3
                || (enemy.pos.x - 800.0 - enemy.radius).abs() < 1e-3;
            let on_horizontal_edge = (enemy.pos.y + enemy.radius).abs() < 1e-3
                || (enemy.pos.y - 600.0 - enemy.radius).abs() < 1e-3;
            assert!(on_vertical_edge || on_horizontal_edge);
            saw_vertical |= on_vertical_edge;
            saw_horizontal |= on_horizontal_edge;
            assert!((0.0..360.0).contains(&enemy.color.hue));
        }
        // Both edge pairs get used
        assert!(saw_vertical && saw_horizontal);
    }

    #[test]
    fn test_edge_position_covers_all_four_sides() {
        let mut rng = rand_pcg::Pcg32::seed_from_u64(9);
        let mut sides = [false; 4];
        for _ in 0..200 {
            let pos = edge_position(&mut rng, 10.0, 800.0, 600.0);
            if pos.x == -10.0 {
                sides[0] = true;
            } else if pos.x == 810.0 {
                sides[1] = true;
            } else if pos.y == -10.0 {
                sides[2] = true;
            } else if pos.y == 610.0 {
                sides[3] = true;
            } else {
                panic!("spawn point {pos} is not on an edge");
            }
        }
        assert_eq!(sides, [true; 4]);
    }

    #[test]
    fn test_enemy_velocity_aims_at_center() {
        let mut state = GameState::new(Tuning::with_canvas(800.0, 600.0), 3);
        for _ in 0..50 {
            spawn_enemy(&mut state);
        }
        let center = Vec2::new(400.0, 300.0);
        for enemy in &state.enemies {
            assert!((enemy.vel.length() - 1.0).abs() < 1e-5);
            let to_center = (center - enemy.pos).normalize();
            assert!(enemy.vel.dot(to_center) > 0.9999);
        }
    }

    #[test]
    fn test_spawn_ignored_when_terminal() {
        let mut state = GameState::new(Tuning::default(), 3);
        state.phase = GamePhase::Terminal;
        assert_eq!(spawn_enemy(&mut state), None);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_spawn_timer_fires_once_per_interval() {
        let mut timer = SpawnTimer::new(1.0);
        assert_eq!(timer.advance(0.5), 0);
        assert_eq!(timer.advance(0.5), 1);
        assert_eq!(timer.advance(2.25), 2);
        assert!((timer.remaining() - 0.75).abs() < 1e-5);
        timer.reset();
        assert_eq!(timer.remaining(), 1.0);
    }
}
