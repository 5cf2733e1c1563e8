//! Per-frame simulation tick
//!
//! One call advances the game by exactly one frame. Velocities are in
//! distance-per-tick; `dt` only drives cosmetic animation.

use super::collision::{circles_touch, fully_off_canvas};
use super::particles;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, dt: f32) {
    // Terminal is absorbing until reset
    if state.phase == GamePhase::Terminal {
        return;
    }

    state.time_ticks += 1;

    particles::decay(&mut state.particles, &state.tuning);
    advance_projectiles(state);
    advance_enemies(state, dt);

    debug_assert!(state.enemies.iter().all(|e| e.radius > 0.0));
}

/// Move projectiles and drop the ones that left the canvas, charging the penalty
fn advance_projectiles(state: &mut GameState) {
    let GameState {
        tuning,
        projectiles,
        score,
        events,
        ..
    } = state;

    projectiles.retain_mut(|projectile| {
        projectile.advance();
        if !fully_off_canvas(
            projectile.pos,
            projectile.radius,
            tuning.canvas_width,
            tuning.canvas_height,
        ) {
            return true;
        }

        *score = score.saturating_sub(tuning.score_wasted_penalty);
        events.push(GameEvent::ProjectileWasted {
            id: projectile.id,
            score: *score,
        });
        log::debug!("Projectile {} wasted, score now {}", projectile.id, score);
        false
    });
}

/// Move enemies, check the player, then resolve projectile hits
fn advance_enemies(state: &mut GameState, dt: f32) {
    let GameState {
        tuning,
        rng,
        phase,
        score,
        player,
        projectiles,
        enemies,
        particles: sparks,
        events,
        ..
    } = state;

    // Projectile and enemy ids removed this pass, swept once at the end
    let mut spent_projectiles: Vec<u32> = Vec::new();
    let mut destroyed_enemies: Vec<u32> = Vec::new();

    for enemy in enemies.iter_mut() {
        enemy.advance(dt);

        if circles_touch(
            player.pos,
            player.radius,
            enemy.pos,
            enemy.radius,
            tuning.collision_epsilon,
        ) {
            *phase = GamePhase::Terminal;
            events.push(GameEvent::PlayerHit {
                final_score: *score,
            });
            log::info!("Player hit by enemy {}, final score {}", enemy.id, score);
            break;
        }

        for projectile in projectiles.iter() {
            if spent_projectiles.contains(&projectile.id) {
                continue;
            }
            if !circles_touch(
                projectile.pos,
                projectile.radius,
                enemy.pos,
                enemy.radius,
                tuning.collision_epsilon,
            ) {
                continue;
            }

            particles::emit_burst(
                sparks,
                rng,
                projectile.pos,
                enemy.radius,
                enemy.color,
                tuning,
            );
            spent_projectiles.push(projectile.id);

            if enemy.radius - tuning.enemy_shrink_step > tuning.enemy_min_radius {
                *score = score.saturating_add(tuning.score_shrink);
                enemy.shrink_by(tuning.enemy_shrink_step);
                events.push(GameEvent::EnemyShrunk {
                    id: enemy.id,
                    radius: enemy.radius,
                });
                log::debug!("Enemy {} shrunk to r={:.1}", enemy.id, enemy.radius);
            } else {
                *score = score.saturating_add(tuning.score_destroy);
                destroyed_enemies.push(enemy.id);
                events.push(GameEvent::EnemyDestroyed { id: enemy.id });
                log::debug!("Enemy {} destroyed", enemy.id);
                // Gone; later projectiles this tick can't hit it
                break;
            }
        }
    }

    if !spent_projectiles.is_empty() {
        projectiles.retain(|p| !spent_projectiles.contains(&p.id));
    }
    if !destroyed_enemies.is_empty() {
        enemies.retain(|e| !destroyed_enemies.contains(&e.id));
    }
}
