use glam::Vec2;
use proptest::prelude::*;
use radial_blaster::consts::SIM_DT;
use radial_blaster::sim::{Enemy, GameEvent, GamePhase, Hsl, Projectile};
use radial_blaster::{Session, Tuning};

fn session(seed: u64) -> Session {
    Session::new(Tuning::with_canvas(800.0, 600.0), seed)
}

#[derive(Debug, Clone)]
enum Action {
    Fire(f32, f32),
    Frame,
    Spawn,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (-200.0f32..1000.0, -200.0f32..800.0).prop_map(|(x, y)| Action::Fire(x, y)),
        Just(Action::Frame),
        Just(Action::Frame),
        Just(Action::Spawn),
    ]
}

fn apply(session: &mut Session, action: &Action) {
    match *action {
        Action::Fire(x, y) => {
            session.fire(Vec2::new(x, y));
        }
        Action::Frame => session.frame(SIM_DT),
        Action::Spawn => {
            session.spawn_tick();
        }
    }
}

proptest! {
    #[test]
    fn score_tracks_events(seed in any::<u64>(), actions in prop::collection::vec(action(), 1..300)) {
        let mut session = session(seed);
        let mut expected: u64 = 0;
        for action in &actions {
            apply(&mut session, action);
            for event in session.drain_events() {
                match event {
                    GameEvent::EnemyShrunk { .. } => expected += 100,
                    GameEvent::EnemyDestroyed { .. } => expected += 250,
                    GameEvent::ProjectileWasted { score, .. } => {
                        expected = expected.saturating_sub(200);
                        prop_assert_eq!(score, expected);
                    }
                    _ => {}
                }
            }
            prop_assert_eq!(session.score(), expected);
        }
    }

    #[test]
    fn wasted_penalty_clamps_at_zero(start in 0u64..2000, targets in prop::collection::vec(0.0f32..360.0, 1..8)) {
        let mut session = session(1);
        session.state_mut().score = start;
        for degrees in &targets {
            let angle = degrees.to_radians();
            session.fire(Vec2::new(400.0, 300.0) + Vec2::new(angle.cos(), angle.sin()) * 100.0);
        }

        // Long enough for every shot to clear the canvas; no spawns
        for _ in 0..200 {
            session.step();
        }

        prop_assert!(session.projectiles().is_empty());
        let wasted = session
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::ProjectileWasted { .. }))
            .count() as u64;
        prop_assert_eq!(wasted, targets.len() as u64);
        prop_assert_eq!(session.score(), start.saturating_sub(200 * wasted));
    }

    #[test]
    fn restart_is_idempotent(seed in any::<u64>(), actions in prop::collection::vec(action(), 0..100)) {
        let mut once = session(seed);
        let mut twice = session(seed);
        for action in &actions {
            apply(&mut once, action);
            apply(&mut twice, action);
        }

        once.restart();
        twice.restart();
        twice.restart();

        prop_assert_eq!(once.phase(), GamePhase::Running);
        prop_assert_eq!(once.score(), 0);
        prop_assert!(once.enemies().is_empty());
        prop_assert!(once.projectiles().is_empty());
        prop_assert!(once.particles().is_empty());
        prop_assert_eq!(
            once.snapshot().to_json().unwrap(),
            twice.snapshot().to_json().unwrap()
        );
    }

    #[test]
    fn hit_shrinks_or_destroys_exactly_once(radius in 7.0f32..30.0, angle in 0.0f32..std::f32::consts::TAU, gap in -4.0f32..0.9) {
        let mut session = session(5);
        let center = Vec2::new(150.0, 150.0);
        let state = session.state_mut();
        let enemy_id = state.next_entity_id();
        state.enemies.push(Enemy::new(enemy_id, center, Vec2::ZERO, radius, Hsl::WHITE));
        let projectile_id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id: projectile_id,
            pos: center + Vec2::new(angle.cos(), angle.sin()) * (radius + 5.0 + gap),
            vel: Vec2::ZERO,
            radius: 5.0,
            color: Hsl::WHITE,
        });

        session.step();

        let events = session.drain_events();
        let shrunk = events.iter().filter(|e| matches!(e, GameEvent::EnemyShrunk { .. })).count();
        let destroyed = events.iter().filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. })).count();
        prop_assert_eq!(shrunk + destroyed, 1);
        prop_assert!(session.projectiles().is_empty());
        prop_assert_eq!(session.particles().len(), (radius * 2.0).floor() as usize);

        if radius - 10.0 > 7.0 {
            prop_assert_eq!(shrunk, 1);
            prop_assert_eq!(session.score(), 100);
            prop_assert_eq!(session.enemies().len(), 1);
            prop_assert!((session.enemies()[0].radius - (radius - 10.0)).abs() < 1e-4);
        } else {
            prop_assert_eq!(destroyed, 1);
            prop_assert_eq!(session.score(), 250);
            prop_assert!(session.enemies().is_empty());
        }
    }
}
