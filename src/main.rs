//! Radial Blaster headless runner
//!
//! Drives a session without a display: fires at every enemy as it spawns and
//! runs until the player is hit or the frame cap is reached.
//!
//! Usage: `radial-blaster [tuning.json] [seed]`

use radial_blaster::consts::{FRAME_RATE, SIM_DT};
use radial_blaster::renderer::RenderFrame;
use radial_blaster::sim::GameEvent;
use radial_blaster::{Session, Settings, Tuning};

/// Two minutes of play at the target frame rate
const MAX_FRAMES: u32 = 120 * FRAME_RATE as u32;

fn load_tuning(path: Option<&str>) -> Tuning {
    let Some(path) = path else {
        return Tuning::default();
    };
    match std::fs::read_to_string(path) {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Rejected tuning {}: {} - using defaults", path, e);
                Tuning::default()
            }
        },
        Err(e) => {
            log::warn!("Could not read {}: {} - using defaults", path, e);
            Tuning::default()
        }
    }
}

fn default_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    log::info!("Radial Blaster (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tuning = load_tuning(args.first().map(String::as_str));
    let seed = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(default_seed);

    let settings = Settings::default();
    let mut session = Session::new(tuning, seed);
    let mut frames = 0;
    let mut shots = 0;

    while frames < MAX_FRAMES && !session.is_terminal() {
        session.frame(SIM_DT);
        frames += 1;

        for event in session.drain_events() {
            match event {
                GameEvent::EnemySpawned { id } => {
                    let target = session.enemies().iter().find(|e| e.id == id).map(|e| e.pos);
                    if let Some(target) = target {
                        session.fire(target);
                        shots += 1;
                    }
                }
                GameEvent::PlayerHit { final_score } => {
                    log::info!("Game over after {} frames, score {}", frames, final_score);
                }
                _ => {}
            }
        }

        // Exercise the draw path the way a front end would
        let frame = RenderFrame::build(session.state(), &settings);
        log::trace!("frame {}: {} circles", frames, frame.circles.len());
    }

    let summary = serde_json::json!({
        "seed": seed,
        "frames": frames,
        "shots": shots,
        "score": session.score(),
        "phase": session.phase(),
        "enemies": session.enemies().len(),
        "projectiles": session.projectiles().len(),
        "particles": session.particles().len(),
    });
    println!("{}", summary);
}
