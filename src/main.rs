//! Imitation Hexagon entry point
//!
//! The browser build is driven from JavaScript through `imitation_hexagon::web`.
//! Natively this runs a headless demo: a scripted hand chases the nearest gap
//! with a capped turn rate until the walls get too fast for it.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::f32::consts::{PI, TAU};

    use glam::Vec3;
    use imitation_hexagon::Game;
    use imitation_hexagon::consts::{TRACKING_CENTER_X, TRACKING_CENTER_Y};
    use imitation_hexagon::sim::{
        Difficulty, GameState, GameStatus, HandSample, TickInput,
    };
    use imitation_hexagon::ui::format_time;

    /// Simulation frame rate
    const FPS: f32 = 60.0;
    /// Hard stop for the demo (seconds)
    const MAX_SECONDS: f32 = 300.0;
    /// How fast the scripted hand can swing around the ring (radians/sec)
    const HAND_TURN_RATE: f32 = 4.0;

    /// Screen angle the hand should aim for: middle of the next unresolved gap
    fn target_angle(state: &GameState) -> Option<f32> {
        state
            .run
            .walls
            .iter()
            .filter(|w| !w.passed)
            .min_by(|a, b| {
                a.distance
                    .partial_cmp(&b.distance)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|w| w.gap_start + w.gap_size / 2.0 + state.run.world_rotation)
    }

    /// Turn `current` toward `target` by at most `max_delta`, the short way round
    fn step_toward(current: f32, target: f32, max_delta: f32) -> f32 {
        let mut delta = (target - current).rem_euclid(TAU);
        if delta > PI {
            delta -= TAU;
        }
        current + delta.clamp(-max_delta, max_delta)
    }

    pub fn run() {
        let mut args = std::env::args().skip(1);
        let difficulty = args
            .next()
            .and_then(|s| Difficulty::from_str(&s))
            .unwrap_or_default();
        let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

        let mut game = Game::headless(seed);
        game.camera_ready();
        if let Err(e) = game.select_difficulty(difficulty) {
            log::error!("{}", e);
            return;
        }
        if let Err(e) = game.start() {
            log::error!("{}", e);
            return;
        }

        let dt = 1.0 / FPS;
        let mut clock = 0.0f64;
        let mut hand_angle = 0.0f32;
        let mut hits = 0usize;

        while game.state().status == GameStatus::Playing && game.state().survival_time < MAX_SECONDS {
            clock += dt as f64;

            if let Some(target) = target_angle(game.state()) {
                hand_angle = step_toward(hand_angle, target, HAND_TURN_RATE * dt);
            }
            let hand = Vec3::new(
                TRACKING_CENTER_X + hand_angle.cos(),
                TRACKING_CENTER_Y + hand_angle.sin(),
                0.0,
            );

            let report = game.tick(&TickInput {
                dt,
                clock,
                hands: Some(HandSample::right(hand)),
            });
            hits += report.hits.len();
        }

        let state = game.state();
        println!(
            "{} run: survived {}s, {} hit(s), best {}s",
            state.difficulty.as_str(),
            format_time(state.survival_time),
            hits,
            format_time(state.best_time)
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Imitation Hexagon (native) starting...");
    log::info!("Native mode is a headless demo - serve the web build to play with a camera");

    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is imitation_hexagon::web::wasm_start, this is just to satisfy the compiler
}
