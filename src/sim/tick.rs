//! Per-frame simulation tick
//!
//! One ordered update per rendered frame:
//! time → speed → player angle → spawn → wall pass → session reaction.
//! The host loop decides the frame cadence; the tick only needs `dt` and a clock.

use super::collision::{CollisionFrame, advance_walls};
use super::difficulty::travel_speed;
use super::spawner::AngleSource;
use super::state::{GameState, GameStatus};
use super::tracker::{HandSample, track};
use crate::consts::*;

/// Inputs for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Seconds since the previous tick
    pub dt: f32,
    /// Monotonic clock (seconds) compared against the spawn watermark
    pub clock: f64,
    /// Latest hand sample, if the tracker has produced one
    pub hands: Option<HandSample>,
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Id of the wall spawned this tick
    pub spawned: Option<u64>,
    /// Walls whose hit cost a life, in order
    pub hits: Vec<u64>,
    /// Walls dropped this tick
    pub retired: usize,
    /// The run ended this tick
    pub game_over: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, angles: &mut impl AngleSource) -> TickReport {
    let mut report = TickReport::default();

    if state.status == GameStatus::Loading {
        return report;
    }

    if state.status != GameStatus::Playing {
        // Cursor keeps following the hand on menus
        state.player_angle = track(state.player_angle, input.hands.as_ref());
        return report;
    }

    let dt = input.dt.max(0.0);

    state.survival_time += dt;
    state.run.speed = travel_speed(state.survival_time);
    state.player_angle = track(state.player_angle, input.hands.as_ref());

    state.run.world_rotation += dt * WORLD_ROTATION_RATE;
    state.run.shake = (state.run.shake - dt * SHAKE_DECAY_RATE).max(0.0);

    let spawned = state.run.spawner.poll(
        input.clock,
        state.survival_time,
        state.run.speed,
        angles,
        &mut state.next_wall_id,
    );
    report.spawned = spawned.as_ref().map(|w| w.id);

    let frame = CollisionFrame {
        dt,
        speed: state.run.speed,
        player_angle: state.player_angle,
        world_rotation: state.run.world_rotation,
    };
    let walls = std::mem::take(&mut state.run.walls);
    let pass = advance_walls(walls, spawned, &frame);
    state.run.walls = pass.walls;
    report.retired = pass.retired;

    if !pass.hits.is_empty() {
        state.run.shake = SHAKE_PEAK;
    }
    for &id in &pass.hits {
        // A run that ended earlier in this pass takes no further hits
        if !state.is_playing() {
            break;
        }
        report.hits.push(id);
        if state.register_hit() {
            report.game_over = true;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::difficulty::Difficulty;
    use crate::sim::spawner::SeededAngles;
    use crate::sim::wall::{Wall, WallColor};
    use glam::Vec3;
    use std::collections::VecDeque;
    use std::f32::consts::PI;

    /// Replays a fixed list of gap angles, then repeats the last one
    struct ScriptedAngles(VecDeque<f32>);

    impl AngleSource for ScriptedAngles {
        fn next_gap_angle(&mut self) -> f32 {
            if self.0.len() > 1 {
                self.0.pop_front().unwrap_or(0.0)
            } else {
                self.0.front().copied().unwrap_or(0.0)
            }
        }
    }

    fn zero_gaps() -> ScriptedAngles {
        ScriptedAngles(VecDeque::from(vec![0.0]))
    }

    /// Hand straight left of center: screen angle π
    fn hand_left_of_center() -> Option<HandSample> {
        Some(HandSample::right(Vec3::new(
            TRACKING_CENTER_X - 1.0,
            TRACKING_CENTER_Y,
            0.0,
        )))
    }

    fn playing(difficulty: Difficulty) -> GameState {
        let mut state = GameState::new();
        state.camera_ready();
        state.select_difficulty(difficulty).unwrap();
        state.start().unwrap();
        state
    }

    fn frame_input(dt: f32, clock: f64) -> TickInput {
        TickInput {
            dt,
            clock,
            hands: hand_left_of_center(),
        }
    }

    #[test]
    fn test_loading_ignores_everything() {
        let mut state = GameState::new();
        let report = tick(&mut state, &frame_input(0.1, 5.0), &mut zero_gaps());
        assert_eq!(report, TickReport::default());
        assert_eq!(state.player_angle, 0.0);
    }

    #[test]
    fn test_menu_tracks_hand_without_simulating() {
        let mut state = GameState::new();
        state.camera_ready();
        tick(&mut state, &frame_input(0.1, 5.0), &mut zero_gaps());
        assert!((state.player_angle - PI).abs() < 1e-5);
        assert_eq!(state.survival_time, 0.0);
        assert!(state.run.walls.is_empty());
    }

    #[test]
    fn test_first_tick_spawns_and_moves_wall() {
        let mut state = playing(Difficulty::Normal);
        let report = tick(&mut state, &frame_input(0.1, 1.0), &mut zero_gaps());
        assert!(report.spawned.is_some());
        assert_eq!(state.run.walls.len(), 1);
        assert!((state.run.walls[0].distance - (SPAWN_DISTANCE - 1.6)).abs() < 1e-4);
        assert!((state.run.world_rotation - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_distance_drops_by_dt_times_speed_each_tick() {
        let mut state = playing(Difficulty::Normal);
        let mut angles = zero_gaps();
        tick(&mut state, &frame_input(0.05, 1.0), &mut angles);
        let id = state.run.walls[0].id;

        for step in 0..50 {
            let before = state.run.walls.iter().find(|w| w.id == id).unwrap().distance;
            tick(&mut state, &frame_input(0.05, 1.0 + step as f64 * 0.001), &mut angles);
            let after = state.run.walls.iter().find(|w| w.id == id).unwrap().distance;
            assert!(after < before);
            assert!((before - after - 0.05 * state.run.speed).abs() < 1e-4);
        }
    }

    #[test]
    fn test_one_spawn_per_tick_after_long_stall() {
        let mut state = playing(Difficulty::Normal);
        let mut angles = zero_gaps();
        tick(&mut state, &frame_input(0.016, 1.0), &mut angles);
        // Clock jumps far ahead: still a single wall
        let report = tick(&mut state, &frame_input(0.016, 60.0), &mut angles);
        assert!(report.spawned.is_some());
        assert_eq!(state.run.walls.len(), 2);
        let report = tick(&mut state, &frame_input(0.016, 60.01), &mut angles);
        assert!(report.spawned.is_none());
    }

    #[test]
    fn test_speed_follows_survival_time() {
        let mut state = playing(Difficulty::Easy);
        state.survival_time = 39.95;
        state.run.spawner.next_spawn_at = f64::MAX;
        tick(&mut state, &frame_input(0.1, 1.0), &mut zero_gaps());
        assert_eq!(state.run.speed, SPAWN_DISTANCE / 3.0);
    }

    #[test]
    fn test_hit_sets_shake_then_decays() {
        let mut state = playing(Difficulty::Easy);
        state.run.spawner.next_spawn_at = f64::MAX;
        state.run.walls.push(Wall {
            distance: 4.2,
            ..Wall::new(100, 0.0, WallColor::Rose)
        });

        let report = tick(&mut state, &frame_input(0.02, 1.0), &mut zero_gaps());
        assert_eq!(report.hits, vec![100]);
        assert_eq!(state.run.shake, SHAKE_PEAK);
        assert_eq!(state.lives, 2);

        tick(&mut state, &frame_input(0.1, 1.1), &mut zero_gaps());
        assert!((state.run.shake - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_normal_two_hits_end_run() {
        let mut state = playing(Difficulty::Normal);
        assert_eq!(state.lives, 2);
        state.run.spawner.next_spawn_at = f64::MAX;
        state.run.walls.push(Wall {
            distance: 4.2,
            ..Wall::new(100, 0.0, WallColor::Rose)
        });
        state.run.walls.push(Wall {
            distance: 10.0,
            ..Wall::new(101, 0.0, WallColor::Blue)
        });

        let mut angles = zero_gaps();
        let mut clock = 1.0;
        let first = tick(&mut state, &frame_input(0.02, clock), &mut angles);
        assert_eq!(first.hits, vec![100]);
        assert!(!first.game_over);
        assert_eq!(state.lives, 1);
        assert_eq!(state.status, GameStatus::Playing);

        let mut ended = false;
        for _ in 0..100 {
            clock += 0.02;
            let report = tick(&mut state, &frame_input(0.02, clock), &mut angles);
            if report.game_over {
                assert_eq!(report.hits, vec![101]);
                ended = true;
                break;
            }
        }
        assert!(ended);
        assert_eq!(state.lives, 0);
        assert_eq!(state.status, GameStatus::GameOver);
        assert!(state.best_time > 0.0);
        assert_eq!(state.best_time, state.survival_time);
    }

    #[test]
    fn test_game_over_freezes_walls() {
        let mut state = playing(Difficulty::Hard);
        state.run.spawner.next_spawn_at = f64::MAX;
        state.run.walls.push(Wall {
            distance: 4.2,
            ..Wall::new(7, 0.0, WallColor::Rose)
        });
        state.run.walls.push(Wall::new(8, 0.0, WallColor::Blue));
        let report = tick(&mut state, &frame_input(0.02, 1.0), &mut zero_gaps());
        assert!(report.game_over);

        let frozen = state.run.walls.clone();
        let time = state.survival_time;
        tick(&mut state, &frame_input(0.5, 2.0), &mut zero_gaps());
        assert_eq!(state.run.walls, frozen);
        assert_eq!(state.survival_time, time);
    }

    #[test]
    fn test_hits_after_final_life_not_reported() {
        let mut state = playing(Difficulty::Hard);
        state.run.spawner.next_spawn_at = f64::MAX;
        state.run.walls.push(Wall {
            distance: 4.2,
            ..Wall::new(1, 0.0, WallColor::Rose)
        });
        state.run.walls.push(Wall {
            distance: 4.1,
            ..Wall::new(2, 0.0, WallColor::Blue)
        });

        let report = tick(&mut state, &frame_input(0.02, 1.0), &mut zero_gaps());
        assert!(report.game_over);
        assert_eq!(report.hits, vec![1]);
        assert_eq!(state.lives, 0);
        assert!(!state.is_playing());
    }

    #[test]
    fn test_player_in_gap_survives_pass() {
        let mut state = playing(Difficulty::Hard);
        state.run.spawner.next_spawn_at = f64::MAX;
        // Gap centered on the player's local angle (π, rotation still ~0)
        state.run.walls.push(Wall {
            distance: 4.2,
            ..Wall::new(1, PI - 0.75, WallColor::Rose)
        });
        for step in 0..10 {
            let report = tick(&mut state, &frame_input(0.02, 1.0 + step as f64), &mut zero_gaps());
            assert!(report.hits.is_empty());
        }
        assert_eq!(state.status, GameStatus::Playing);
        assert!(state.run.walls.iter().all(|w| w.id != 1 || w.passed));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = playing(Difficulty::Easy);
        let mut state2 = playing(Difficulty::Easy);
        let mut angles1 = SeededAngles::new(99999);
        let mut angles2 = SeededAngles::new(99999);

        let mut clock = 0.0;
        for step in 0..600 {
            clock += 1.0 / 60.0;
            let hand = Vec3::new((step as f32 * 0.05).cos(), 1.5 + (step as f32 * 0.05).sin(), 0.0);
            let input = TickInput {
                dt: 1.0 / 60.0,
                clock,
                hands: Some(HandSample::right(hand)),
            };
            let r1 = tick(&mut state1, &input, &mut angles1);
            let r2 = tick(&mut state2, &input, &mut angles2);
            assert_eq!(r1, r2);
        }

        assert_eq!(state1.run.walls, state2.run.walls);
        assert_eq!(state1.lives, state2.lives);
        assert_eq!(state1.status, state2.status);
    }
}
