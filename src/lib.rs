//! Imitation Hexagon - A hand-tracked hexagon survival game
//!
//! Core modules:
//! - `sim`: Simulation core (wall spawning, speed ramp, gap collision, session state)
//! - `game`: Driver that wires the simulation to its collaborators (audio, randomness)
//! - `renderer`: Render-facing instance data for whatever draws the walls
//! - `ui`: HUD view-model (timers, lives, screens)
//! - `settings`: Player preferences

pub mod audio;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use game::Game;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::FRAC_PI_2;

    /// Distance at which new walls appear
    pub const SPAWN_DISTANCE: f32 = 80.0;
    /// Travel speed at the start of a run, before the first speed update
    pub const BASE_SPEED: f32 = 10.0;

    /// Angular width of every wall's gap (quarter turn)
    pub const GAP_SIZE: f32 = FRAC_PI_2;
    /// Forgiveness inset on both edges of the gap
    pub const GAP_PADDING: f32 = 0.25;

    /// Collision band: a wall is tested while strictly between these distances
    pub const COLLISION_OUTER: f32 = 4.0;
    pub const COLLISION_INNER: f32 = 3.4;
    /// Walls at or below this distance are dropped
    pub const RETIRE_DISTANCE: f32 = 0.5;

    /// Visual spin of the wall field (radians/sec)
    pub const WORLD_ROTATION_RATE: f32 = 0.5;

    /// Shake magnitude set on every hit
    pub const SHAKE_PEAK: f32 = 1.0;
    /// Shake decay (magnitude/sec)
    pub const SHAKE_DECAY_RATE: f32 = 5.0;

    /// Spawn interval floor (seconds)
    pub const MIN_SPAWN_INTERVAL: f32 = 0.6;
    /// Distance between consecutive walls used to derive the spawn interval
    pub const SPAWN_SPACING: f32 = 25.0;

    /// Point the hand angle is measured around (tracking space)
    pub const TRACKING_CENTER_X: f32 = 0.0;
    pub const TRACKING_CENTER_Y: f32 = 1.5;

    /// Radius of the player cursor ring
    pub const PLAYER_RADIUS: f32 = 3.5;
    /// Walls are hexagons
    pub const WALL_SIDES: u32 = 6;
}

/// Normalize angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
