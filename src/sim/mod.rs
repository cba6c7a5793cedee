//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only arrives through `TickInput`
//! - Randomness only through an injected `AngleSource`
//! - Walls keep spawn order
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod tracker;
pub mod wall;

pub use collision::{CollisionFrame, WallPass, advance_walls, in_collision_band, step_wall};
pub use difficulty::{Difficulty, Tier, travel_duration, travel_speed};
pub use snapshot::FrameSnapshot;
pub use spawner::{AngleSource, SeededAngles, Spawner};
pub use state::{GameState, GameStatus, RunState, SessionError};
pub use tick::{TickInput, TickReport, tick};
pub use tracker::{HandSample, angle_of, track};
pub use wall::{Wall, WallColor};
