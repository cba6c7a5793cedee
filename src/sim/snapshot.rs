//! Render snapshot
//!
//! An owned copy of everything a renderer or HUD needs after a tick. Built once
//! per frame and handed over; the simulation never mutates a published snapshot.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::state::{GameState, GameStatus};
use super::wall::Wall;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub status: GameStatus,
    pub difficulty: Difficulty,
    pub run_id: u64,
    pub walls: Vec<Wall>,
    pub player_angle: f32,
    pub world_rotation: f32,
    pub shake: f32,
    pub lives: u8,
    pub max_lives: u8,
    pub survival_time: f32,
    pub best_time: f32,
    pub camera_error: Option<String>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            status: state.status,
            difficulty: state.difficulty,
            run_id: state.run.run_id,
            walls: state.run.walls.clone(),
            player_angle: state.player_angle,
            world_rotation: state.run.world_rotation,
            shake: state.run.shake,
            lives: state.lives,
            max_lives: state.max_lives,
            survival_time: state.survival_time,
            best_time: state.best_time,
            camera_error: state.camera_error.clone(),
        }
    }

    /// Player angle in the wall field's frame (where the cursor is drawn)
    pub fn cursor_angle(&self) -> f32 {
        self.player_angle - self.world_rotation
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
