//! Game state and session transitions
//!
//! `GameState` is the only thing that survives between runs (`best_time`).
//! Everything that belongs to a single run lives in `RunState` and is replaced
//! wholesale when a new run starts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::difficulty::Difficulty;
use super::spawner::Spawner;
use super::wall::Wall;
use crate::consts::BASE_SPEED;

/// Overall session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the camera/hand tracker
    Loading,
    /// Menu: difficulty can be changed
    Idle,
    /// Active run
    Playing,
    /// Run ended, waiting for retry or menu
    GameOver,
}

/// A session action that is not allowed in the current status
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("hand tracking is not ready yet")]
    NotReady,
    #[error("cannot {action} while {status:?}")]
    InvalidTransition {
        action: &'static str,
        status: GameStatus,
    },
}

/// Per-run state, discarded when a new run starts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    /// Identity of the run this state belongs to
    pub run_id: u64,
    /// Active walls, in spawn order
    pub walls: Vec<Wall>,
    pub spawner: Spawner,
    /// Current global wall speed
    pub speed: f32,
    /// Accumulated spin of the wall field (radians)
    pub world_rotation: f32,
    /// Transient hit shake, decays toward 0
    pub shake: f32,
}

impl RunState {
    pub fn new(run_id: u64) -> Self {
        Self {
            run_id,
            walls: Vec::new(),
            spawner: Spawner::new(),
            speed: BASE_SPEED,
            world_rotation: 0.0,
            shake: 0.0,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    /// Selected difficulty (applies at the next start)
    pub difficulty: Difficulty,
    pub lives: u8,
    pub max_lives: u8,
    /// Seconds survived in the current/last run
    pub survival_time: f32,
    /// Longest survival this process has seen
    pub best_time: f32,
    /// Camera/tracker failure reported while loading
    pub camera_error: Option<String>,
    /// Player angle in screen space (unnormalized)
    pub player_angle: f32,
    pub run: RunState,
    /// Next wall id (never reused within a process)
    pub(crate) next_wall_id: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        let difficulty = Difficulty::default();
        Self {
            status: GameStatus::Loading,
            difficulty,
            lives: difficulty.starting_lives(),
            max_lives: difficulty.starting_lives(),
            survival_time: 0.0,
            best_time: 0.0,
            camera_error: None,
            player_angle: 0.0,
            run: RunState::new(0),
            next_wall_id: 0,
        }
    }

    /// Tracker is up: Loading → Idle. Later reports are ignored.
    pub fn camera_ready(&mut self) {
        if self.status == GameStatus::Loading {
            self.camera_error = None;
            self.status = GameStatus::Idle;
            log::info!("Hand tracking ready");
        }
    }

    /// Tracker failed to initialize. Blocks in Loading until a ready report.
    pub fn camera_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        if self.status == GameStatus::Loading {
            log::error!("Hand tracking failed: {}", message);
            self.camera_error = Some(message);
        } else {
            log::warn!("Ignoring tracking failure while {:?}: {}", self.status, message);
        }
    }

    /// Change difficulty (menu only)
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> Result<(), SessionError> {
        if self.status != GameStatus::Idle {
            return Err(SessionError::InvalidTransition {
                action: "change difficulty",
                status: self.status,
            });
        }
        self.difficulty = difficulty;
        log::info!("Difficulty set to {}", difficulty.as_str());
        Ok(())
    }

    /// Start a new run from the menu or the game-over screen.
    /// Returns the new run id.
    pub fn start(&mut self) -> Result<u64, SessionError> {
        match self.status {
            GameStatus::Loading => return Err(SessionError::NotReady),
            GameStatus::Playing => {
                return Err(SessionError::InvalidTransition {
                    action: "start a run",
                    status: self.status,
                });
            }
            GameStatus::Idle | GameStatus::GameOver => {}
        }

        let lives = self.difficulty.starting_lives();
        self.lives = lives;
        self.max_lives = lives;
        self.survival_time = 0.0;
        self.player_angle = 0.0;
        self.run = RunState::new(self.run.run_id + 1);
        self.status = GameStatus::Playing;

        log::info!(
            "Run {} started ({}, {} lives)",
            self.run.run_id,
            self.difficulty.as_str(),
            lives
        );
        Ok(self.run.run_id)
    }

    /// Leave the game-over screen for the menu
    pub fn return_to_menu(&mut self) -> Result<(), SessionError> {
        if self.status != GameStatus::GameOver {
            return Err(SessionError::InvalidTransition {
                action: "return to menu",
                status: self.status,
            });
        }
        self.status = GameStatus::Idle;
        Ok(())
    }

    /// Apply one hit. Returns true if it ended the run.
    pub fn register_hit(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        self.lives = self.lives.saturating_sub(1);
        if self.lives > 0 {
            log::info!("Hit! {} of {} lives left", self.lives, self.max_lives);
            return false;
        }

        self.status = GameStatus::GameOver;
        if self.survival_time > self.best_time {
            self.best_time = self.survival_time;
        }
        log::info!(
            "Game over after {:.2}s (best {:.2}s)",
            self.survival_time,
            self.best_time
        );
        true
    }

    /// Whether a run is in progress
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }
}
