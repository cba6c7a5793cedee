//! HUD view-model
//!
//! Turns a snapshot into the text and flags the overlay shows. Layout and
//! styling belong to the host.

use serde::Serialize;

use crate::sim::{Difficulty, FrameSnapshot, GameStatus};

/// Which center screen is up
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Screen {
    /// Startup spinner, with the tracker error if there is one
    Loading { error: Option<String> },
    /// Title + difficulty picker
    Menu {
        difficulty: Difficulty,
        lives_label: &'static str,
    },
    /// No center screen during a run
    None,
    /// Result card with retry/menu buttons
    GameOver { difficulty: Difficulty, survived: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudView {
    pub time: String,
    pub best: String,
    /// One entry per max life, true = still available. Empty outside a run.
    pub lives: Vec<bool>,
    pub screen: Screen,
}

/// Seconds with two decimals
pub fn format_time(seconds: f32) -> String {
    format!("{:.2}", seconds)
}

/// Label under each difficulty button
pub fn lives_label(difficulty: Difficulty) -> &'static str {
    match difficulty.starting_lives() {
        1 => "1 LIFE",
        2 => "2 LIVES",
        _ => "3 LIVES",
    }
}

impl HudView {
    pub fn from_snapshot(snapshot: &FrameSnapshot) -> Self {
        let lives = if snapshot.status == GameStatus::Playing {
            (0..snapshot.max_lives).map(|i| i < snapshot.lives).collect()
        } else {
            Vec::new()
        };

        let screen = match snapshot.status {
            GameStatus::Loading => Screen::Loading {
                error: snapshot.camera_error.clone(),
            },
            GameStatus::Idle => Screen::Menu {
                difficulty: snapshot.difficulty,
                lives_label: lives_label(snapshot.difficulty),
            },
            GameStatus::Playing => Screen::None,
            GameStatus::GameOver => Screen::GameOver {
                difficulty: snapshot.difficulty,
                survived: format_time(snapshot.survival_time),
            },
        };

        Self {
            time: format_time(snapshot.survival_time),
            best: format_time(snapshot.best_time),
            lives,
            screen,
        }
    }
}
