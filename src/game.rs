//! Game driver
//!
//! Owns the simulation state together with its collaborators (gap randomness,
//! background music, preferences) and turns session events into collaborator
//! calls. Hosts call the actions from their UI and `tick` once per frame.

use crate::audio::{AudioSink, SilentAudio};
use crate::settings::Settings;
use crate::sim::{
    AngleSource, Difficulty, FrameSnapshot, GameState, SeededAngles, SessionError, TickInput,
    TickReport, tick,
};

pub struct Game<A: AngleSource, S: AudioSink> {
    state: GameState,
    angles: A,
    audio: S,
    settings: Settings,
}

impl Game<SeededAngles, SilentAudio> {
    /// Headless game with seeded gaps and no audio
    pub fn headless(seed: u64) -> Self {
        Self::new(SeededAngles::new(seed), SilentAudio, Settings::default())
    }
}

impl<A: AngleSource, S: AudioSink> Game<A, S> {
    pub fn new(angles: A, mut audio: S, settings: Settings) -> Self {
        let mut state = GameState::new();
        state.difficulty = settings.difficulty;
        audio.set_volume(settings.effective_volume());
        Self {
            state,
            angles,
            audio,
            settings,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace preferences (volume applies immediately)
    pub fn apply_settings(&mut self, settings: Settings) {
        self.audio.set_volume(settings.effective_volume());
        self.settings = settings;
        self.settings.save();
    }

    pub fn camera_ready(&mut self) {
        self.state.camera_ready();
    }

    pub fn camera_failed(&mut self, message: impl Into<String>) {
        self.state.camera_failed(message);
    }

    /// Change difficulty from the menu and remember it
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> Result<(), SessionError> {
        self.state.select_difficulty(difficulty)?;
        if self.settings.difficulty != difficulty {
            self.settings.difficulty = difficulty;
            self.settings.save();
        }
        Ok(())
    }

    /// Start (or retry) a run. Music failing to start does not stop the run.
    pub fn start(&mut self) -> Result<u64, SessionError> {
        let run_id = self.state.start()?;
        if let Err(e) = self.audio.play() {
            log::warn!("Audio play failed: {}", e);
        }
        Ok(run_id)
    }

    pub fn return_to_menu(&mut self) -> Result<(), SessionError> {
        self.state.return_to_menu()
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &TickInput) -> TickReport {
        let report = tick(&mut self.state, input, &mut self.angles);
        if report.game_over {
            self.audio.stop();
        }
        report
    }

    /// Owned copy of the current frame for renderers and HUDs
    pub fn snapshot(&self) -> FrameSnapshot {
        let mut snapshot = FrameSnapshot::capture(&self.state);
        snapshot.shake = self.settings.effective_shake(snapshot.shake);
        snapshot
    }
}
