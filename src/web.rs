//! Browser bindings
//!
//! The JavaScript host owns the camera, hand-landmark model and 3D scene. It
//! feeds hand positions in whenever the model produces them, calls `tick` from
//! its frame callback and reads the snapshot back out.

use wasm_bindgen::prelude::*;

use crate::audio::{BGM_URL, MusicTrack};
use crate::game::Game;
use crate::renderer::{SceneView, WallInstance, build_instances};
use crate::settings::Settings;
use crate::sim::{Difficulty, HandSample, SeededAngles, TickInput};
use crate::ui::HudView;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Imitation Hexagon starting...");
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct HexGame {
    game: Game<SeededAngles, Option<MusicTrack>>,
    /// Latest frame from the hand tracker
    hands: HandSample,
}

#[wasm_bindgen]
impl HexGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> HexGame {
        let seed = js_sys::Date::now() as u64;
        let track = match MusicTrack::new(BGM_URL) {
            Ok(track) => Some(track),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        };
        log::info!("New game with seed: {}", seed);
        HexGame {
            game: Game::new(SeededAngles::new(seed), track, Settings::load()),
            hands: HandSample::default(),
        }
    }

    pub fn camera_ready(&mut self) {
        self.game.camera_ready();
    }

    pub fn camera_failed(&mut self, message: String) {
        self.game.camera_failed(message);
    }

    /// Latest tracker frame: `[x, y, z]` per hand, `undefined` for a hand
    /// that is not visible. Replaces the previous frame entirely.
    pub fn set_hands(&mut self, left: Option<Vec<f32>>, right: Option<Vec<f32>>) {
        self.hands = HandSample::from_coords(left.as_deref(), right.as_deref());
    }

    pub fn select_difficulty(&mut self, name: &str) -> Result<(), JsValue> {
        let difficulty = Difficulty::from_str(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown difficulty '{}'", name)))?;
        self.game.select_difficulty(difficulty).map_err(js_err)
    }

    /// Start or retry. Returns the run id.
    pub fn start(&mut self) -> Result<f64, JsValue> {
        self.game.start().map(|id| id as f64).map_err(js_err)
    }

    pub fn return_to_menu(&mut self) -> Result<(), JsValue> {
        self.game.return_to_menu().map_err(js_err)
    }

    /// Advance one frame. Returns true when the run ended this frame.
    pub fn tick(&mut self, dt: f32, clock: f64) -> bool {
        let input = TickInput {
            dt,
            clock,
            hands: Some(self.hands),
        };
        self.game.tick(&input).game_over
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.game.snapshot().to_json().map_err(js_err)
    }

    pub fn hud_json(&self) -> Result<String, JsValue> {
        let hud = HudView::from_snapshot(&self.game.snapshot());
        serde_json::to_string(&hud).map_err(js_err)
    }

    pub fn scene_json(&self) -> Result<String, JsValue> {
        SceneView::from_snapshot(&self.game.snapshot())
            .to_json()
            .map_err(js_err)
    }

    /// Packed `WallInstance` bytes (32 bytes per wall)
    pub fn wall_instances(&self) -> Vec<u8> {
        let instances = build_instances(&self.game.snapshot());
        bytemuck::cast_slice::<WallInstance, u8>(&instances).to_vec()
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        let mut settings = self.game.settings().clone();
        settings.reduced_motion = enabled;
        self.game.apply_settings(settings);
    }

    pub fn set_muted(&mut self, muted: bool) {
        let mut settings = self.game.settings().clone();
        settings.muted = muted;
        self.game.apply_settings(settings);
    }
}

impl Default for HexGame {
    fn default() -> Self {
        Self::new()
    }
}
