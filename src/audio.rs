//! Background music collaborator
//!
//! The game only asks for two things: start the track when a run begins and
//! stop it when the run ends. Playback failures never block gameplay.

use thiserror::Error;

/// Default looping track
pub const BGM_URL: &str =
    "https://commondatastorage.googleapis.com/codeskulptor-demos/riceracer_assets/music/race2.ogg";

/// Default music volume (0.0 - 1.0)
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    /// No audio output could be created
    #[error("audio unavailable: {0}")]
    Unavailable(String),
    /// The platform refused to start playback (e.g. autoplay policy)
    #[error("playback rejected: {0}")]
    Rejected(String),
}

/// Something that can play the background track
pub trait AudioSink {
    /// Restart the track from the beginning
    fn play(&mut self) -> Result<(), AudioError>;
    /// Stop the track
    fn stop(&mut self);
    /// Set volume (0.0 - 1.0)
    fn set_volume(&mut self, _volume: f32) {}
}

/// No-op sink for native builds and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn stop(&mut self) {}
}

/// A sink that may have failed to initialize
impl<S: AudioSink> AudioSink for Option<S> {
    fn play(&mut self) -> Result<(), AudioError> {
        match self {
            Some(sink) => sink.play(),
            None => Err(AudioError::Unavailable("no audio output".into())),
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self {
            sink.stop();
        }
    }

    fn set_volume(&mut self, volume: f32) {
        if let Some(sink) = self {
            sink.set_volume(volume);
        }
    }
}

/// Looping `<audio>` element (browser only)
#[cfg(target_arch = "wasm32")]
pub struct MusicTrack {
    element: web_sys::HtmlAudioElement,
}

#[cfg(target_arch = "wasm32")]
impl MusicTrack {
    pub fn new(url: &str) -> Result<Self, AudioError> {
        let element = web_sys::HtmlAudioElement::new_with_src(url)
            .map_err(|e| AudioError::Unavailable(format!("{:?}", e)))?;
        element.set_loop(true);
        element.set_volume(DEFAULT_MUSIC_VOLUME as f64);
        Ok(Self { element })
    }
}

#[cfg(target_arch = "wasm32")]
impl AudioSink for MusicTrack {
    fn play(&mut self) -> Result<(), AudioError> {
        self.element.set_current_time(0.0);
        let promise = self
            .element
            .play()
            .map_err(|e| AudioError::Rejected(format!("{:?}", e)))?;

        // Autoplay rejections arrive asynchronously
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!("Audio play failed: {:?}", e);
            }
        });
        Ok(())
    }

    fn stop(&mut self) {
        if let Err(e) = self.element.pause() {
            log::warn!("Audio pause failed: {:?}", e);
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.element.set_volume(volume.clamp(0.0, 1.0) as f64);
    }
}
