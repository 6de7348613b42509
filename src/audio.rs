//! Audio trigger layer.
//!
//! Consumes [`GameEvent`]s from the engine: `SessionStart` begins the looping
//! background music, `GameOver` stops it and plays a one-shot jingle. Every
//! failure here (no audio backend, missing asset files, playback errors) is
//! logged and otherwise ignored; gameplay never depends on audio outcome.

use kira::{
    manager::{backend::DefaultBackend, AudioManager, AudioManagerSettings},
    sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings},
    tween::Tween,
    Volume,
};

use crate::types::GameEvent;

const MUSIC_PATH: &str = "assets/game-music.ogg";
const GAME_OVER_PATH: &str = "assets/game-over.ogg";

pub struct AudioSink {
    manager: Option<AudioManager>,
    music: Option<StaticSoundData>,
    game_over: Option<StaticSoundData>,
    music_handle: Option<StaticSoundHandle>,
    game_over_handle: Option<StaticSoundHandle>,
}

impl AudioSink {
    /// Construct the sink, preloading sounds.
    ///
    /// Never fails: a missing backend or missing assets leave the sink
    /// (partially) disabled.
    pub fn new() -> Self {
        let manager = match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(manager) => Some(manager),
            Err(e) => {
                log::warn!("audio backend unavailable, sound disabled: {e}");
                None
            }
        };

        let mut sink = Self {
            manager,
            music: None,
            game_over: None,
            music_handle: None,
            game_over_handle: None,
        };

        if sink.manager.is_some() {
            sink.music = load_sound(MUSIC_PATH);
            sink.game_over = load_sound(GAME_OVER_PATH);
        }
        sink
    }

    /// React to an engine phase transition.
    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::SessionStart => {
                if let Some(mut handle) = self.game_over_handle.take() {
                    let _ = handle.stop(Tween::default());
                }
                if let Some(data) = self.music.clone() {
                    let mut settings = StaticSoundSettings::default();
                    settings.volume = Volume::Amplitude(0.5).into();
                    settings.loop_region = Some((0.0..).into());
                    self.music_handle = self.play(data.with_settings(settings));
                }
            }
            GameEvent::GameOver => {
                if let Some(mut handle) = self.music_handle.take() {
                    let _ = handle.stop(Tween::default());
                }
                if let Some(data) = self.game_over.clone() {
                    let mut settings = StaticSoundSettings::default();
                    settings.volume = Volume::Amplitude(0.8).into();
                    self.game_over_handle = self.play(data.with_settings(settings));
                }
            }
        }
    }

    fn play(&mut self, data: StaticSoundData) -> Option<StaticSoundHandle> {
        let manager = self.manager.as_mut()?;
        match manager.play(data) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("audio playback failed: {e}");
                None
            }
        }
    }
}

impl Default for AudioSink {
    fn default() -> Self {
        Self::new()
    }
}

fn load_sound(path: &str) -> Option<StaticSoundData> {
    match StaticSoundData::from_file(path) {
        Ok(data) => Some(data),
        Err(e) => {
            log::warn!("failed to load {path}, continuing without it: {e}");
            None
        }
    }
}
