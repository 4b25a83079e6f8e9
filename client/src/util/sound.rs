//! Interaction sound cues.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SoundBoard` is created once in `App` and shared through context. It
//! checks the visitor's sound preference on every play, keeps one preloaded
//! `<audio>` element per effect and plays a clone of it so cues can overlap.
//!
//! Browsers reject `play()` until the visitor has interacted with the page.
//! Those rejections are logged and dropped; they are never retried.

#[cfg(test)]
#[path = "sound_test.rs"]
mod sound_test;

use std::cell::Cell;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::collections::HashMap;

use leptos::prelude::*;

use crate::state::settings::Settings;

pub const DEFAULT_VOLUME: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Hover,
    Click,
    Notification,
    Open,
    Close,
    Minimize,
    Success,
    Pop,
}

impl SoundEffect {
    pub const ALL: [Self; 8] = [
        Self::Hover,
        Self::Click,
        Self::Notification,
        Self::Open,
        Self::Close,
        Self::Minimize,
        Self::Success,
        Self::Pop,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Click => "click",
            Self::Notification => "notification",
            Self::Open => "open",
            Self::Close => "close",
            Self::Minimize => "minimize",
            Self::Success => "success",
            Self::Pop => "pop",
        }
    }

    /// Asset path served by the host.
    #[must_use]
    pub fn path(self) -> String {
        format!("/sounds/{}.mp3", self.name())
    }
}

/// Clamp to `[0, 1]`; NaN is treated as silence.
#[must_use]
pub fn clamp_volume(volume: f64) -> f64 {
    if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// The visitor turned sound off.
    Muted,
    /// Playback was requested; it may still be rejected asynchronously.
    Started,
    /// No audio backend (SSR, tests, or element creation failed).
    Unavailable,
}

pub struct SoundBoard {
    settings: Settings,
    volume: Cell<f64>,
    #[cfg(feature = "hydrate")]
    cache: RefCell<HashMap<SoundEffect, web_sys::HtmlAudioElement>>,
}

impl SoundBoard {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            volume: Cell::new(DEFAULT_VOLUME),
            #[cfg(feature = "hydrate")]
            cache: RefCell::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.settings.sound_enabled()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.settings.set_sound_enabled(enabled);
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.volume.get()
    }

    /// Set the volume for every cached effect.
    pub fn set_volume(&self, volume: f64) {
        let volume = clamp_volume(volume);
        self.volume.set(volume);
        #[cfg(feature = "hydrate")]
        {
            for audio in self.cache.borrow().values() {
                audio.set_volume(volume);
            }
        }
    }

    /// Create the audio element for every effect ahead of first use.
    pub fn preload(&self) {
        #[cfg(feature = "hydrate")]
        {
            for effect in SoundEffect::ALL {
                let _ = self.cached(effect);
            }
        }
    }

    pub fn play(&self, effect: SoundEffect) -> Playback {
        if !self.enabled() {
            return Playback::Muted;
        }
        self.play_unmuted(effect)
    }

    #[cfg(feature = "hydrate")]
    fn cached(&self, effect: SoundEffect) -> Option<web_sys::HtmlAudioElement> {
        if let Some(audio) = self.cache.borrow().get(&effect) {
            return Some(audio.clone());
        }
        let audio = match web_sys::HtmlAudioElement::new_with_src(&effect.path()) {
            Ok(audio) => audio,
            Err(e) => {
                leptos::logging::warn!("audio element for {} failed: {e:?}", effect.name());
                return None;
            }
        };
        audio.set_volume(self.volume.get());
        self.cache.borrow_mut().insert(effect, audio.clone());
        Some(audio)
    }

    #[cfg(feature = "hydrate")]
    fn play_unmuted(&self, effect: SoundEffect) -> Playback {
        use wasm_bindgen::JsCast;

        let Some(audio) = self.cached(effect) else {
            return Playback::Unavailable;
        };
        let clone = match audio.clone_node() {
            Ok(node) => node.unchecked_into::<web_sys::HtmlAudioElement>(),
            Err(e) => {
                leptos::logging::warn!("audio clone for {} failed: {e:?}", effect.name());
                return Playback::Unavailable;
            }
        };
        clone.set_volume(audio.volume());
        match clone.play() {
            Ok(promise) => {
                leptos::task::spawn_local(async move {
                    if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        leptos::logging::log!("audio play error: {e:?}");
                    }
                });
                Playback::Started
            }
            Err(e) => {
                leptos::logging::log!("audio play error: {e:?}");
                Playback::Unavailable
            }
        }
    }

    #[cfg(not(feature = "hydrate"))]
    #[allow(clippy::unused_self)]
    fn play_unmuted(&self, effect: SoundEffect) -> Playback {
        let _ = effect;
        Playback::Unavailable
    }
}

/// Copyable context handle around the page's single [`SoundBoard`].
///
/// The board holds DOM audio elements, so it lives in local arena storage and
/// components reach it through this handle.
#[derive(Clone, Copy)]
pub struct Cues(StoredValue<SoundBoard, LocalStorage>);

impl Cues {
    pub fn new(board: SoundBoard) -> Self {
        Self(StoredValue::new_local(board))
    }

    /// Fire-and-forget cue. Silently skipped once the owner is disposed.
    pub fn play(self, effect: SoundEffect) {
        let _ = self.0.try_with_value(|board| board.play(effect));
    }

    pub fn set_enabled(self, enabled: bool) {
        let _ = self.0.try_with_value(|board| board.set_enabled(enabled));
    }

    pub fn preload(self) {
        let _ = self.0.try_with_value(SoundBoard::preload);
    }
}

pub fn use_cues() -> Cues {
    expect_context::<Cues>()
}
