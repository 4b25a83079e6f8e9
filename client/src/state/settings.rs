//! Persisted visitor preferences.
//!
//! DESIGN
//! ======
//! `Settings` is constructed once in `App` over a `KeyValueStore` and handed
//! down through context. Nothing reads storage directly; preference keys and
//! their encodings live here.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::rc::Rc;

use crate::util::storage::{BrowserStore, KeyValueStore};
use crate::util::theme::Theme;

pub const SOUND_KEY: &str = "audioEnabled";
pub const THEME_KEY: &str = "theme";
pub const VISITOR_KEY: &str = "visitorId";

#[derive(Clone)]
pub struct Settings {
    store: Rc<dyn KeyValueStore>,
}

impl Settings {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Settings backed by `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStore))
    }

    #[must_use]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Sound cues are on unless explicitly stored as `"false"`.
    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.store.get(SOUND_KEY).as_deref() != Some("false")
    }

    pub fn set_sound_enabled(&self, enabled: bool) {
        self.store.set(SOUND_KEY, if enabled { "true" } else { "false" });
    }

    /// Explicitly chosen theme. Unknown stored values read as no choice.
    #[must_use]
    pub fn stored_theme(&self) -> Option<Theme> {
        self.store.get(THEME_KEY).as_deref().and_then(Theme::parse)
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }

    /// Opaque per-browser id, created and stored on first use.
    #[must_use]
    pub fn visitor_id(&self) -> String {
        if let Some(id) = self.store.get(VISITOR_KEY).filter(|id| !id.is_empty()) {
            return id;
        }
        let id = uuid::Uuid::new_v4().simple().to_string();
        self.store.set(VISITOR_KEY, &id);
        id
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("sound_enabled", &self.sound_enabled())
            .field("theme", &self.stored_theme())
            .finish()
    }
}
