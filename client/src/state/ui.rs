//! Local UI chrome state (splash, header, mobile menu, About tabs).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the content and widget
//! state so the chrome can evolve independently. Provided once from `App` as
//! an `RwSignal<UiState>`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::time::Duration;

/// How long the loading splash covers the first paint.
pub const LOADING_SPLASH: Duration = Duration::from_millis(1000);

/// Scroll offset past which the header switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 10.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub loading: bool,
    pub scrolled: bool,
    pub menu_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { loading: true, scrolled: false, menu_open: false }
    }
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Returns whether the header style changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = is_scrolled(scroll_y);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Tabs on the About page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AboutTab {
    #[default]
    Education,
    Experience,
    Skills,
    Achievements,
}

impl AboutTab {
    pub const ALL: [Self; 4] = [Self::Education, Self::Experience, Self::Skills, Self::Achievements];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Achievements => "Achievements",
        }
    }
}
