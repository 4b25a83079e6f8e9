//! Theme preference resolution and application.
//!
//! Reads the user's preference from `localStorage` (via `Settings`) and
//! applies a `light`/`dark` class to the `<html>` element. When the user has
//! never chosen a theme, the page follows the time of day and re-checks every
//! hour.
//!
//! TRADE-OFFS
//! ==========
//! Browser access is hydrate-only; SSR paths no-op and assume a light system
//! scheme so server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::time::Duration;

/// How often the time-of-day theme is re-evaluated.
pub const TIME_CHECK_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Header toggle order: light, dark, system.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light theme",
            Self::Dark => "Dark theme",
            Self::System => "System theme",
        }
    }
}

/// Dark from 19:00 until 06:00, light otherwise.
#[must_use]
pub fn time_based(hour: u32) -> Theme {
    if hour >= 19 || hour < 6 { Theme::Dark } else { Theme::Light }
}

/// Whether `theme` renders dark given the system color-scheme preference.
#[must_use]
pub fn resolve(theme: Theme, system_prefers_dark: bool) -> bool {
    match theme {
        Theme::Light => false,
        Theme::Dark => true,
        Theme::System => system_prefers_dark,
    }
}

/// Current theme choice and its resolved appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    pub is_dark: bool,
    /// The user explicitly picked `theme` at some point.
    pub user_chosen: bool,
}

impl ThemeState {
    /// Stored choice if any, otherwise the time-of-day theme.
    #[must_use]
    pub fn initial(stored: Option<Theme>, hour: u32, system_prefers_dark: bool) -> Self {
        match stored {
            Some(theme) => Self { theme, is_dark: resolve(theme, system_prefers_dark), user_chosen: true },
            None => {
                let theme = time_based(hour);
                Self { theme, is_dark: resolve(theme, system_prefers_dark), user_chosen: false }
            }
        }
    }

    #[must_use]
    pub fn choose(theme: Theme, system_prefers_dark: bool) -> Self {
        Self { theme, is_dark: resolve(theme, system_prefers_dark), user_chosen: true }
    }

    /// Hourly re-check. Explicit choices are left alone.
    #[must_use]
    pub fn tick(self, hour: u32, system_prefers_dark: bool) -> Self {
        if self.user_chosen {
            return self;
        }
        let theme = time_based(hour);
        Self { theme, is_dark: resolve(theme, system_prefers_dark), user_chosen: false }
    }
}

/// Whether the OS reports a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Swap the `light`/`dark` class on the `<html>` element.
pub fn apply(is_dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let class_list = el.class_list();
            let _ = class_list.remove_2("light", "dark");
            let _ = class_list.add_1(if is_dark { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = is_dark;
    }
}
