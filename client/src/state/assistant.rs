//! Design assistant widget state.
//!
//! DESIGN
//! ======
//! The floating assistant is a small panel state machine plus a fixed set of
//! canned messages. Everything here is pure: the component owns the timers,
//! the message display and the sound board, and asks this module what to say
//! and which cue to play for each interaction.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::util::sound::SoundEffect;

pub const DEFAULT_USER_NAME: &str = "Designer";
pub const GREETING_DELAY: Duration = Duration::from_millis(3000);
pub const WAVE_DURATION: Duration = Duration::from_millis(2000);

pub const TIPS: [&str; 6] = [
    "Try exploring the projects section to see my design evolution.",
    "The portfolio adapts to your device and time of day.",
    "Notice how the interface provides visual feedback as you interact with it.",
    "Each project card features 3D transformations on hover.",
    "You can scan QR codes to connect digital content with physical projects.",
    "The site uses multiple interaction modalities: visual, audio, and gesture.",
];

pub const NAVIGATION_HELP: &str = "Navigate through the sections using the menu. Hover over project cards to see the 3D effect. Try scanning QR codes for additional content.";

pub const ABOUT_PORTFOLIO: &str = "This portfolio showcases my design process and evolution. It features multiple interaction modalities and integrates context-aware design principles.";

/// Salutation for the local hour.
#[must_use]
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

#[must_use]
pub fn greeting_message(hour: u32, user: &str) -> String {
    format!(
        "{}, {user}! I'm your design assistant. Click on me if you need help navigating the portfolio or want to learn more about the design process.",
        greeting(hour)
    )
}

pub fn random_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TIPS.choose(rng).copied().unwrap_or(TIPS[0])
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Neutral,
    Curious,
}

impl Mood {
    #[must_use]
    pub fn for_hour(hour: u32) -> Self {
        if hour < 7 || hour > 22 {
            Self::Neutral
        } else if hour > 9 && hour < 17 {
            Self::Happy
        } else {
            Self::Curious
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Neutral => "😌",
            Self::Curious => "🤔",
        }
    }
}

/// Outcome of a panel interaction, used to pick the sound cue and decide
/// whether a tip should be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelEvent {
    Opened,
    Closed,
    Minimized,
    Restored,
    /// The click changed nothing (avatar clicked while the panel is open).
    Unchanged,
}

impl PanelEvent {
    #[must_use]
    pub fn cue(self) -> Option<SoundEffect> {
        match self {
            Self::Opened | Self::Restored => Some(SoundEffect::Open),
            Self::Closed => Some(SoundEffect::Close),
            Self::Minimized => Some(SoundEffect::Minimize),
            Self::Unchanged => None,
        }
    }

    /// Opening the panel greets the visitor with a random tip.
    #[must_use]
    pub fn shows_tip(self) -> bool {
        self == Self::Opened
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    pub open: bool,
    pub minimized: bool,
}

impl PanelState {
    /// Panel body is rendered only while open and not minimized.
    #[must_use]
    pub fn expanded(self) -> bool {
        self.open && !self.minimized
    }

    /// Close button and initial avatar click. Always clears minimization.
    pub fn toggle(&mut self) -> PanelEvent {
        let event = if self.open { PanelEvent::Closed } else { PanelEvent::Opened };
        self.open = !self.open;
        self.minimized = false;
        event
    }

    pub fn minimize(&mut self) -> PanelEvent {
        self.minimized = true;
        PanelEvent::Minimized
    }

    pub fn avatar_click(&mut self) -> PanelEvent {
        if self.minimized {
            self.minimized = false;
            PanelEvent::Restored
        } else if !self.open {
            self.toggle()
        } else {
            PanelEvent::Unchanged
        }
    }
}
