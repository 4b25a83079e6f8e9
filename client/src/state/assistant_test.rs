use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

// =============================================================
// Greeting and mood
// =============================================================

#[test]
fn greeting_boundaries() {
    assert_eq!(greeting(0), "Good morning");
    assert_eq!(greeting(11), "Good morning");
    assert_eq!(greeting(12), "Good afternoon");
    assert_eq!(greeting(17), "Good afternoon");
    assert_eq!(greeting(18), "Good evening");
    assert_eq!(greeting(23), "Good evening");
}

#[test]
fn greeting_message_names_user() {
    let msg = greeting_message(8, DEFAULT_USER_NAME);
    assert!(msg.starts_with("Good morning, Designer! I'm your design assistant."));
}

#[test]
fn mood_by_hour() {
    assert_eq!(Mood::for_hour(3), Mood::Neutral);
    assert_eq!(Mood::for_hour(6), Mood::Neutral);
    assert_eq!(Mood::for_hour(7), Mood::Curious);
    assert_eq!(Mood::for_hour(9), Mood::Curious);
    assert_eq!(Mood::for_hour(10), Mood::Happy);
    assert_eq!(Mood::for_hour(16), Mood::Happy);
    assert_eq!(Mood::for_hour(17), Mood::Curious);
    assert_eq!(Mood::for_hour(22), Mood::Curious);
    assert_eq!(Mood::for_hour(23), Mood::Neutral);
}

#[test]
fn mood_emoji_distinct() {
    assert_ne!(Mood::Happy.emoji(), Mood::Neutral.emoji());
    assert_ne!(Mood::Neutral.emoji(), Mood::Curious.emoji());
}

// =============================================================
// Tips
// =============================================================

#[test]
fn random_tip_comes_from_list() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..50 {
        assert!(TIPS.contains(&random_tip(&mut rng)));
    }
}

#[test]
fn random_tip_is_deterministic_for_seed() {
    let mut a = SmallRng::seed_from_u64(42);
    let mut b = SmallRng::seed_from_u64(42);
    let left: Vec<_> = (0..10).map(|_| random_tip(&mut a)).collect();
    let right: Vec<_> = (0..10).map(|_| random_tip(&mut b)).collect();
    assert_eq!(left, right);
}

// =============================================================
// Panel transitions
// =============================================================

#[test]
fn toggle_opens_then_closes() {
    let mut panel = PanelState::default();
    assert_eq!(panel.toggle(), PanelEvent::Opened);
    assert!(panel.expanded());
    assert_eq!(panel.toggle(), PanelEvent::Closed);
    assert!(!panel.open);
}

#[test]
fn opening_plays_open_and_shows_tip() {
    assert_eq!(PanelEvent::Opened.cue(), Some(SoundEffect::Open));
    assert!(PanelEvent::Opened.shows_tip());
    assert!(!PanelEvent::Restored.shows_tip());
    assert_eq!(PanelEvent::Closed.cue(), Some(SoundEffect::Close));
    assert_eq!(PanelEvent::Minimized.cue(), Some(SoundEffect::Minimize));
    assert_eq!(PanelEvent::Unchanged.cue(), None);
}

#[test]
fn minimize_hides_body_but_stays_open() {
    let mut panel = PanelState::default();
    panel.toggle();
    assert_eq!(panel.minimize(), PanelEvent::Minimized);
    assert!(panel.open);
    assert!(!panel.expanded());
}

#[test]
fn avatar_click_restores_minimized_panel() {
    let mut panel = PanelState { open: true, minimized: true };
    assert_eq!(panel.avatar_click(), PanelEvent::Restored);
    assert!(panel.expanded());
}

#[test]
fn avatar_click_opens_closed_panel() {
    let mut panel = PanelState::default();
    assert_eq!(panel.avatar_click(), PanelEvent::Opened);
    assert!(panel.open);
}

#[test]
fn avatar_click_on_open_panel_is_noop() {
    let mut panel = PanelState { open: true, minimized: false };
    assert_eq!(panel.avatar_click(), PanelEvent::Unchanged);
    assert_eq!(panel, PanelState { open: true, minimized: false });
}

#[test]
fn toggle_clears_minimized() {
    let mut panel = PanelState { open: true, minimized: true };
    assert_eq!(panel.toggle(), PanelEvent::Closed);
    assert!(!panel.minimized);
}
