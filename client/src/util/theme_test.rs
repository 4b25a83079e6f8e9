use super::*;

#[test]
fn parse_accepts_stored_values_only() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("system"), Some(Theme::System));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn as_str_matches_parse() {
    for theme in [Theme::Light, Theme::Dark, Theme::System] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn next_cycles_through_all_three() {
    assert_eq!(Theme::Light.next(), Theme::Dark);
    assert_eq!(Theme::Dark.next(), Theme::System);
    assert_eq!(Theme::System.next(), Theme::Light);
}

#[test]
fn time_based_boundaries() {
    assert_eq!(time_based(5), Theme::Dark);
    assert_eq!(time_based(6), Theme::Light);
    assert_eq!(time_based(18), Theme::Light);
    assert_eq!(time_based(19), Theme::Dark);
    assert_eq!(time_based(0), Theme::Dark);
}

#[test]
fn system_theme_follows_os_preference() {
    assert!(resolve(Theme::System, true));
    assert!(!resolve(Theme::System, false));
    assert!(resolve(Theme::Dark, false));
    assert!(!resolve(Theme::Light, true));
}

#[test]
fn initial_prefers_stored_choice() {
    let state = ThemeState::initial(Some(Theme::Light), 23, true);
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.is_dark);
    assert!(state.user_chosen);
}

#[test]
fn initial_without_choice_uses_time_of_day() {
    let night = ThemeState::initial(None, 22, false);
    assert_eq!(night.theme, Theme::Dark);
    assert!(night.is_dark);
    assert!(!night.user_chosen);

    let noon = ThemeState::initial(None, 12, true);
    assert_eq!(noon.theme, Theme::Light);
    assert!(!noon.is_dark);
}

#[test]
fn tick_only_moves_unchosen_themes() {
    let auto = ThemeState::initial(None, 12, false);
    assert_eq!(auto.tick(20, false).theme, Theme::Dark);

    let chosen = ThemeState::choose(Theme::Light, false);
    assert_eq!(chosen.tick(20, false), chosen);
}

#[test]
fn choose_system_resolves_against_os() {
    let state = ThemeState::choose(Theme::System, true);
    assert!(state.is_dark);
    assert!(state.user_chosen);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_helpers_are_inert_natively() {
    assert!(!system_prefers_dark());
    apply(true);
    apply(false);
}
