//! Fixed site header: brand, navigation, theme and sound toggles.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::use_preferences;
use crate::components::icons::{Icon, IconKind};
use crate::content::profile::NAV_LINKS;
use crate::state::ui::UiState;
use crate::util::scroll::window_scroll_y;
use crate::util::sound::{SoundEffect, use_cues};
use crate::util::theme::Theme;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let prefs = use_preferences();
    let cues = use_cues();

    let listener = window_event_listener(leptos::ev::scroll, move |_| {
        let y = window_scroll_y();
        if ui.with_untracked(|u| crate::state::ui::is_scrolled(y) != u.scrolled) {
            ui.update(|u| {
                u.on_scroll(y);
            });
        }
    });
    on_cleanup(move || listener.remove());

    let on_theme = move |_| {
        let next = prefs.theme().theme.next();
        prefs.choose_theme(next);
        cues.play(SoundEffect::Click);
    };
    let on_sound = move |_| {
        let enabled = !prefs.sound_enabled();
        prefs.set_sound_enabled(enabled);
        cues.play(SoundEffect::Click);
    };
    let on_menu = move |_| {
        ui.update(UiState::toggle_menu);
        cues.play(SoundEffect::Click);
    };

    let theme_icon = move || match prefs.theme().theme {
        Theme::Light => IconKind::Sun,
        Theme::Dark => IconKind::Moon,
        Theme::System => IconKind::Monitor,
    };
    let theme_title = move || format!("Theme: {}", prefs.theme().theme.label());

    view! {
        <header class="header" class:header--scrolled=move || ui.with(|u| u.scrolled)>
            <div class="header__inner">
                <A href="/" attr:class="header__brand">
                    <span class="header__logo">"A"</span>
                    <span class="header__name">"Aryan" <span class="text-primary">"Bansal"</span></span>
                </A>
                <nav class="header__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <A href=*href attr:class="header__link">
                                    <span>{*label}</span>
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="header__actions">
                    <button class="icon-button" title=theme_title on:click=on_theme>
                        {move || view! { <Icon kind=theme_icon()/> }}
                    </button>
                    <button
                        class="icon-button"
                        title=move || if prefs.sound_enabled() { "Mute sounds" } else { "Enable sounds" }
                        on:click=on_sound
                    >
                        {move || {
                            let kind = if prefs.sound_enabled() { IconKind::VolumeOn } else { IconKind::VolumeOff };
                            view! { <Icon kind=kind/> }
                        }}
                    </button>
                    <button class="icon-button header__menu-toggle" aria-label="Toggle menu" on:click=on_menu>
                        {move || {
                            let kind = if ui.with(|u| u.menu_open) { IconKind::Close } else { IconKind::Menu };
                            view! { <Icon kind=kind size=24/> }
                        }}
                    </button>
                </div>
            </div>
        </header>
    }
}
