//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::pages::{
    about::AboutPage, contact::ContactPage, home::HomePage, not_found::NotFoundPage,
    project_detail::ProjectDetailPage, projects::ProjectsPage,
};
use crate::state::settings::Settings;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::clock;
use crate::util::sound::{Cues, SoundBoard};
use crate::util::theme::{self, Theme, ThemeState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the visitor's settings and sound board once and provides them, with
/// the theme, toast and chrome signals, to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let settings = Settings::browser();
    let cues = Cues::new(SoundBoard::new(settings.clone()));
    let settings = StoredValue::new_local(settings);

    // Placeholders until the browser values are read after hydration, so the
    // server render and the first client render agree.
    let theme = RwSignal::new(ThemeState::choose(Theme::System, false));
    let sound_on = RwSignal::new(true);
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(settings);
    provide_context(cues);
    provide_context(Preferences { settings, theme, sound_on, cues });
    provide_context(ui);
    provide_context(toasts);

    Effect::new(move |_| {
        settings.with_value(|s| {
            theme.set(ThemeState::initial(
                s.stored_theme(),
                clock::local_hour(),
                theme::system_prefers_dark(),
            ));
            sound_on.set(s.sound_enabled());
        });
    });

    Effect::new(move |_| theme::apply(theme.get().is_dark));

    #[cfg(feature = "hydrate")]
    {
        let check = gloo_timers::callback::Interval::new(
            crate::util::timer::delay_millis(theme::TIME_CHECK_INTERVAL),
            move || {
                theme.update(|t| *t = t.tick(clock::local_hour(), theme::system_prefers_dark()));
            },
        );
        let check = StoredValue::new_local(Some(check));
        on_cleanup(move || {
            let _ = check.try_update_value(Option::take);
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Design Journal"/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectDetailPage/>
                </Routes>
            </Layout>
        </Router>
    }
}

/// Visitor preferences: theme and sound, persisted through [`Settings`].
///
/// Resolve with [`use_preferences`] during component setup; event handlers
/// run outside the reactive owner and cannot look up context themselves.
#[derive(Clone, Copy)]
pub struct Preferences {
    settings: StoredValue<Settings, LocalStorage>,
    theme: RwSignal<ThemeState>,
    sound_on: RwSignal<bool>,
    cues: Cues,
}

impl Preferences {
    pub fn theme(self) -> ThemeState {
        self.theme.get()
    }

    pub fn choose_theme(self, next: Theme) {
        self.settings.with_value(|s| s.set_theme(next));
        self.theme.set(ThemeState::choose(next, theme::system_prefers_dark()));
    }

    pub fn sound_enabled(self) -> bool {
        self.sound_on.get()
    }

    pub fn set_sound_enabled(self, enabled: bool) {
        self.cues.set_enabled(enabled);
        self.sound_on.set(enabled);
    }
}

pub fn use_preferences() -> Preferences {
    expect_context::<Preferences>()
}
