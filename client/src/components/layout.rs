//! Page chrome shared by every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the routed page with the header, mobile menu, footer, the design
//! assistant, the presence indicator and the toast stack. On mount it
//! preloads the sound cues and lifts the loading splash after one second.

use leptos::prelude::*;

use crate::components::assistant::Assistant;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::mobile_menu::MobileMenu;
use crate::components::social_presence::SocialPresence;
use crate::components::toaster::Toaster;
use crate::state::ui::{LOADING_SPLASH, UiState};
use crate::util::sound::use_cues;
use crate::util::timer::{BrowserScheduler, Scheduler};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let cues = use_cues();
    let splash = StoredValue::new_local(None::<<BrowserScheduler as Scheduler>::Handle>);

    Effect::new(move || {
        cues.preload();
        let handle = BrowserScheduler.schedule(LOADING_SPLASH, move || {
            ui.update(|u| u.loading = false);
        });
        splash.set_value(Some(handle));
    });

    on_cleanup(move || {
        let _ = splash.try_update_value(Option::take);
    });

    let loading = move || ui.with(|u| u.loading);

    view! {
        <Show when=loading>
            <div class="splash">
                <div class="splash__logo">
                    <span>"D"</span>
                </div>
                <p class="splash__text">"Loading experience..."</p>
            </div>
        </Show>
        <div class="layout" class:layout--hidden=loading>
            <Header/>
            <MobileMenu/>
            <main class="layout__main">{children()}</main>
            <Footer/>
            <Assistant/>
            <SocialPresence/>
            <Toaster/>
        </div>
    }
}
