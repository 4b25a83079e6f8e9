//! Slide-in navigation for narrow viewports.
//!
//! While open, page scrolling is locked by setting `overflow: hidden` on the
//! body; closing or unmounting restores it.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::profile::{NAV_LINKS, SITE_NAME};
use crate::state::ui::UiState;

fn lock_body_scroll(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let value = if locked { "hidden" } else { "" };
            if let Err(e) = body.style().set_property("overflow", value) {
                leptos::logging::warn!("body scroll lock failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

#[component]
pub fn MobileMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = move || ui.with(|u| u.menu_open);

    Effect::new(move || lock_body_scroll(open()));
    on_cleanup(|| lock_body_scroll(false));

    let close = move |_| ui.update(UiState::close_menu);

    view! {
        <Show when=open>
            <div class="mobile-menu__backdrop" on:click=close></div>
            <div class="mobile-menu">
                <nav class="mobile-menu__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <A href=*href attr:class="mobile-menu__link" on:click=close>
                                    {*label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="mobile-menu__footer">
                    <p>{format!("© 2025 {SITE_NAME}")}</p>
                    <p>"An interactive portfolio showcasing design evolution"</p>
                </div>
            </div>
        </Show>
    }
}
