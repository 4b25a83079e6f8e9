//! Button with hover and click cues.

use leptos::prelude::*;

use crate::util::sound::{SoundEffect, use_cues};

#[component]
pub fn InteractiveButton(
    #[prop(into, optional)] class: String,
    #[prop(default = "button")] button_type: &'static str,
    children: Children,
) -> impl IntoView {
    let cues = use_cues();
    view! {
        <button
            type=button_type
            class=format!("interactive-button {class}")
            on:mouseenter=move |_| cues.play(SoundEffect::Pop)
            on:click=move |_| cues.play(SoundEffect::Click)
        >
            {children()}
        </button>
    }
}

/// Anchor styled like [`InteractiveButton`].
#[component]
pub fn InteractiveLink(href: &'static str, #[prop(optional)] new_tab: bool, children: Children) -> impl IntoView {
    let cues = use_cues();
    view! {
        <a
            class="interactive-button"
            href=href
            target=new_tab.then_some("_blank")
            rel=new_tab.then_some("noopener noreferrer")
            on:mouseenter=move |_| cues.play(SoundEffect::Pop)
            on:click=move |_| cues.play(SoundEffect::Click)
        >
            {children()}
        </a>
    }
}
