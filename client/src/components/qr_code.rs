//! Expandable QR code and copy-link panel for a project.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::toaster::notify;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::share::{copy_to_clipboard, current_origin, project_url, qr_code_url};
use crate::util::sound::{SoundEffect, use_cues};

pub const COPIED: &str = "Link copied to clipboard!";
pub const COPY_FAILED: &str = "Failed to copy link";

#[component]
pub fn QrCode(project_id: &'static str, title: &'static str) -> impl IntoView {
    let cues = use_cues();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let expanded = RwSignal::new(false);
    let origin = RwSignal::new(String::new());

    Effect::new(move || origin.set(current_origin()));

    let on_toggle = move |_| {
        let was_open = expanded.get_untracked();
        expanded.set(!was_open);
        cues.play(if was_open { SoundEffect::Close } else { SoundEffect::Open });
    };

    let on_copy = move |_| {
        let link = project_url(&origin.get_untracked(), project_id);
        leptos::task::spawn_local(async move {
            match copy_to_clipboard(&link).await {
                Ok(()) => {
                    notify(toasts, ToastKind::Success, COPIED, None);
                    cues.play(SoundEffect::Success);
                }
                Err(e) => {
                    leptos::logging::warn!("copy link failed: {e}");
                    notify(toasts, ToastKind::Error, COPY_FAILED, None);
                }
            }
        });
    };

    view! {
        <div class="qr">
            <button class="outline-button" on:click=on_toggle>
                <Icon kind=IconKind::QrCode size=16/>
                {move || if expanded.get() { "Hide QR Code" } else { "View QR Code" }}
            </button>
            <div class="qr__panel" class:qr__panel--open=move || expanded.get()>
                <p>"Scan this QR code to access the project on your mobile device or share it with others."</p>
                <div class="qr__content">
                    <div class="qr__image">
                        <img
                            src=move || qr_code_url(&origin.get(), project_id)
                            alt=format!("QR Code for {title}")
                        />
                    </div>
                    <div class="qr__copy">
                        <h4>"Connect Physical & Digital"</h4>
                        <p class="text-muted">
                            "Print this QR code and attach it to physical versions of this project to create a bridge between your physical portfolio and this digital showcase."
                        </p>
                        <button class="secondary-button" on:click=on_copy>
                            <Icon kind=IconKind::Link size=14/>
                            "Copy Direct Link"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
