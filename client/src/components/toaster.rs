//! Toast stack rendered in the corner of every page.
//!
//! Each toast arms its own expiry timer when it first appears; the timer is
//! dropped if the toast is dismissed early or the stack unmounts.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::state::toast::{TOAST_LIFETIME, ToastKind, ToastState};
use crate::util::timer::{BrowserScheduler, Scheduler};

type TimerMap = HashMap<u64, <BrowserScheduler as Scheduler>::Handle>;

/// Push a toast onto the shared stack.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, title: &str, description: Option<&str>) {
    toasts.update(|t| {
        t.push(kind, title, description.map(str::to_owned));
    });
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let timers = StoredValue::new_local(TimerMap::new());

    Effect::new(move |_| {
        let ids: Vec<u64> = toasts.with(|t| t.toasts.iter().map(|toast| toast.id).collect());
        timers.update_value(|timers| {
            timers.retain(|id, _| ids.contains(id));
            for id in ids {
                timers.entry(id).or_insert_with(|| {
                    BrowserScheduler.schedule(TOAST_LIFETIME, move || {
                        toasts.update(|t| {
                            t.dismiss(id);
                        });
                    })
                });
            }
        });
    });

    on_cleanup(move || {
        let _ = timers.try_update_value(HashMap::clear);
    });

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class()>
                            <div class="toast__body">
                                <p class="toast__title">{toast.title}</p>
                                {toast.description.map(|d| view! { <p class="toast__description">{d}</p> })}
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|t| {
                                    t.dismiss(id);
                                })
                            >
                                <Icon kind=IconKind::Close size=14/>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
