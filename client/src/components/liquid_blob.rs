//! Soft background blob that drifts toward the pointer.

use leptos::prelude::*;

use crate::util::motion::{blob_transform, window_viewport};

#[component]
pub fn LiquidBlob(#[prop(into, optional)] class: String) -> impl IntoView {
    let transform = RwSignal::new(String::new());

    let listener = window_event_listener(leptos::ev::mousemove, move |ev| {
        let (width, height) = window_viewport();
        transform.set(blob_transform(f64::from(ev.client_x()), f64::from(ev.client_y()), width, height));
    });
    on_cleanup(move || listener.remove());

    view! {
        <div class=format!("blob {class}") style:transform=move || transform.get()></div>
    }
}
