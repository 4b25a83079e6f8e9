//! Decorative particle that backs away from the pointer.

use leptos::prelude::*;

use crate::util::motion::{particle_opacity, repel, window_viewport};

#[component]
pub fn RepulsiveParticle(
    #[prop(into, optional)] class: String,
    /// Starting position as a fraction of the viewport.
    #[prop(default = (0.5, 0.5))]
    start: (f64, f64),
) -> impl IntoView {
    let position = RwSignal::new(None::<(f64, f64)>);
    let opacity = RwSignal::new(1.0_f64);

    Effect::new(move || {
        let (width, height) = window_viewport();
        position.set(Some((start.0 * width, start.1 * height)));
    });

    let listener = window_event_listener(leptos::ev::mousemove, move |ev| {
        let Some(current) = position.get_untracked() else {
            return;
        };
        let pointer = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        let next = repel(current, pointer, window_viewport()).unwrap_or(current);
        if next != current {
            position.set(Some(next));
        }
        opacity.set(particle_opacity(next, pointer));
    });
    on_cleanup(move || listener.remove());

    let style = move || match position.get() {
        Some((x, y)) => format!("left: {x}px; top: {y}px; opacity: {}", opacity.get()),
        None => "visibility: hidden".to_owned(),
    };

    view! { <div class=format!("particle {class}") style=style></div> }
}
