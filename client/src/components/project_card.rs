//! Project card with a pointer-following 3D tilt.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::projects::Project;
use crate::util::motion::{TILT_RESET, is_touch_device};
use crate::util::share::project_path;
use crate::util::sound::{SoundEffect, use_cues};

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let cues = use_cues();
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let touch = RwSignal::new(false);
    let transform = RwSignal::new(String::new());

    Effect::new(move || touch.set(is_touch_device()));

    let on_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::motion::{Rect, relative_offset, tilt_transform};

            if touch.get_untracked() {
                return;
            }
            let Some(card) = card_ref.get_untracked() else {
                return;
            };
            let bounds = card.get_bounding_client_rect();
            let rect = Rect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            };
            let (x, y) = relative_offset(rect, f64::from(ev.client_x()), f64::from(ev.client_y()));
            transform.set(tilt_transform(x, y));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, card_ref);
        }
    };
    let on_leave = move |_| {
        if !touch.get_untracked() {
            transform.set(TILT_RESET.to_owned());
        }
    };

    view! {
        <div class="scroll-reveal">
            <div
                node_ref=card_ref
                class="project-card"
                style:transform=move || transform.get()
                on:mousemove=on_move
                on:mouseleave=on_leave
                on:mouseenter=move |_| cues.play(SoundEffect::Hover)
            >
                <A href=project_path(project.id) on:click=move |_| cues.play(SoundEffect::Click)>
                    <div class="project-card__media">
                        <img src=project.image_url alt=project.title loading="lazy"/>
                        <span class="project-card__date">{project.date}</span>
                    </div>
                    <div class="project-card__body">
                        <span class="badge">{project.category}</span>
                        <h3 class="project-card__title">{project.title}</h3>
                        <p class="project-card__description">{project.description}</p>
                    </div>
                </A>
            </div>
        </div>
    }
}
