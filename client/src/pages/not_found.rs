use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::liquid_blob::LiquidBlob;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <LiquidBlob/>
            <h1 class="text-gradient">"404"</h1>
            <p class="text-muted">"Oops! This page seems to have wandered off."</p>
            <A href="/" attr:class="primary-button">
                "Return Home"
            </A>
        </div>
    }
}
