//! Project index with category tabs and debounced search.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::project_card::ProjectCard;
use crate::content::projects;
use crate::state::catalog::{EMPTY_RESULTS, ProjectFilter, categories};
use crate::util::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::util::scroll::use_reveal_on_scroll;
use crate::util::sound::{SoundEffect, use_cues};
use crate::util::timer::BrowserScheduler;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let cues = use_cues();
    let filter = RwSignal::new(ProjectFilter::default());
    let search = RwSignal::new(String::new());
    let debouncer = StoredValue::new_local(Debouncer::new(BrowserScheduler, SEARCH_DEBOUNCE));
    use_reveal_on_scroll();

    on_cleanup(move || {
        let _ = debouncer.try_with_value(Debouncer::cancel);
    });

    let visible = Memo::new(move |_| {
        filter.with(|f| f.apply(projects::all()).into_iter().map(|p| p.id).collect::<Vec<_>>())
    });

    let on_search = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        search.set(value.clone());
        let _ = debouncer.try_with_value(|d| d.call(move || filter.update(|f| f.query = value)));
    };
    let clear = move |_| {
        let _ = debouncer.try_with_value(Debouncer::cancel);
        search.set(String::new());
        filter.update(ProjectFilter::clear);
        cues.play(SoundEffect::Click);
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Projects"</h1>
                <p class="text-muted">
                    "Explore my portfolio of design work spanning various disciplines, from digital interfaces to brand identities."
                </p>
            </header>

            <div class="filter-bar">
                <div class="filter-bar__categories">
                    {categories(projects::all())
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=move || filter.with(|f| f.category == category)
                                    on:click=move |_| {
                                        filter.update(|f| f.category = category.to_owned());
                                        cues.play(SoundEffect::Click);
                                    }
                                >
                                    {category}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <label class="search">
                    <Icon kind=IconKind::Search size=16/>
                    <input
                        type="search"
                        placeholder="Search projects..."
                        prop:value=move || search.get()
                        on:input=on_search
                    />
                </label>
            </div>

            <p class="filter-summary text-muted">
                {move || filter.with(|f| f.summary(visible.with(Vec::len)))}
                <Show when=move || filter.with(|f| !f.is_default()) && visible.with(|v| !v.is_empty())>
                    <button class="link-button" on:click=clear>"Clear filters"</button>
                </Show>
            </p>

            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        <p>{EMPTY_RESULTS}</p>
                        <button class="outline-button" on:click=clear>"Clear filters"</button>
                    </div>
                }
            >
                <div class="project-grid">
                    <For
                        each=move || visible.get()
                        key=|id| *id
                        children=move |id| projects::find(id).map(|project| view! { <ProjectCard project=project/> })
                    />
                </div>
            </Show>
        </div>
    }
}
