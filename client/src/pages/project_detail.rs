//! Case study page for a single project.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::icons::{Icon, IconKind};
use crate::components::qr_code::QrCode;
use crate::content::projects::{self, Project};
use crate::util::sound::{SoundEffect, use_cues};

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project = Memo::new(move |_| params.with(|p| p.get("id")).and_then(|id| projects::find(&id)));

    move || match project.get() {
        Some(project) => view! { <ProjectView project=project/> }.into_any(),
        None => view! { <MissingProject/> }.into_any(),
    }
}

#[component]
fn MissingProject() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h1>"Project Not Found"</h1>
            <p class="text-muted">"The project you're looking for doesn't exist or has been removed."</p>
            <A href="/projects" attr:class="primary-button">
                "View All Projects"
            </A>
        </div>
    }
}

#[component]
fn ProjectView(project: &'static Project) -> impl IntoView {
    let cues = use_cues();
    let selected = RwSignal::new(project.default_image());
    let detail = project.detail.as_ref();

    let gallery = project.gallery();
    let thumbnails = gallery
        .iter()
        .map(|image| {
            let image = *image;
            view! {
                <button
                    class="gallery__thumb"
                    class:gallery__thumb--active=move || selected.get() == image
                    on:click=move |_| {
                        selected.set(image);
                        cues.play(SoundEffect::Click);
                    }
                >
                    <img src=image alt=format!("{} preview", project.title) loading="lazy"/>
                </button>
            }
        })
        .collect_view();

    let paragraphs = detail.map_or(&[][..], |d| d.paragraphs);
    let body = if paragraphs.is_empty() { &[project.description][..] } else { paragraphs };

    view! {
        <div class="page">
            <A href="/projects" attr:class="back-link" on:click=move |_| cues.play(SoundEffect::Click)>
                <Icon kind=IconKind::ArrowLeft size=16/>
                "Back to Projects"
            </A>

            <div class="project-detail">
                <article class="project-detail__main">
                    <h1>{project.title}</h1>
                    <div class="project-detail__cover">
                        <img src=move || selected.get() alt=project.title/>
                    </div>
                    {(!gallery.is_empty()).then(|| view! { <div class="gallery">{thumbnails}</div> })}
                    <div class="prose">
                        {body.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </div>
                    <QrCode project_id=project.id title=project.title/>
                </article>

                <aside class="project-detail__sidebar card">
                    <h2>"Project Details"</h2>
                    <dl>
                        <dt><Icon kind=IconKind::Tag size=16/>"Category"</dt>
                        <dd>{project.category}</dd>
                        <dt><Icon kind=IconKind::Calendar size=16/>"Date"</dt>
                        <dd>{project.date}</dd>
                        {detail
                            .and_then(|d| d.client)
                            .map(|client| view! {
                                <dt><Icon kind=IconKind::Users size=16/>"Client"</dt>
                                <dd>{client}</dd>
                            })}
                    </dl>
                    {detail
                        .filter(|d| !d.tools.is_empty())
                        .map(|d| view! {
                            <h3>"Tools Used"</h3>
                            <ul class="tag-list">
                                {d.tools.iter().map(|tool| view! { <li class="chip">{*tool}</li> }).collect_view()}
                            </ul>
                        })}
                </aside>
            </div>
        </div>
    }
}
