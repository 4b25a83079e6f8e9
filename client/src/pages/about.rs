//! About page: intro, resume download and the tabbed background sections.

use leptos::prelude::*;

use crate::components::interactive_button::InteractiveLink;
use crate::components::liquid_blob::LiquidBlob;
use crate::content::profile::{
    ACHIEVEMENTS, EDUCATION, ELECTIVES, EXPERIENCE, INTERESTS, POSITIONS, RESUME_URL, SKILLS,
};
use crate::state::ui::AboutTab;
use crate::util::scroll::use_reveal_on_scroll;
use crate::util::sound::{SoundEffect, use_cues};

#[component]
pub fn AboutPage() -> impl IntoView {
    let cues = use_cues();
    let tab = RwSignal::new(AboutTab::default());
    use_reveal_on_scroll();

    view! {
        <div class="page about">
            <LiquidBlob class="blob--about"/>
            <header class="page__header">
                <h1>"About Me"</h1>
                <p class="text-muted">
                    "I'm a computer science and design student who enjoys building interfaces that feel considered, from the first sketch to the last line of code."
                </p>
                <InteractiveLink href=RESUME_URL new_tab=true>
                    "Download Resume"
                </InteractiveLink>
            </header>

            <div class="tabs" role="tablist">
                {AboutTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                role="tab"
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == t
                                aria-selected=move || (tab.get() == t).to_string()
                                on:click=move |_| {
                                    tab.set(t);
                                    cues.play(SoundEffect::Click);
                                }
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="tabs__panel">
                {move || match tab.get() {
                    AboutTab::Education => education().into_any(),
                    AboutTab::Experience => experience().into_any(),
                    AboutTab::Skills => skills().into_any(),
                    AboutTab::Achievements => achievements().into_any(),
                }}
            </div>
        </div>
    }
}

fn chips(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="tag-list">
            {items.iter().map(|item| view! { <li class="chip">{*item}</li> }).collect_view()}
        </ul>
    }
}

fn education() -> impl IntoView {
    view! {
        <div class="timeline">
            {EDUCATION
                .iter()
                .map(|e| view! {
                    <div class="card timeline__item">
                        <h3>{e.institution}</h3>
                        <p>{e.degree}</p>
                        <p class="text-muted">{e.years}</p>
                    </div>
                })
                .collect_view()}
        </div>
        <h3>"Relevant Coursework"</h3>
        {chips(&ELECTIVES)}
    }
}

fn experience() -> impl IntoView {
    view! {
        <div class="timeline">
            {EXPERIENCE
                .iter()
                .map(|job| view! {
                    <div class="card timeline__item">
                        <h3>{job.company}</h3>
                        <p>{job.position} " · " <span class="text-muted">{job.period}</span></p>
                        {job.guide.map(|guide| view! { <p class="text-muted">{guide}</p> })}
                        <ul>
                            {job.responsibilities
                                .iter()
                                .map(|r| view! {
                                    <li>
                                        {r.title.map(|title| view! { <strong>{title} ": "</strong> })}
                                        {r.description}
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                })
                .collect_view()}
        </div>
        <h3>"Positions of Responsibility"</h3>
        <ul>
            {POSITIONS
                .iter()
                .map(|(role, org)| view! { <li><strong>{*role}</strong> ", " {*org}</li> })
                .collect_view()}
        </ul>
    }
}

fn skills() -> impl IntoView {
    view! {
        {SKILLS
            .iter()
            .map(|group| view! {
                <div class="card">
                    <h3>{group.title}</h3>
                    {chips(group.skills)}
                </div>
            })
            .collect_view()}
        <h3>"Interests"</h3>
        {chips(&INTERESTS)}
    }
}

fn achievements() -> impl IntoView {
    view! {
        <ul class="achievements">
            {ACHIEVEMENTS.iter().map(|a| view! { <li class="card">{*a}</li> }).collect_view()}
        </ul>
    }
}
