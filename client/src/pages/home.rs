//! Landing page: hero, featured projects and the design process outline.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::icons::{Icon, IconKind};
use crate::components::liquid_blob::LiquidBlob;
use crate::components::project_card::ProjectCard;
use crate::components::repulsive_particle::RepulsiveParticle;
use crate::content::profile::PROCESS_STEPS;
use crate::content::projects;
use crate::util::scroll::{scroll_to_id, use_reveal_on_scroll};
use crate::util::sound::{SoundEffect, use_cues};

const FEATURED_ID: &str = "featured";

#[component]
pub fn HomePage() -> impl IntoView {
    let cues = use_cues();
    use_reveal_on_scroll();

    let hover = move |_| cues.play(SoundEffect::Hover);
    let click = move |_| cues.play(SoundEffect::Click);

    view! {
        <section class="hero">
            <div class="hero__background">
                <LiquidBlob class="blob--hero"/>
                <RepulsiveParticle start=(0.2, 0.3)/>
                <RepulsiveParticle start=(0.75, 0.6) class="particle--accent"/>
            </div>
            <div class="hero__content">
                <h1>"Crafting " <span class="text-gradient">"meaningful"</span> " design experiences"</h1>
                <p class="hero__lead">
                    "An interactive journey through my design process, showcasing the evolution of concepts into impactful solutions."
                </p>
                <div class="hero__actions">
                    <A href="/projects" attr:class="primary-button" on:mouseenter=hover on:click=click>
                        "View Projects"
                        <Icon kind=IconKind::ArrowRight size=16/>
                    </A>
                    <A href="/about" attr:class="outline-button" on:mouseenter=hover on:click=click>
                        "About Me"
                    </A>
                </div>
            </div>
            <button class="hero__scroll" aria-label="Scroll to featured projects" on:click=move |_| scroll_to_id(FEATURED_ID)>
                <Icon kind=IconKind::ChevronDown size=24/>
            </button>
        </section>

        <section id=FEATURED_ID class="section section--muted">
            <div class="section__header">
                <h2 class="scroll-reveal">"Featured Projects"</h2>
                <p class="scroll-reveal text-muted">
                    "Explore a selection of my recent design work spanning various disciplines and challenges."
                </p>
            </div>
            <div class="project-grid">
                {projects::featured()
                    .iter()
                    .map(|project| view! { <ProjectCard project=project/> })
                    .collect_view()}
            </div>
            <div class="section__footer">
                <A href="/projects" attr:class="outline-button" on:mouseenter=hover on:click=click>
                    "View All Projects"
                    <Icon kind=IconKind::ArrowRight size=16/>
                </A>
            </div>
        </section>

        <section class="section">
            <h2 class="scroll-reveal">"My Design Process"</h2>
            <p class="scroll-reveal text-muted">
                "I approach each project with a thoughtful methodology that balances research, creativity, and strategic thinking to deliver meaningful solutions."
            </p>
            <ol class="process">
                {PROCESS_STEPS
                    .iter()
                    .map(|(number, title, description)| {
                        view! {
                            <li class="process__step scroll-reveal">
                                <span class="process__number">{*number}</span>
                                <div>
                                    <h3>{*title}</h3>
                                    <p class="text-muted">{*description}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
