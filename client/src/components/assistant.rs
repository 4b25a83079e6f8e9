//! Floating design assistant.
//!
//! ARCHITECTURE
//! ============
//! Messages go through a [`MessageDisplay`] so only one speech bubble is ever
//! visible and later messages wait their turn. The greeting and wave timers,
//! the display and the tip generator live in local stored values owned by
//! this component; unmounting drops the timers and tears the display down.

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::components::icons::{Icon, IconKind};
use crate::state::assistant::{
    ABOUT_PORTFOLIO, DEFAULT_USER_NAME, GREETING_DELAY, Mood, NAVIGATION_HELP, PanelEvent, PanelState,
    TIPS, WAVE_DURATION, greeting_message, random_tip,
};
use crate::util::clock;
use crate::util::message_display::MessageDisplay;
use crate::util::sound::{SoundEffect, use_cues};
use crate::util::timer::{BrowserScheduler, Scheduler};

type Handle = <BrowserScheduler as Scheduler>::Handle;

#[component]
pub fn Assistant(#[prop(into, default = DEFAULT_USER_NAME.to_owned())] user_name: String) -> impl IntoView {
    let cues = use_cues();
    let panel = RwSignal::new(PanelState::default());
    let message = RwSignal::new(None::<String>);
    let waving = RwSignal::new(false);
    let mood = RwSignal::new(Mood::Neutral);

    let display = MessageDisplay::new(BrowserScheduler)
        .on_change(move |active| message.set(active.map(str::to_owned)))
        .on_activate(move |_| cues.play(SoundEffect::Notification));
    let display = StoredValue::new_local(display);
    let rng = StoredValue::new_local(SmallRng::seed_from_u64(clock::random_seed()));
    let timers = StoredValue::new_local(Vec::<Handle>::new());

    let say = move |text: String| {
        if let Some(display) = display.try_get_value() {
            display.enqueue(text);
        }
    };
    let tip = move || {
        rng.try_update_value(|rng| random_tip(rng))
            .unwrap_or(TIPS[0])
            .to_owned()
    };
    let respond = move |event: PanelEvent| {
        if let Some(cue) = event.cue() {
            cues.play(cue);
        }
        if event.shows_tip() {
            say(tip());
        }
    };

    Effect::new(move || {
        let hour = clock::local_hour();
        mood.set(Mood::for_hour(hour));
        let greeting = greeting_message(hour, &user_name);
        let handle = BrowserScheduler.schedule(GREETING_DELAY, move || {
            say(greeting);
            waving.set(true);
            let wave = BrowserScheduler.schedule(WAVE_DURATION, move || waving.set(false));
            let _ = timers.try_update_value(|t| t.push(wave));
        });
        let _ = timers.try_update_value(|t| t.push(handle));
    });

    on_cleanup(move || {
        let _ = timers.try_update_value(Vec::clear);
        let _ = display.try_with_value(MessageDisplay::teardown);
    });

    let on_avatar = move |_| {
        let event = panel.try_update(PanelState::avatar_click).unwrap_or(PanelEvent::Unchanged);
        respond(event);
    };
    let on_toggle = move |_| {
        let event = panel.try_update(PanelState::toggle).unwrap_or(PanelEvent::Unchanged);
        respond(event);
    };
    let on_minimize = move |_| {
        let event = panel.try_update(PanelState::minimize).unwrap_or(PanelEvent::Unchanged);
        respond(event);
    };

    view! {
        <div class="assistant">
            <Show when=move || message.with(Option::is_some)>
                <div class="assistant__bubble">
                    <p>{move || message.get().unwrap_or_default()}</p>
                </div>
            </Show>
            <div class="assistant__anchor">
                <button
                    class="assistant__avatar"
                    class:assistant__avatar--waving=move || waving.get()
                    aria-label="Design assistant"
                    on:click=on_avatar
                >
                    {move || mood.get().emoji()}
                </button>
                <Show when=move || panel.get().expanded()>
                    <div class="assistant__panel">
                        <div class="assistant__panel-header">
                            <h3>"Design Assistant"</h3>
                            <div class="assistant__panel-controls">
                                <button class="icon-button" title="Minimize" on:click=on_minimize>
                                    <span>"_"</span>
                                </button>
                                <button class="icon-button" title="Close" on:click=on_toggle>
                                    <Icon kind=IconKind::Close size=14/>
                                </button>
                            </div>
                        </div>
                        <div class="assistant__panel-body">
                            <button class="outline-button" on:click=move |_| say(NAVIGATION_HELP.to_owned())>
                                <Icon kind=IconKind::Help size=16/>
                                "How to navigate"
                            </button>
                            <button class="outline-button" on:click=move |_| say(ABOUT_PORTFOLIO.to_owned())>
                                <Icon kind=IconKind::Info size=16/>
                                "About this portfolio"
                            </button>
                            <button class="outline-button" on:click=move |_| say(tip())>
                                <Icon kind=IconKind::Message size=16/>
                                "Get a random tip"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
