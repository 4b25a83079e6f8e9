//! "Others are viewing" indicator driven by the presence simulator.

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::components::icons::{Icon, IconKind};
use crate::state::presence::{PresenceSimulator, PresenceUser, summarize};
use crate::state::settings::Settings;
use crate::util::clock;
use crate::util::timer::{BrowserScheduler, Scheduler};

type Handle = <BrowserScheduler as Scheduler>::Handle;
type Simulator = PresenceSimulator<SmallRng>;

/// Arm the next drift step; each step re-arms itself with a fresh interval.
fn schedule_tick(
    sim: StoredValue<Option<Simulator>, LocalStorage>,
    tick: StoredValue<Option<Handle>, LocalStorage>,
    users: RwSignal<Vec<PresenceUser>>,
) {
    let Some(delay) = sim.try_update_value(|s| s.as_mut().map(Simulator::next_interval)).flatten() else {
        return;
    };
    let handle = BrowserScheduler.schedule(delay, move || {
        let stepped = sim
            .try_update_value(|s| {
                s.as_mut().map(|s| {
                    let outcome = s.step(clock::now_ms());
                    outcome.changed().then(|| s.users().to_vec())
                })
            })
            .flatten();
        if let Some(changed) = stepped {
            if let Some(snapshot) = changed {
                users.set(snapshot);
            }
            schedule_tick(sim, tick, users);
        }
    });
    // The previous handle belongs to the timer that is firing right now.
    let _ = tick.try_update_value(|slot| std::mem::replace(slot, Some(handle)));
}

#[component]
pub fn SocialPresence() -> impl IntoView {
    let settings = expect_context::<StoredValue<Settings, LocalStorage>>();
    let users = RwSignal::new(Vec::<PresenceUser>::new());
    let sim = StoredValue::new_local(None::<Simulator>);
    let tick = StoredValue::new_local(None::<Handle>);

    Effect::new(move || {
        // Creates and persists the visitor id on a first visit.
        settings.with_value(|s| {
            let _ = s.visitor_id();
        });
        let seeded = PresenceSimulator::new(SmallRng::seed_from_u64(clock::random_seed()), clock::now_ms());
        users.set(seeded.users().to_vec());
        sim.set_value(Some(seeded));
        schedule_tick(sim, tick, users);
    });

    on_cleanup(move || {
        let _ = tick.try_update_value(Option::take);
        let _ = sim.try_update_value(Option::take);
    });

    let summary = move || users.with(|u| summarize(u));

    view! {
        {move || {
            summary()
                .map(|summary| {
                    view! {
                        <div class="presence">
                            <Icon kind=IconKind::Users size=16/>
                            <div class="presence__avatars">
                                {summary
                                    .avatars
                                    .into_iter()
                                    .map(|(initial, color)| {
                                        view! {
                                            <span class="presence__avatar" style=format!("background-color: {color}")>
                                                {initial}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                                {(summary.overflow > 0)
                                    .then(|| view! { <span class="presence__overflow">{format!("+{}", summary.overflow)}</span> })}
                            </div>
                            <span class="presence__label">{summary.label}</span>
                        </div>
                    }
                })
        }}
    }
}
