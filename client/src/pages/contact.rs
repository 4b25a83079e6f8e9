//! Contact page: channel cards and a locally drafted message form.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::interactive_button::InteractiveButton;
use crate::components::toaster::notify;
use crate::content::profile::CONTACT_CHANNELS;
use crate::state::contact::{ContactDraft, Field, SENT_DESCRIPTION, SENT_TITLE};
use crate::state::settings::Settings;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::sound::{SoundEffect, use_cues};

#[component]
pub fn ContactPage() -> impl IntoView {
    let cues = use_cues();
    let settings = expect_context::<StoredValue<Settings, LocalStorage>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let draft = RwSignal::new(ContactDraft::default());

    // Restore after hydration so the server render shows an empty form.
    Effect::new(move |_| {
        let _ = settings.try_with_value(|s| draft.set(ContactDraft::load(s.store())));
    });

    let edit = move |field: Field, value: String| {
        draft.update(|d| d.set(field, value));
        draft.with_untracked(|d| {
            let _ = settings.try_with_value(|s| d.save(s.store()));
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match draft.with_untracked(ContactDraft::validate) {
            Err(err) => {
                notify(toasts, ToastKind::Error, &err.to_string(), None);
            }
            Ok(()) => {
                notify(toasts, ToastKind::Success, SENT_TITLE, Some(SENT_DESCRIPTION));
                cues.play(SoundEffect::Success);
                let _ = settings.try_with_value(|s| ContactDraft::clear(s.store()));
                draft.set(ContactDraft::default());
            }
        }
    };

    view! {
        <div class="page contact">
            <header class="page__header">
                <h1>"Get in Touch"</h1>
                <p class="text-muted">
                    "Have a project in mind or just want to say hello? I'd love to hear from you."
                </p>
            </header>

            <div class="contact__grid">
                <div class="contact__channels">
                    {CONTACT_CHANNELS
                        .iter()
                        .map(|channel| view! {
                            <a
                                class="card contact__channel"
                                href=channel.link
                                target="_blank"
                                rel="noopener noreferrer"
                                on:mouseenter=move |_| cues.play(SoundEffect::Hover)
                            >
                                <Icon kind=channel_icon(channel.title)/>
                                <div>
                                    <h3>{channel.title}</h3>
                                    <p class="text-muted">{channel.value}</p>
                                </div>
                            </a>
                        })
                        .collect_view()}
                </div>

                <form class="card contact__form" on:submit=on_submit novalidate=true>
                    <div class="form-row">
                        <FormField field=Field::Name kind="text" draft=draft on_edit=edit/>
                        <FormField field=Field::Email kind="email" draft=draft on_edit=edit/>
                    </div>
                    <FormField field=Field::Subject kind="text" draft=draft on_edit=edit/>
                    <label class="form-field">
                        <span>{Field::Message.label()}</span>
                        <textarea
                            rows="6"
                            placeholder="Tell me about your project..."
                            prop:value=move || draft.with(|d| d.message.clone())
                            on:input=move |ev| edit(Field::Message, event_target_value(&ev))
                        ></textarea>
                    </label>
                    <InteractiveButton button_type="submit" class="primary-button">
                        <Icon kind=IconKind::Message size=16/>
                        "Send Message"
                    </InteractiveButton>
                </form>
            </div>
        </div>
    }
}

#[component]
fn FormField<F>(field: Field, kind: &'static str, draft: RwSignal<ContactDraft>, on_edit: F) -> impl IntoView
where
    F: Fn(Field, String) + Copy + Send + Sync + 'static,
{
    let value = move || {
        draft.with(|d| match field {
            Field::Name => d.name.clone(),
            Field::Email => d.email.clone(),
            Field::Subject => d.subject.clone(),
            Field::Message => d.message.clone(),
        })
    };
    view! {
        <label class="form-field">
            <span>{field.label()}</span>
            <input
                type=kind
                name=field.label().to_lowercase()
                prop:value=value
                on:input=move |ev| on_edit(field, event_target_value(&ev))
            />
        </label>
    }
}

fn channel_icon(title: &str) -> IconKind {
    match title {
        "Email" => IconKind::Mail,
        "Location" => IconKind::Info,
        _ => IconKind::Link,
    }
}
