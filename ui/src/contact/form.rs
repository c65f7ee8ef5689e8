use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::components::toast::{use_toasts, ToastKind};
use crate::i18n::use_locale;
use crate::t;

use super::state::{settle_draft, ContactDraft, SubmissionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Message,
}

/// Name / email / message form posting to the contact endpoint.
///
/// Success clears the fields and raises a success notice; failure raises an
/// error notice and keeps what was typed.
#[component]
pub fn ContactForm() -> Element {
    let locale = use_locale();
    let toasts = use_toasts();
    let language = locale.language();

    let mut draft = use_signal(ContactDraft::default);
    let mut state = use_signal(SubmissionState::default);

    let mut edit = move |field: Field, value: String| {
        {
            let mut draft = draft.write();
            match field {
                Field::Name => draft.name = value,
                Field::Email => draft.email = value,
                Field::Message => draft.message = value,
            }
        }
        state.write().edited();
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if !state.write().begin() {
            return;
        }
        let message = draft.peek().to_message();
        spawn(async move {
            let outcome = api::submit_contact_message(message)
                .await
                .map_err(|err| err.to_string());
            match &outcome {
                Ok(()) => {
                    info!("[contact] message delivered");
                    toasts.push(ToastKind::Success, "contact-form-success");
                }
                Err(err) => {
                    warn!("[contact] submission failed: {err}");
                    toasts.push(ToastKind::Error, "contact-form-failure");
                }
            }
            settle_draft(&mut draft.write(), &outcome);
            state.write().finish(outcome);
        });
    };

    let current = draft();
    let submitting = state.read().is_submitting();

    rsx! {
        form { class: "contact-form", onsubmit: onsubmit,
            div { class: "contact-form__field",
                label { r#for: "contact-name", {t!(language, "contact-form-name")} }
                input {
                    id: "contact-name",
                    name: "name",
                    r#type: "text",
                    required: true,
                    autocomplete: "name",
                    value: "{current.name}",
                    oninput: move |evt| edit(Field::Name, evt.value()),
                }
            }
            div { class: "contact-form__field",
                label { r#for: "contact-email", {t!(language, "contact-form-email")} }
                input {
                    id: "contact-email",
                    name: "email",
                    r#type: "email",
                    required: true,
                    autocomplete: "email",
                    dir: "ltr",
                    value: "{current.email}",
                    oninput: move |evt| edit(Field::Email, evt.value()),
                }
            }
            div { class: "contact-form__field",
                label { r#for: "contact-message", {t!(language, "contact-form-message")} }
                textarea {
                    id: "contact-message",
                    name: "message",
                    rows: "5",
                    required: true,
                    value: "{current.message}",
                    oninput: move |evt| edit(Field::Message, evt.value()),
                }
            }
            button {
                r#type: "submit",
                class: "button button--primary contact-form__submit",
                disabled: submitting,
                if submitting {
                    span { class: "spinner", aria_hidden: "true" }
                    span { {t!(language, "contact-form-submitting")} }
                } else {
                    IconGlyph { icon: Icon::Send, size: 20 }
                    span { {t!(language, "contact-form-submit")} }
                }
            }
        }
    }
}
