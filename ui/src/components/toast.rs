use dioxus::prelude::*;

use crate::core::timing;
use crate::i18n::use_locale;

/// How long a notice stays on screen.
pub const TOAST_TTL_MS: u64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}

/// A queued notice. The message is a catalogue key so an open notice follows
/// language switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message_key: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct ToastQueue {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastQueue {
    pub fn push(&self, kind: ToastKind, message_key: &'static str) {
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id.set(id + 1);

        let mut toasts = self.toasts;
        toasts.write().push(Toast {
            id,
            kind,
            message_key,
        });
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|toast| toast.id != id);
    }
}

pub fn use_toast_provider() -> ToastQueue {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| ToastQueue { toasts, next_id })
}

pub fn use_toasts() -> ToastQueue {
    use_context::<ToastQueue>()
}

/// Renders queued notices. Each notice expires on its own timer, owned by its
/// own scope so it survives the component that raised it.
#[component]
pub fn ToastHost() -> Element {
    let queue = use_toasts();
    let toasts = (queue.toasts)();

    rsx! {
        div { class: "toast-host", role: "status", aria_live: "polite",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let queue = use_toasts();
    let locale = use_locale();
    let id = toast.id;

    use_future(move || async move {
        timing::sleep_ms(TOAST_TTL_MS).await;
        queue.dismiss(id);
    });

    let kind_class = toast.kind.class();
    let icon = match toast.kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "!",
    };

    rsx! {
        div { class: "toast {kind_class}",
            span { class: "toast__icon", aria_hidden: "true", "{icon}" }
            span { class: "toast__message", {locale.t(toast.message_key)} }
            button {
                r#type: "button",
                class: "toast__close",
                aria_label: locale.t("toast-dismiss"),
                onclick: move |_| queue.dismiss(id),
                "×"
            }
        }
    }
}
