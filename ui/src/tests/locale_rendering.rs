//! Renders locale-aware components inside a `VirtualDom` and checks what
//! reaches the page when the language changes.

use std::cell::RefCell;

use dioxus::prelude::*;

use crate::components::section_registry::use_section_registry_provider;
use crate::components::toast::{use_toast_provider, ToastHost, ToastKind, ToastQueue};
use crate::components::whatsapp::WhatsAppButton;
use crate::components::AppNavbar;
use crate::core::site::{whatsapp_href, PHONE_NUMBERS};
use crate::core::tracker::NAV_ITEMS;
use crate::i18n::{translate, use_locale, use_locale_provider, Language, LocaleContext};

thread_local! {
    static LOCALE: RefCell<Option<LocaleContext>> = RefCell::new(None);
    static TOASTS: RefCell<Option<ToastQueue>> = RefCell::new(None);
}

fn navbar_page() -> Element {
    let locale = use_locale_provider(Language::Arabic);
    use_section_registry_provider();
    LOCALE.with(|slot| *slot.borrow_mut() = Some(locale));

    rsx! {
        AppNavbar {}
        WhatsAppButton {}
    }
}

fn toast_page() -> Element {
    let locale = use_locale_provider(Language::Arabic);
    let toasts = use_toast_provider();
    LOCALE.with(|slot| *slot.borrow_mut() = Some(locale));
    TOASTS.with(|slot| *slot.borrow_mut() = Some(toasts));

    rsx! { ToastHost {} }
}

fn orphan() -> Element {
    let locale = use_locale();
    rsx! { "{locale.language()}" }
}

/// Text as the SSR renderer writes it into the page.
fn escaped(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn nav_labels(language: Language) -> Vec<String> {
    NAV_ITEMS
        .iter()
        .map(|item| escaped(&translate(language, item.label_key)))
        .collect()
}

fn assert_shows(html: &str, language: Language) {
    for label in nav_labels(language) {
        assert!(html.contains(&label), "{language} label {label:?} missing from {html}");
    }
    for label in nav_labels(language.toggled()) {
        assert!(!html.contains(&label), "stale {label:?} still rendered in {language}");
    }
    let chat = escaped(&translate(language, "whatsapp-label"));
    assert!(html.contains(&chat), "chat link not labelled in {language}");
}

fn toggle_and_render(dom: &mut VirtualDom) -> String {
    let locale = LOCALE
        .with(|slot| *slot.borrow())
        .expect("page installed a locale");
    dom.in_runtime(|| locale.toggle());
    let _ = dom.render_immediate_to_vec();
    dioxus_ssr::render(dom)
}

#[test]
#[should_panic(expected = "use_locale must be used within a tree that called use_locale_provider")]
fn use_locale_outside_a_provider_panics() {
    let mut dom = VirtualDom::new(orphan);
    dom.rebuild_in_place();
}

#[test]
fn language_toggle_relabels_the_navbar_and_back() {
    let mut dom = VirtualDom::new(navbar_page);
    dom.rebuild_in_place();

    let html = dioxus_ssr::render(&dom);
    assert_shows(&html, Language::Arabic);

    let html = toggle_and_render(&mut dom);
    assert_shows(&html, Language::English);

    let html = toggle_and_render(&mut dom);
    assert_shows(&html, Language::Arabic);
}

#[test]
fn chat_link_targets_the_sales_line() {
    let mut dom = VirtualDom::new(navbar_page);
    dom.rebuild_in_place();

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(&whatsapp_href(PHONE_NUMBERS[0])));
    assert!(html.contains("class=\"whatsapp-button\""));
}

#[test]
fn toast_dismiss_button_is_labelled_in_the_current_language() {
    // Each notice starts its expiry timer on mount.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("test runtime");
    let _guard = runtime.enter();

    let mut dom = VirtualDom::new(toast_page);
    dom.rebuild_in_place();

    let toasts = TOASTS
        .with(|slot| *slot.borrow())
        .expect("page installed a toast queue");
    dom.in_runtime(|| toasts.push(ToastKind::Error, "contact-form-failure"));
    let _ = dom.render_immediate_to_vec();

    let html = dioxus_ssr::render(&dom);
    let dismiss = escaped(&translate(Language::Arabic, "toast-dismiss"));
    assert!(html.contains(&format!("aria-label=\"{dismiss}\"")), "{html}");
    assert!(html.contains(&escaped(&translate(Language::Arabic, "contact-form-failure"))));

    let html = toggle_and_render(&mut dom);
    let dismiss = escaped(&translate(Language::English, "toast-dismiss"));
    assert!(html.contains(&format!("aria-label=\"{dismiss}\"")), "{html}");
}
