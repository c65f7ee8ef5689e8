use dioxus::prelude::*;

use crate::components::section_registry::use_section_registry_provider;
use crate::components::toast::{use_toast_provider, ToastHost};
use crate::components::whatsapp::WhatsAppButton;
use crate::components::AppNavbar;
use crate::i18n::{use_locale_provider, Language};
use crate::sections::{About, Contact, Footer, Hero, Highlights, Maintenance, Services};

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The whole single-page site.
///
/// Installs the locale, section registry and toast contexts, then renders the
/// navbar, the content sections and the footer inside one scroll container.
/// The content is keyed by language so a switch remounts it and every section
/// replays its fade-in with the new text.
#[component]
pub fn SitePage() -> Element {
    let locale = use_locale_provider(Language::default());
    let registry = use_section_registry_provider();
    use_toast_provider();

    let language = locale.language();
    let font_class = if language.is_rtl() {
        "font-arabic"
    } else {
        "font-latin"
    };

    #[cfg(debug_assertions)]
    dioxus::logger::tracing::debug!("[i18n] SitePage render lang={language}");

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div {
            class: "page {font_class}",
            dir: language.direction().as_str(),
            lang: language.code(),
            onmounted: move |event| registry.attach_container(event),
            onscroll: move |_| registry.refresh(),

            AppNavbar {}

            for current in std::iter::once(language) {
                main { key: "{current}", class: "page__main",
                    Hero {}
                    Highlights {}
                    About {}
                    Services {}
                    Maintenance {}
                    Contact {}
                }
            }

            Footer {}
            WhatsAppButton {}
            ToastHost {}
        }
    }
}
