use crate::core::tracker::{SectionId, NAV_ITEMS};
use crate::i18n::{use_locale, Language};
use crate::t;
use dioxus::prelude::*;

use super::icons::{Icon, IconGlyph};
use super::reveal::SwapText;
use super::section_registry::use_section_registry;

const LOGO: Asset = asset!("/assets/logo.svg");

/// Fixed site navbar.
///
/// Links are driven by [`NAV_ITEMS`]; clicking one smooth-scrolls to the
/// registered section (a no-op if the section is not mounted) and closes the
/// mobile menu. The active link follows the registry's scroll state, and the
/// bar turns solid once the page has scrolled.
///
/// The `AR | EN` button toggles the page language; every label is pulled from
/// the locale context on render, so the bar re-renders with the new text.
#[component]
pub fn AppNavbar() -> Element {
    let locale = use_locale();
    let registry = use_section_registry();
    let mut menu_open = use_signal(|| false);

    let language = locale.language();
    let scroll = registry.scroll_state();

    let mut go_to = move |section: SectionId| {
        registry.scroll_to(section);
        menu_open.set(false);
    };

    let bar_class = if scroll.scrolled {
        "navbar navbar--scrolled"
    } else {
        "navbar"
    };

    let links: Vec<NavLink> = NAV_ITEMS
        .iter()
        .map(|item| NavLink {
            section: item.section,
            label: locale.t(item.label_key),
            active: item.section == scroll.active,
        })
        .collect();

    rsx! {
        nav { id: "navbar", class: bar_class,
            div { class: "navbar__inner section-container",
                // Brand
                a {
                    class: "navbar__brand",
                    href: "#home",
                    onclick: move |evt| {
                        evt.prevent_default();
                        go_to(SectionId::Home);
                    },
                    img { class: "navbar__logo", src: LOGO, alt: t!(language, "logo-alt") }
                }

                // Desktop navigation
                div { class: "navbar__links",
                    for link in links.clone() {
                        button {
                            key: "{link.section.dom_id()}",
                            r#type: "button",
                            class: link.class("navbar__link"),
                            onclick: move |_| go_to(link.section),
                            SwapText { text: link.label.clone() }
                            if link.active {
                                span { class: "navbar__underline" }
                            }
                        }
                    }
                }

                div { class: "navbar__actions",
                    LanguageToggle {}
                    button {
                        r#type: "button",
                        class: "navbar__menu-button",
                        aria_label: t!(language, "nav-menu-toggle"),
                        aria_expanded: "{menu_open()}",
                        onclick: move |_| {
                            let open = *menu_open.peek();
                            menu_open.set(!open);
                        },
                        if menu_open() {
                            IconGlyph { icon: Icon::Close }
                        } else {
                            IconGlyph { icon: Icon::Menu }
                        }
                    }
                }
            }

            if menu_open() {
                div { class: "navbar__mobile",
                    for (index, link) in links.iter().cloned().enumerate() {
                        button {
                            key: "{link.section.dom_id()}",
                            r#type: "button",
                            class: link.class("navbar__mobile-link"),
                            style: "--reveal-delay: {index * 50}ms",
                            onclick: move |_| go_to(link.section),
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone)]
struct NavLink {
    section: SectionId,
    label: String,
    active: bool,
}

impl NavLink {
    fn class(&self, base: &str) -> String {
        if self.active {
            format!("{base} {base}--active")
        } else {
            base.to_string()
        }
    }
}

/// `AR | EN` switch; the current language is highlighted.
#[component]
fn LanguageToggle() -> Element {
    let locale = use_locale();
    let language = locale.language();

    let marker = |lang: Language| {
        if lang == language {
            "navbar__lang navbar__lang--current"
        } else {
            "navbar__lang"
        }
    };

    rsx! {
        button {
            r#type: "button",
            class: "navbar__locale",
            aria_label: t!(language, "nav-language-toggle"),
            onclick: move |_| locale.toggle(),
            span { class: marker(Language::Arabic), {Language::Arabic.short_label()} }
            span { class: "navbar__lang-sep", "|" }
            span { class: marker(Language::English), {Language::English.short_label()} }
        }
    }
}
