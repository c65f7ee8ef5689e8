use dioxus::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::components::reveal::SwapText;
use crate::components::section_registry::{use_section_registry, PageSection};
use crate::core::site::split_title;
use crate::core::tracker::SectionId;
use crate::i18n::use_locale;
use crate::t;

#[component]
pub fn Hero() -> Element {
    let locale = use_locale();
    let registry = use_section_registry();
    let language = locale.language();

    let company = t!(language, "hero-company");
    let (lead, rest) = split_title(&company);

    rsx! {
        PageSection { id: SectionId::Home, class: "hero",
            div { class: "hero__backdrop" }
            div { class: "hero__shapes", aria_hidden: "true",
                div { class: "hero__shape hero__shape--square" }
                div { class: "hero__shape hero__shape--tile" }
                div { class: "hero__shape hero__shape--outline" }
                div { class: "hero__shape hero__shape--dot" }
            }

            div { class: "section-container hero__content",
                div { class: "hero__badge enter enter--1",
                    span { class: "hero__badge-dot" }
                    SwapText { text: t!(language, "hero-badge") }
                }

                h1 { class: "hero__title enter enter--2",
                    span { class: "hero__title-lead", "{lead} " }
                    span { class: "hero__title-rest", "{rest}" }
                }

                p { class: "hero__tagline enter enter--3",
                    SwapText { text: t!(language, "hero-tagline") }
                }

                div { class: "hero__actions enter enter--4",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| registry.scroll_to(SectionId::Contact),
                        IconGlyph { icon: Icon::Phone, size: 20 }
                        SwapText { text: t!(language, "hero-contact") }
                    }
                    button {
                        r#type: "button",
                        class: "button button--outline",
                        onclick: move |_| registry.scroll_to(SectionId::Services),
                        IconGlyph { icon: Icon::Headphones, size: 20 }
                        SwapText { text: t!(language, "hero-service") }
                    }
                }
            }

            button {
                r#type: "button",
                class: "hero__scroll-cue",
                aria_label: t!(language, "hero-scroll-cue"),
                onclick: move |_| registry.scroll_to(SectionId::About),
                IconGlyph { icon: Icon::ChevronDown, size: 32 }
            }
        }
    }
}
