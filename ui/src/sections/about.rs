use dioxus::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::icons::Icon;
use crate::components::reveal::{Reveal, RevealFrom};
use crate::components::section_registry::PageSection;
use crate::core::site::{FOUNDED_YEAR, HAPPY_CLIENTS, PROJECTS_DONE};
use crate::core::tracker::SectionId;
use crate::i18n::use_locale;
use crate::t;

use super::{Card, CardTile};

pub const VALUES: [Card; 4] = [
    Card::new(Icon::Award, "value-quality", "value-quality-desc"),
    Card::new(Icon::Users, "value-experience", "value-experience-desc"),
    Card::new(Icon::HeartHandshake, "value-reliability", "value-reliability-desc"),
    Card::new(Icon::FolderCheck, "value-support", "value-support-desc"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stat {
    value: u64,
    label_key: &'static str,
    suffix: &'static str,
    grouped: bool,
}

const STATS: [Stat; 3] = [
    Stat { value: FOUNDED_YEAR, label_key: "about-since", suffix: "", grouped: false },
    Stat { value: HAPPY_CLIENTS, label_key: "about-clients", suffix: "+", grouped: true },
    Stat { value: PROJECTS_DONE, label_key: "about-projects", suffix: "+", grouped: true },
];

#[component]
pub fn About() -> Element {
    let locale = use_locale();
    let language = locale.language();
    let from = RevealFrom::start(language.direction());

    rsx! {
        PageSection { id: SectionId::About, class: "about",
            div { class: "about__decor about__decor--top" }
            div { class: "about__decor about__decor--bottom" }

            div { class: "section-container",
                Reveal { class: "section-header",
                    h2 { class: "section-header__title", {t!(language, "about-title")} }
                    div { class: "section-header__rule" }
                    p { class: "section-header__subtitle", {t!(language, "about-subtitle")} }
                }

                div { class: "about__layout",
                    Reveal { class: "about__story", from,
                        p { class: "about__text", {t!(language, "about-text")} }

                        div { class: "about__stats",
                            for (index, stat) in STATS.into_iter().enumerate() {
                                Reveal {
                                    key: "{stat.label_key}",
                                    class: "stat",
                                    delay_ms: (index as u32) * 100,
                                    div { class: "stat__value",
                                        AnimatedCounter {
                                            value: stat.value,
                                            suffix: stat.suffix.to_string(),
                                            grouped: stat.grouped,
                                        }
                                    }
                                    div { class: "stat__label", {locale.t(stat.label_key)} }
                                }
                            }
                        }
                    }

                    div { class: "about__values",
                        for (index, card) in VALUES.into_iter().enumerate() {
                            CardTile { key: "{card.title_key}", card, index, variant: "card--value" }
                        }
                    }
                }
            }
        }
    }
}
