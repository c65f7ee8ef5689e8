use dioxus::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::components::reveal::{Reveal, RevealFrom};
use crate::components::section_registry::PageSection;
use crate::core::tracker::SectionId;
use crate::i18n::use_locale;

use super::{Card, SectionHeader};

pub const MAINTENANCE_FEATURES: [Card; 4] = [
    Card::new(Icon::Wrench, "maintenance-professional", "maintenance-professional-desc"),
    Card::new(Icon::PackageCheck, "maintenance-parts", "maintenance-parts-desc"),
    Card::new(Icon::Zap, "maintenance-fast", "maintenance-fast-desc"),
    Card::new(Icon::Clock, "maintenance-longterm", "maintenance-longterm-desc"),
];

#[component]
pub fn Maintenance() -> Element {
    let locale = use_locale();
    let from = RevealFrom::start(locale.language().direction());

    rsx! {
        PageSection { id: SectionId::Maintenance, class: "maintenance",
            div { class: "section-container maintenance__layout",
                div { class: "maintenance__text",
                    SectionHeader { title_key: "maintenance-title", subtitle_key: "maintenance-subtitle" }
                    div { class: "maintenance__features",
                        for (index, feature) in MAINTENANCE_FEATURES.into_iter().enumerate() {
                            Reveal {
                                key: "{feature.title_key}",
                                class: "feature-row",
                                from,
                                delay_ms: (index as u32) * 100,
                                div { class: "feature-row__icon",
                                    IconGlyph { icon: feature.icon }
                                }
                                div { class: "feature-row__body",
                                    h3 { class: "feature-row__title", {locale.t(feature.title_key)} }
                                    p { class: "feature-row__desc", {locale.t(feature.desc_key)} }
                                }
                            }
                        }
                    }
                }

                // Decorative composition
                Reveal { class: "maintenance__visual", from: RevealFrom::Scale, delay_ms: 200,
                    div { class: "maintenance__plate maintenance__plate--outer" }
                    div { class: "maintenance__plate maintenance__plate--inner" }
                    div { class: "maintenance__badge",
                        IconGlyph { icon: Icon::Wrench, size: 64 }
                    }
                    div { class: "maintenance__float maintenance__float--top",
                        IconGlyph { icon: Icon::PackageCheck }
                    }
                    div { class: "maintenance__float maintenance__float--bottom",
                        IconGlyph { icon: Icon::Zap, size: 20 }
                    }
                }
            }
        }
    }
}
