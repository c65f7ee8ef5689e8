use dioxus::prelude::*;

use crate::components::icons::Icon;
use crate::components::section_registry::PageSection;
use crate::core::tracker::SectionId;

use super::{Card, CardTile, SectionHeader};

pub const SERVICES: [Card; 6] = [
    Card::new(Icon::Printer, "service-copiers", "service-copiers-desc").accented("emerald"),
    Card::new(Icon::Droplets, "service-ink", "service-ink-desc").accented("cyan"),
    Card::new(Icon::Monitor, "service-computers", "service-computers-desc").accented("blue"),
    Card::new(Icon::Keyboard, "service-accessories", "service-accessories-desc").accented("violet"),
    Card::new(Icon::Cog, "service-parts", "service-parts-desc").accented("amber"),
    Card::new(Icon::Settings, "service-maintenance", "service-maintenance-desc").accented("rose"),
];

#[component]
pub fn Services() -> Element {
    rsx! {
        PageSection { id: SectionId::Services, class: "services section--tinted",
            div { class: "section-container",
                SectionHeader { title_key: "services-title", subtitle_key: "services-subtitle" }
                div { class: "services__grid",
                    for (index, card) in SERVICES.into_iter().enumerate() {
                        CardTile { key: "{card.title_key}", card, index, variant: "card--service" }
                    }
                }
            }
        }
    }
}
