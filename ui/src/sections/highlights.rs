use dioxus::prelude::*;

use crate::components::icons::Icon;

use super::{Card, CardTile};

pub const HIGHLIGHTS: [Card; 4] = [
    Card::new(Icon::Printer, "highlight-copiers", "highlight-copiers-desc"),
    Card::new(Icon::Droplets, "highlight-ink", "highlight-ink-desc"),
    Card::new(Icon::Monitor, "highlight-computers", "highlight-computers-desc"),
    Card::new(Icon::Wrench, "highlight-maintenance", "highlight-maintenance-desc"),
];

/// Four headline offerings overlapping the bottom of the hero.
#[component]
pub fn Highlights() -> Element {
    rsx! {
        section { class: "highlights",
            div { class: "section-container highlights__grid",
                for (index, card) in HIGHLIGHTS.into_iter().enumerate() {
                    CardTile { key: "{card.title_key}", card, index, variant: "card--highlight" }
                }
            }
        }
    }
}
