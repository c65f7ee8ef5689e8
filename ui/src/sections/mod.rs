//! Page sections, top to bottom. Each one renders a fixed table of cards and
//! pulls every label through the locale context.

use dioxus::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::components::reveal::Reveal;
use crate::i18n::use_locale;

mod about;
mod contact;
mod footer;
mod hero;
mod highlights;
mod maintenance;
mod services;

pub use about::{About, VALUES};
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use highlights::{Highlights, HIGHLIGHTS};
pub use maintenance::{Maintenance, MAINTENANCE_FEATURES};
pub use services::{Services, SERVICES};

/// One icon + title + description tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: Icon,
    pub title_key: &'static str,
    pub desc_key: &'static str,
    /// Colour accent modifier (`card--accent-*`); empty for the default palette.
    pub accent: &'static str,
}

impl Card {
    pub const fn new(icon: Icon, title_key: &'static str, desc_key: &'static str) -> Self {
        Self {
            icon,
            title_key,
            desc_key,
            accent: "",
        }
    }

    pub const fn accented(mut self, accent: &'static str) -> Self {
        self.accent = accent;
        self
    }
}

/// Every catalogue key referenced from the card tables.
pub fn card_keys() -> impl Iterator<Item = &'static str> {
    HIGHLIGHTS
        .iter()
        .chain(VALUES.iter())
        .chain(SERVICES.iter())
        .chain(MAINTENANCE_FEATURES.iter())
        .flat_map(|card| [card.title_key, card.desc_key])
}

/// Centered section title and subtitle.
#[component]
fn SectionHeader(title_key: String, subtitle_key: String) -> Element {
    let locale = use_locale();

    rsx! {
        Reveal { class: "section-header",
            h2 { class: "section-header__title", {locale.t(&title_key)} }
            div { class: "section-header__rule" }
            p { class: "section-header__subtitle", {locale.t(&subtitle_key)} }
        }
    }
}

/// Card grid tile with staggered entrance.
#[component]
fn CardTile(card: Card, index: usize, #[props(default)] variant: String) -> Element {
    let locale = use_locale();
    let accent = if card.accent.is_empty() {
        String::new()
    } else {
        format!("card--accent-{}", card.accent)
    };

    rsx! {
        Reveal { class: "card {variant} {accent}", delay_ms: (index as u32) * 100,
            div { class: "card__icon",
                IconGlyph { icon: card.icon, size: 28 }
            }
            h3 { class: "card__title", {locale.t(card.title_key)} }
            p { class: "card__desc", {locale.t(card.desc_key)} }
        }
    }
}
