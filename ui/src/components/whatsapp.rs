use dioxus::prelude::*;

use crate::core::site::{whatsapp_href, PHONE_NUMBERS};
use crate::i18n::use_locale;
use crate::t;

use super::icons::{Icon, IconGlyph};

/// Floating chat link pinned to the bottom corner, opening a WhatsApp
/// conversation with the main sales line.
#[component]
pub fn WhatsAppButton() -> Element {
    let language = use_locale().language();
    let label = t!(language, "whatsapp-label");

    rsx! {
        a {
            class: "whatsapp-button",
            href: whatsapp_href(PHONE_NUMBERS[0]),
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label: "{label}",
            title: "{label}",
            IconGlyph { icon: Icon::MessageCircle, size: 28 }
        }
    }
}
