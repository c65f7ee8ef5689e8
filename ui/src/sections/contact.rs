use dioxus::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::components::reveal::{Reveal, RevealFrom};
use crate::components::section_registry::PageSection;
use crate::contact::ContactForm;
use crate::core::site::{phone_href, PHONE_NUMBERS, TAX_NUMBER};
use crate::core::tracker::SectionId;
use crate::i18n::use_locale;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
struct InfoCard {
    icon: Icon,
    title_key: &'static str,
    lines: Vec<InfoLine>,
}

#[derive(Debug, Clone, PartialEq)]
enum InfoLine {
    Text(String),
    Phone(&'static str),
}

#[component]
pub fn Contact() -> Element {
    let locale = use_locale();
    let language = locale.language();
    let info_from = RevealFrom::start(language.direction());
    let form_from = RevealFrom::end(language.direction());

    let cards = vec![
        InfoCard {
            icon: Icon::MapPin,
            title_key: "contact-address",
            lines: vec![
                InfoLine::Text(t!(language, "contact-address-line1")),
                InfoLine::Text(t!(language, "contact-address-line2")),
            ],
        },
        InfoCard {
            icon: Icon::Phone,
            title_key: "contact-phone",
            lines: PHONE_NUMBERS.into_iter().map(InfoLine::Phone).collect(),
        },
        InfoCard {
            icon: Icon::FileText,
            title_key: "contact-tax-number",
            lines: vec![InfoLine::Text(TAX_NUMBER.to_string())],
        },
    ];

    rsx! {
        PageSection { id: SectionId::Contact, class: "contact section--tinted",
            div { class: "section-container",
                Reveal { class: "section-header",
                    h2 { class: "section-header__title", {t!(language, "contact-title")} }
                    div { class: "section-header__rule" }
                    p { class: "section-header__subtitle", {t!(language, "contact-subtitle")} }
                }

                div { class: "contact__layout",
                    Reveal { class: "contact__info", from: info_from,
                        for (index, card) in cards.into_iter().enumerate() {
                            Reveal {
                                key: "{card.title_key}",
                                class: "info-card",
                                delay_ms: (index as u32) * 100,
                                div { class: "info-card__icon",
                                    IconGlyph { icon: card.icon }
                                }
                                div { class: "info-card__body",
                                    h3 { class: "info-card__title", {locale.t(card.title_key)} }
                                    for line in card.lines {
                                        {render_line(line)}
                                    }
                                }
                            }
                        }
                    }

                    Reveal { class: "contact__form-card", from: form_from, delay_ms: 200,
                        ContactForm {}
                    }
                }
            }
        }
    }
}

fn render_line(line: InfoLine) -> Element {
    match line {
        InfoLine::Text(text) => rsx! {
            p { class: "info-card__line", "{text}" }
        },
        InfoLine::Phone(phone) => rsx! {
            a {
                class: "info-card__line info-card__line--phone",
                href: phone_href(phone),
                dir: "ltr",
                "{phone}"
            }
        },
    }
}
