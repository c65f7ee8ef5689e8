use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::components::reveal::Reveal;
use crate::core::site::{CREDIT_LINE, CREDIT_PHONES};
use crate::i18n::{use_locale, Language};
use crate::t;

const LOGO: Asset = asset!("/assets/logo.svg");

/// `© {year} {company}. {rights}.`
pub fn copyright_line(language: Language, year: i32) -> String {
    format!(
        "© {year} {}. {}.",
        t!(language, "hero-company"),
        t!(language, "footer-rights")
    )
}

#[component]
pub fn Footer() -> Element {
    let locale = use_locale();
    let language = locale.language();
    let year = OffsetDateTime::now_utc().year();

    rsx! {
        footer { class: "footer",
            div { class: "section-container",
                div { class: "footer__main",
                    Reveal { class: "footer__brand",
                        img { class: "footer__logo", src: LOGO, alt: t!(language, "logo-alt") }
                        div {
                            h3 { class: "footer__company", {t!(language, "hero-company")} }
                            p { class: "footer__tagline", {t!(language, "footer-tagline")} }
                        }
                    }
                }

                div { class: "footer__legal",
                    p { class: "footer__copyright", {copyright_line(language, year)} }
                    div { class: "footer__credit",
                        p { "{CREDIT_LINE}" }
                        p { "{CREDIT_PHONES}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_is_localized() {
        assert_eq!(
            copyright_line(Language::English, 2026),
            "© 2026 Al-Dar Al-Afrikia Company. All rights reserved."
        );
        assert_eq!(
            copyright_line(Language::Arabic, 2026),
            "© 2026 شركة الدار الإفريقية. جميع الحقوق محفوظة."
        );
    }
}
