//! Internationalization (i18n) support for `afrikia-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (catalogue loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/afrikia_ui.ftl   (fallback/reference for compile-time key checks)
//!   ar/afrikia_ui.ftl   (primary site language)
//! ```
//!
//! Unlike a single process-wide loader that gets re-selected on every switch,
//! each [`Language`] owns its own loader, built once. The *current* language is
//! not global state: it lives in a [`LocaleContext`] provided at the page root
//! and read by components through [`use_locale`].
//!
//! Usage in a component:
//! ```ignore
//! use crate::i18n::use_locale;
//! use crate::t;
//! let locale = use_locale();
//! let home_label = t!(locale.language(), "nav-home"); // key checked at compile time
//! let dynamic = locale.t(card.title_key);             // raw key on a miss
//! ```
//!
//! Public API surface:
//! - [`translate`] – total lookup (`key` returned unchanged when absent).
//! - [`loader`] – the per-language `FluentLanguageLoader` backing `t!`.
//! - [`available_languages`] – embedded catalogue tags.
//! - [`use_locale_provider`] / [`use_locale`] – reactive locale context.
use std::fmt;

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Compile-time checked translation macro.
///
/// Examples:
///     t!(Language::English, "nav-home")
///     t!(locale.language(), "hero-tagline")
///
/// Expands to `fl!(loader(language), key)`: a key missing from the fallback
/// catalogue is a build error rather than a runtime fallback.
#[macro_export]
macro_rules! t {
    ($language:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($language), $key)
    };
}

/// Fluent "domain": the package name with `-` replaced by `_`, as `fl!` expects.
///
/// Catalogue path must be: `i18n/<code>/{DOMAIN}.ftl`
const DOMAIN: &str = "afrikia_ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// The two languages the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Arabic,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Arabic, Language::English];

    /// BCP 47 tag, also used for the document `lang` attribute and catalogue folder.
    pub fn code(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }

    /// Label shown in the `AR | EN` switch.
    pub fn short_label(self) -> &'static str {
        match self {
            Language::Arabic => "AR",
            Language::English => "EN",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::Arabic => TextDirection::Rtl,
            Language::English => TextDirection::Ltr,
        }
    }

    pub fn is_rtl(self) -> bool {
        self.direction() == TextDirection::Rtl
    }

    /// The other language. Applying it twice yields `self`.
    pub fn toggled(self) -> Self {
        match self {
            Language::Arabic => Language::English,
            Language::English => Language::Arabic,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    fn identifier(self) -> LanguageIdentifier {
        self.code()
            .parse()
            .expect("language codes are valid BCP 47 identifiers")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Catalogues {
    arabic: FluentLanguageLoader,
    english: FluentLanguageLoader,
}

static CATALOGUES: Lazy<Catalogues> = Lazy::new(|| Catalogues {
    arabic: load_catalogue(Language::Arabic),
    english: load_catalogue(Language::English),
});

/// Each loader uses its own language as fallback so a miss never leaks
/// text from the other language.
fn load_catalogue(language: Language) -> FluentLanguageLoader {
    let id = language.identifier();
    let loader = FluentLanguageLoader::new(DOMAIN, id.clone());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[id]) {
        error!("[i18n] failed loading catalogue for {language} ({err}); lookups fall back to keys");
    }
    loader
}

/// Loader holding the catalogue for `language`.
pub fn loader(language: Language) -> &'static FluentLanguageLoader {
    match language {
        Language::Arabic => &CATALOGUES.arabic,
        Language::English => &CATALOGUES.english,
    }
}

/// Text for `key` in `language`, or `key` itself when the catalogue has no such message.
pub fn translate(language: Language, key: &str) -> String {
    let loader = loader(language);
    if loader.has(key) {
        loader.get(key)
    } else {
        key.to_owned()
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Script applying direction and language to `document.documentElement`.
pub fn document_attributes_script(language: Language) -> String {
    format!(
        "document.documentElement.dir = \"{}\"; document.documentElement.lang = \"{}\";",
        language.direction(),
        language.code()
    )
}

/// Reactive handle on the current language, shared through the component context.
#[derive(Clone, Copy, PartialEq)]
pub struct LocaleContext {
    language: Signal<Language>,
}

impl LocaleContext {
    pub fn language(&self) -> Language {
        (self.language)()
    }

    pub fn is_rtl(&self) -> bool {
        self.language().is_rtl()
    }

    /// Dynamic lookup for keys held in tables; see [`translate`].
    pub fn t(&self, key: &str) -> String {
        translate(self.language(), key)
    }

    pub fn toggle(&self) {
        let mut language = self.language;
        let next = language.peek().toggled();
        info!("[i18n] switching language to {next}");
        language.set(next);
    }
}

/// Install the locale context at the page root and keep the document
/// `dir`/`lang` attributes in sync with it.
pub fn use_locale_provider(initial: Language) -> LocaleContext {
    let language = use_signal(|| initial);
    let locale = use_context_provider(|| LocaleContext { language });

    use_effect(move || {
        let current = language();
        let _ = document::eval(&document_attributes_script(current));
    });

    locale
}

/// Locale context of the surrounding page.
///
/// # Panics
/// When called outside a component tree that ran [`use_locale_provider`].
pub fn use_locale() -> LocaleContext {
    match try_use_context::<LocaleContext>() {
        Some(locale) => locale,
        None => panic!("use_locale must be used within a tree that called use_locale_provider"),
    }
}
