use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::tracker::NAV_ITEMS;
use crate::i18n::{translate, Language};
use crate::sections::card_keys;

/// Name of the catalogue file per locale.
const FTL_FILENAME: &str = "afrikia_ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Source markers after which a line may carry message ids as string literals.
const KEY_MARKERS: &[&str] = &["t!(", ".t(", "_key:", "Card::new(", ".push(ToastKind"];

/// Message ids and their (single-line) values from a Fluent file.
/// Comments, terms (-prefix) and blank lines are ignored.
fn parse_ftl(content: &str) -> BTreeMap<String, String> {
    let mut messages = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some((id, value)) = line.split_once('=') {
            let id = id.trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                messages.insert(id.to_string(), value.trim().to_string());
            }
        }
    }
    messages
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn looks_like_key(literal: &str) -> bool {
    literal.contains('-')
        && !literal.starts_with('-')
        && !literal.ends_with('-')
        && literal.chars().all(valid_key_char)
}

/// Every hyphenated string literal on lines that contain a key marker.
///
/// Conservative: ids assembled at runtime or passed through other helpers
/// are not seen. Tables and direct lookups are.
fn extract_translation_keys_from_source(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            // This directory names keys in assertions only.
            if path.file_name().and_then(|s| s.to_str()) == Some("tests") {
                continue;
            }
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for line in content.lines() {
            let Some(start) = KEY_MARKERS.iter().filter_map(|m| line.find(m)).min() else {
                continue;
            };
            // Literals sit between every other quote.
            for (index, literal) in line[start..].split('"').enumerate() {
                if index % 2 == 1 && looks_like_key(literal) {
                    found.insert(literal.to_string());
                }
            }
        }
    }

    found
}

fn load_catalogue(i18n_root: &Path, language: Language) -> BTreeMap<String, String> {
    let path = i18n_root.join(language.code()).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("Failed to read catalogue {path:?}: {err}"));
    let messages = parse_ftl(&content);
    assert!(!messages.is_empty(), "No messages parsed from {path:?}");
    messages
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let referenced_keys = extract_translation_keys_from_source(&crate_root.join("src"));
    assert!(
        referenced_keys.len() > 40,
        "Suspiciously few keys found in sources ({}); did the scanner break?",
        referenced_keys.len()
    );

    let mut report = String::new();
    for language in Language::ALL {
        let catalogue = load_catalogue(&i18n_root, language);
        let missing: Vec<_> = referenced_keys
            .iter()
            .filter(|key| !catalogue.contains_key(*key))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            report.push_str(&format!("  {language} ({} missing)\n", missing.len()));
            for key in missing {
                report.push_str(&format!("    {key}\n"));
            }
        }
    }
    if !report.is_empty() {
        panic!("Referenced translation keys missing from catalogues:\n{report}");
    }

    let fallback = load_catalogue(&i18n_root, Language::English);
    let unused: Vec<_> = fallback
        .keys()
        .filter(|key| !referenced_keys.contains(*key))
        .map(String::as_str)
        .collect();
    // Informational only.
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} catalogue keys not seen in sources: {}",
            unused.len(),
            unused.join(", ")
        );
    }
}

#[test]
fn catalogues_define_the_same_keys() {
    let i18n_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(I18N_DIR);
    let arabic: BTreeSet<_> = load_catalogue(&i18n_root, Language::Arabic).into_keys().collect();
    let english: BTreeSet<_> = load_catalogue(&i18n_root, Language::English).into_keys().collect();

    let only_arabic: Vec<_> = arabic.difference(&english).collect();
    let only_english: Vec<_> = english.difference(&arabic).collect();
    assert!(
        only_arabic.is_empty() && only_english.is_empty(),
        "Catalogues diverge. only ar: {only_arabic:?}; only en: {only_english:?}"
    );
}

#[test]
fn every_catalogue_entry_resolves_to_its_stored_text() {
    let i18n_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(I18N_DIR);
    for language in Language::ALL {
        for (key, value) in load_catalogue(&i18n_root, language) {
            assert_eq!(translate(language, &key), value, "{language}: {key}");
        }
    }
}

#[test]
fn table_labels_are_translated_in_both_languages() {
    let table_keys = card_keys().chain(NAV_ITEMS.iter().map(|item| item.label_key));
    for key in table_keys {
        let arabic = translate(Language::Arabic, key);
        let english = translate(Language::English, key);
        assert_ne!(arabic, key, "missing Arabic text for {key}");
        assert_ne!(english, key, "missing English text for {key}");
        assert_ne!(arabic, english, "{key} is not translated");
    }
}
