use dioxus::prelude::*;

use crate::i18n::TextDirection;

use super::section_registry::use_in_view;

/// Where a [`Reveal`] slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealFrom {
    #[default]
    Up,
    Left,
    Right,
    Scale,
}

impl RevealFrom {
    pub fn class(self) -> &'static str {
        match self {
            RevealFrom::Up => "reveal--from-up",
            RevealFrom::Left => "reveal--from-left",
            RevealFrom::Right => "reveal--from-right",
            RevealFrom::Scale => "reveal--from-scale",
        }
    }

    /// The side reading starts from: left for LTR text, right for RTL.
    pub fn start(direction: TextDirection) -> Self {
        match direction {
            TextDirection::Ltr => RevealFrom::Left,
            TextDirection::Rtl => RevealFrom::Right,
        }
    }

    pub fn end(direction: TextDirection) -> Self {
        match direction {
            TextDirection::Ltr => RevealFrom::Right,
            TextDirection::Rtl => RevealFrom::Left,
        }
    }
}

/// Entrance animation wrapper: fades/slides its children in the first time it
/// scrolls into view. `delay_ms` staggers siblings.
#[component]
pub fn Reveal(
    #[props(default)] class: String,
    #[props(default)] from: RevealFrom,
    #[props(default)] delay_ms: u32,
    children: Element,
) -> Element {
    let in_view = use_in_view();
    let state = if in_view.seen() { "reveal--visible" } else { "" };
    let from = from.class();

    rsx! {
        div {
            class: "reveal {from} {state} {class}",
            style: "--reveal-delay: {delay_ms}ms",
            onmounted: move |event| in_view.attach(event),
            {children}
        }
    }
}

/// Text that fades in again whenever its content changes (e.g. on a language
/// switch). Keying the span by its text forces a fresh node per value.
#[component]
pub fn SwapText(text: String, #[props(default)] class: String) -> Element {
    rsx! {
        for current in std::iter::once(text) {
            span { key: "{current}", class: "text-swap {class}", "{current}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_entrances_mirror_with_direction() {
        assert_eq!(RevealFrom::start(TextDirection::Ltr), RevealFrom::Left);
        assert_eq!(RevealFrom::start(TextDirection::Rtl), RevealFrom::Right);
        for direction in [TextDirection::Ltr, TextDirection::Rtl] {
            assert_ne!(RevealFrom::start(direction), RevealFrom::end(direction));
        }
    }

    #[test]
    fn every_entrance_has_its_own_class() {
        let all = [RevealFrom::Up, RevealFrom::Left, RevealFrom::Right, RevealFrom::Scale];
        for from in all {
            assert!(from.class().starts_with("reveal--from-"));
        }
        assert_eq!(RevealFrom::default().class(), "reveal--from-up");
    }
}
