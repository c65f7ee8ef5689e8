use dioxus::prelude::*;

use crate::core::counter::CounterAnimation;
use crate::core::format::format_count;
use crate::core::timing;

use super::section_registry::use_in_view;

/// Counts up from 0 to `value` once, after the number first scrolls into view.
#[component]
pub fn AnimatedCounter(
    value: u64,
    #[props(default)] suffix: String,
    #[props(default = true)] grouped: bool,
) -> Element {
    let in_view = use_in_view();
    let mut count = use_signal(|| 0u64);
    let mut started = use_signal(|| false);

    use_effect(move || {
        if !in_view.seen() || *started.peek() {
            return;
        }
        started.set(true);
        let animation = CounterAnimation::new(value);
        spawn(async move {
            for frame in animation.frames() {
                timing::sleep_ms(frame.delay_ms).await;
                count.set(frame.value);
            }
        });
    });

    let shown = format_count(count(), grouped, &suffix);

    rsx! {
        span {
            class: "counter",
            onmounted: move |event| in_view.attach(event),
            "{shown}"
        }
    }
}
