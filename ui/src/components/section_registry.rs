use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use dioxus::html::ScrollBehavior;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::tracker::{ScrollState, SectionId, Viewport};

/// Page-wide layout state shared by the navbar, sections and reveal effects.
///
/// Sections register their mounted element on mount and drop it on unmount.
/// The page scroll container calls [`SectionRegistry::refresh`] from its
/// `onscroll` handler; the handler lives on the element, so nothing outlives
/// the page.
#[derive(Clone, Copy, PartialEq)]
pub struct SectionRegistry {
    container: Signal<Option<Rc<MountedData>>>,
    sections: Signal<BTreeMap<SectionId, Rc<MountedData>>>,
    scroll: Signal<ScrollState>,
    viewport: Signal<Viewport>,
}

impl SectionRegistry {
    pub fn scroll_state(&self) -> ScrollState {
        (self.scroll)()
    }

    pub fn viewport(&self) -> Viewport {
        (self.viewport)()
    }

    /// `onmounted` handler for the page scroll container.
    pub fn attach_container(&self, event: MountedEvent) {
        let mut container = self.container;
        container.set(Some(event.data()));
        self.refresh();
    }

    pub fn register(&self, section: SectionId, element: Rc<MountedData>) {
        let mut sections = self.sections;
        sections.write().insert(section, element);
    }

    /// Remove `section` only if it still points at `element`; a remounted
    /// section may already have registered its replacement.
    pub fn unregister(&self, section: SectionId, element: &Rc<MountedData>) {
        let mut sections = self.sections;
        let mut map = sections.write();
        if map
            .get(&section)
            .is_some_and(|current| Rc::ptr_eq(current, element))
        {
            map.remove(&section);
        }
    }

    /// Re-measure the layout and update scroll state and viewport.
    pub fn refresh(&self) {
        let registry = *self;
        spawn(async move {
            registry.measure().await;
        });
    }

    async fn measure(self) {
        let Some(container) = self.container.peek().clone() else {
            return;
        };

        let scroll_y = match container.get_scroll_offset().await {
            Ok(offset) => offset.y,
            Err(err) => {
                debug!("[scroll] scroll offset unavailable: {err:?}");
                return;
            }
        };
        let viewport = match container.get_client_rect().await {
            Ok(rect) => Viewport {
                top: rect.origin.y,
                height: rect.size.height,
            },
            Err(_) => Viewport::default(),
        };

        // BTreeMap iteration is page order.
        let elements: Vec<(SectionId, Rc<MountedData>)> = self
            .sections
            .peek()
            .iter()
            .map(|(id, element)| (*id, element.clone()))
            .collect();
        let mut measurements = Vec::with_capacity(elements.len());
        for (id, element) in elements {
            if let Ok(rect) = element.get_client_rect().await {
                measurements.push((id, rect.origin.y - viewport.top));
            }
        }

        let mut scroll = self.scroll;
        let next = scroll.peek().observe(scroll_y, &measurements);
        if next != *scroll.peek() {
            debug!("[scroll] active={:?} scrolled={}", next.active, next.scrolled);
            scroll.set(next);
        }
        let mut current = self.viewport;
        current.set(viewport);
    }

    /// Smooth-scroll to `section`; unknown or unmounted sections are ignored.
    pub fn scroll_to(&self, section: SectionId) {
        let Some(element) = self.sections.peek().get(&section).cloned() else {
            debug!("[scroll] no mounted element for {}", section.dom_id());
            return;
        };
        spawn(async move {
            let _ = element.scroll_to(ScrollBehavior::Smooth).await;
        });
    }
}

pub fn use_section_registry_provider() -> SectionRegistry {
    let container = use_signal(|| None);
    let sections = use_signal(BTreeMap::new);
    let scroll = use_signal(ScrollState::default);
    let viewport = use_signal(Viewport::default);
    use_context_provider(|| SectionRegistry {
        container,
        sections,
        scroll,
        viewport,
    })
}

pub fn use_section_registry() -> SectionRegistry {
    use_context::<SectionRegistry>()
}

/// A navigable `<section>` that registers itself for active-section tracking.
#[component]
pub fn PageSection(id: SectionId, #[props(default)] class: String, children: Element) -> Element {
    let registry = use_section_registry();
    let slot: Rc<RefCell<Option<Rc<MountedData>>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let slot_for_drop = slot.clone();
    use_drop(move || {
        if let Some(element) = slot_for_drop.borrow_mut().take() {
            registry.unregister(id, &element);
        }
    });

    rsx! {
        section {
            id: id.dom_id(),
            class: "section {class}",
            onmounted: move |event: MountedEvent| {
                let element = event.data();
                slot.borrow_mut().replace(element.clone());
                registry.register(id, element);
            },
            {children}
        }
    }
}

/// Tracks whether an element has entered the viewport at least once.
#[derive(Clone, Copy, PartialEq)]
pub struct InView {
    element: Signal<Option<Rc<MountedData>>>,
    seen: Signal<bool>,
}

impl InView {
    pub fn seen(&self) -> bool {
        (self.seen)()
    }

    /// `onmounted` handler for the observed element.
    pub fn attach(&self, event: MountedEvent) {
        let mut element = self.element;
        element.set(Some(event.data()));
    }
}

/// Latches to `true` once the attached element intersects the viewport.
/// Re-checked whenever the page re-measures its layout.
pub fn use_in_view() -> InView {
    let registry = use_section_registry();
    let element = use_signal(|| Option::<Rc<MountedData>>::None);
    let seen = use_signal(|| false);

    use_effect(move || {
        let viewport = registry.viewport();
        let Some(target) = element() else {
            return;
        };
        if *seen.peek() {
            return;
        }
        let mut seen = seen;
        spawn(async move {
            if let Ok(rect) = target.get_client_rect().await {
                let top = rect.origin.y;
                if viewport.intersects(top, top + rect.size.height) {
                    seen.set(true);
                }
            }
        });
    });

    InView { element, seen }
}
