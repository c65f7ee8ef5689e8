//! Scroll-driven section tracking.
//!
//! Everything here is a pure function of layout measurements so it can be
//! exercised without a renderer. The component layer
//! (`components::section_registry`) gathers the measurements on every scroll
//! event and feeds them through [`ScrollState::observe`].
//!
//! Detection walks the sections bottom-up and takes the first whose top edge
//! sits at or above [`ACTIVE_SECTION_THRESHOLD`]. Once several sections have
//! scrolled past the threshold the lowest one wins. Sections of very uneven
//! height can still be misreported; no overlap areas are computed.

/// Distance below the viewport top at which a section counts as entered.
pub const ACTIVE_SECTION_THRESHOLD: f64 = 150.0;

/// Vertical scroll offset past which the navbar switches to its solid style.
pub const SCROLLED_THRESHOLD: f64 = 20.0;

/// Navigable page regions, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Services,
    Maintenance,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Maintenance,
        SectionId::Contact,
    ];

    /// DOM `id` of the section element.
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Maintenance => "maintenance",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.dom_id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label_key: &'static str,
    pub section: SectionId,
}

/// Navigation bar entries, in display order.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label_key: "nav-home", section: SectionId::Home },
    NavItem { label_key: "nav-about", section: SectionId::About },
    NavItem { label_key: "nav-services", section: SectionId::Services },
    NavItem { label_key: "nav-maintenance", section: SectionId::Maintenance },
    NavItem { label_key: "nav-contact", section: SectionId::Contact },
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Pick the active section from `(section, top offset)` pairs given in page order.
///
/// Returns `previous` when no section has reached `threshold`.
pub fn compute_active_section(
    measurements: &[(SectionId, f64)],
    threshold: f64,
    previous: SectionId,
) -> SectionId {
    measurements
        .iter()
        .rev()
        .find(|(_, top)| *top <= threshold)
        .map(|(section, _)| *section)
        .unwrap_or(previous)
}

/// Navbar-facing scroll state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub active: SectionId,
    pub scrolled: bool,
}

impl ScrollState {
    /// Next state after a scroll event.
    pub fn observe(self, scroll_y: f64, measurements: &[(SectionId, f64)]) -> Self {
        Self {
            active: compute_active_section(measurements, ACTIVE_SECTION_THRESHOLD, self.active),
            scrolled: is_scrolled(scroll_y),
        }
    }
}

/// Visible band of the scroll container, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub top: f64,
    pub height: f64,
}

impl Viewport {
    /// Whether an element spanning `top..bottom` overlaps the viewport.
    /// An unmeasured (zero-height) viewport contains nothing.
    pub fn intersects(&self, top: f64, bottom: f64) -> bool {
        self.height > 0.0 && top < self.top + self.height && bottom > self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(tops: [f64; 5]) -> Vec<(SectionId, f64)> {
        SectionId::ALL.into_iter().zip(tops).collect()
    }

    #[test]
    fn contact_wins_when_it_alone_reached_threshold() {
        // Contrived layout: everything else is still below the threshold.
        let measurements = layout([900.0, 1400.0, 2000.0, 2600.0, 120.0]);
        let active = compute_active_section(
            &measurements,
            ACTIVE_SECTION_THRESHOLD,
            SectionId::Home,
        );
        assert_eq!(active, SectionId::Contact);
    }

    #[test]
    fn lowest_qualifying_section_wins() {
        let measurements = layout([-2400.0, -1600.0, -300.0, 140.0, 700.0]);
        let active = compute_active_section(
            &measurements,
            ACTIVE_SECTION_THRESHOLD,
            SectionId::Home,
        );
        assert_eq!(active, SectionId::Maintenance);
    }

    #[test]
    fn threshold_is_inclusive() {
        let measurements = layout([-800.0, 150.0, 151.0, 900.0, 1500.0]);
        let active = compute_active_section(
            &measurements,
            ACTIVE_SECTION_THRESHOLD,
            SectionId::Home,
        );
        assert_eq!(active, SectionId::About);
    }

    #[test]
    fn previous_section_retained_when_nothing_qualifies() {
        let measurements = layout([200.0, 900.0, 1500.0, 2100.0, 2700.0]);
        for previous in SectionId::ALL {
            let active =
                compute_active_section(&measurements, ACTIVE_SECTION_THRESHOLD, previous);
            assert_eq!(active, previous);
        }
        assert_eq!(
            compute_active_section(&[], ACTIVE_SECTION_THRESHOLD, SectionId::Services),
            SectionId::Services
        );
    }

    #[test]
    fn scrolled_flag_flips_past_twenty() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn observe_updates_both_fields() {
        let state = ScrollState::default();
        let next = state.observe(640.0, &layout([-640.0, 100.0, 800.0, 1400.0, 2000.0]));
        assert_eq!(
            next,
            ScrollState {
                active: SectionId::About,
                scrolled: true
            }
        );

        let back = next.observe(0.0, &layout([400.0, 1000.0, 1600.0, 2200.0, 2800.0]));
        assert_eq!(back.active, SectionId::About);
        assert!(!back.scrolled);
    }

    #[test]
    fn nav_items_cover_every_section_in_order() {
        let sections: Vec<_> = NAV_ITEMS.iter().map(|item| item.section).collect();
        assert_eq!(sections, SectionId::ALL.to_vec());
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_dom_id(section.dom_id()), Some(section));
        }
    }

    #[test]
    fn viewport_intersection() {
        let viewport = Viewport {
            top: 0.0,
            height: 800.0,
        };
        assert!(viewport.intersects(100.0, 300.0));
        assert!(viewport.intersects(-50.0, 10.0));
        assert!(!viewport.intersects(800.0, 900.0));
        assert!(!viewport.intersects(-300.0, 0.0));
        assert!(!Viewport::default().intersects(0.0, 100.0));
    }
}
