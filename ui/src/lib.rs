//! Shared UI crate for the Al-Dar Al-Afrikia site. Sections, components and
//! localization live here; platform crates only launch [`SitePage`].

pub mod contact;
pub mod core;
pub mod i18n;
pub mod sections;
pub mod views;

pub mod components {
    // Fixed navbar with language switch (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    pub mod animated_counter;
    pub mod icons;
    pub mod reveal;
    pub mod section_registry;
    pub mod toast;
    pub mod whatsapp;
}

pub use views::SitePage;
