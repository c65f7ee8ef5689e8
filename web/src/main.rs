use dioxus::prelude::*;

use ui::SitePage;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources; the theme stylesheet is linked by `SitePage`.
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Title { "Al-Dar Al-Afrikia" }

        SitePage {}
    }
}
