//! Full-window overlay shown while a section transition runs.

use dioxus::prelude::*;

#[component]
pub fn TransitionOverlay(active: bool) -> Element {
    rsx! {
        div {
            class: if active { "page-transition-overlay active" } else { "page-transition-overlay" },
        }
    }
}
