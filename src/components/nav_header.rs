//! Navigation Header Component
//!
//! Horizontal header with the logo on the left and the section links on
//! the right. At most one link carries the active highlight, and it
//! matches the visible section.

use dioxus::prelude::*;
use portfolio_core::Section;

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Link currently carrying the active highlight
    pub active: Option<Section>,
    /// Fired with the clicked section
    pub on_navigate: EventHandler<Section>,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let NavHeaderProps { active, on_navigate } = props;

    rsx! {
        header { class: "header",
            a {
                class: "logo",
                href: "#home",
                onclick: move |e| {
                    e.prevent_default();
                    on_navigate.call(Section::Home);
                },
                "Seif"
                span { class: "logo-accent", "." }
            }
            nav { class: "navbar",
                for section in Section::ALL {
                    a {
                        key: "{section.key()}",
                        class: if active == Some(section) { "nav-link active" } else { "nav-link" },
                        href: "#{section.key()}",
                        onclick: move |e| {
                            e.prevent_default();
                            on_navigate.call(section);
                        },
                        "{section.display_name()}"
                    }
                }
            }
        }
    }
}
