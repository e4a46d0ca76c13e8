//! Services section.

use dioxus::prelude::*;

use crate::context::use_portfolio;

#[component]
pub fn Services() -> Element {
    let portfolio = use_portfolio();
    let services = portfolio.content().services.clone();

    rsx! {
        h2 { class: "section-title", "Services" }
        div { class: "service-grid",
            for service in services {
                div { key: "{service.title}", class: "service-card",
                    h3 { class: "service-title", "{service.title}" }
                    p { class: "service-description", "{service.description}" }
                }
            }
        }
    }
}
