//! Practical works section - the TP card grid.

use dioxus::prelude::*;

use crate::components::WorkCard;
use crate::context::use_portfolio;

#[component]
pub fn Works() -> Element {
    let portfolio = use_portfolio();
    let works = portfolio.content().works.clone();

    rsx! {
        h2 { class: "section-title", "Practical Works" }
        p { class: "section-lead",
            "Selected renders and builds. Each card links back to its repository, archive and report."
        }
        div { class: "tp-grid",
            for work in works {
                WorkCard { key: "{work.title}", work: work.clone() }
            }
        }
    }
}
