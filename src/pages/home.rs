//! Home section - hero with the typing profession line.

use dioxus::prelude::*;
use portfolio_core::Section;

use crate::components::TypingText;
use crate::context::use_portfolio;

#[component]
pub fn Home() -> Element {
    let portfolio = use_portfolio();
    let profile = portfolio.content().profile.clone();

    // The CTA runs the transition but, like any non-nav anchor, leaves
    // the active highlight where it was.
    let browse_works = use_callback({
        let portfolio = portfolio.clone();
        move |_: ()| {
            let portfolio = portfolio.clone();
            spawn(async move {
                portfolio.navigator().navigate_to(Section::Tps.key()).await;
            });
        }
    });

    rsx! {
        div { class: "hero",
            p { class: "hero-greeting", "Hello, I'm" }
            h1 { class: "hero-name", "{profile.name}" }
            h2 { class: "hero-role",
                "I'm a "
                TypingText { phrases: profile.professions.clone() }
            }
            p { class: "hero-summary", "{profile.summary}" }
            div { class: "hero-actions",
                button {
                    class: "btn",
                    onclick: move |_| browse_works.call(()),
                    "See My Work"
                }
            }
        }
    }
}
