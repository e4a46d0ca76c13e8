//! Root application component.
//!
//! Builds the [`Portfolio`] facade, provides it via context and mirrors
//! navigator events into signals and window chrome (title, scroll).

use std::sync::Arc;

use dioxus::document;
use dioxus::prelude::*;
use portfolio_core::{FsMediaLoader, NavEvent, Portfolio, Section};

use crate::components::{MediaModalHost, NavHeader, ToastHost, TransitionOverlay};
use crate::pages::{Contact, Home, Services, Works};
use crate::theme::GLOBAL_STYLES;

#[component]
pub fn App() -> Element {
    let portfolio = use_context_provider(|| {
        Portfolio::new(
            crate::content(),
            Arc::new(FsMediaLoader::new(crate::assets_dir())),
        )
    });

    let mut visible = use_signal(|| portfolio.navigator().visible());
    let mut active_link = use_signal(|| portfolio.navigator().active_link());
    let mut overlay_active = use_signal(|| portfolio.navigator().overlay_active());

    let window = dioxus::desktop::use_window();

    // Mirror navigator events into signals and apply chrome effects.
    {
        let portfolio = portfolio.clone();
        let window = window.clone();
        use_effect(move || {
            let portfolio = portfolio.clone();
            let window = window.clone();
            spawn(async move {
                let mut events = portfolio.navigator().subscribe();
                while let Ok(event) = events.recv().await {
                    match event {
                        NavEvent::OverlayShown => overlay_active.set(true),
                        NavEvent::OverlayHidden => overlay_active.set(false),
                        NavEvent::SectionShown { section } => visible.set(section),
                        NavEvent::TitleChanged { title } => window.set_title(&title),
                        NavEvent::ScrollToTop => {
                            let _ =
                                document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
                        }
                        NavEvent::LinkActivated { section } => active_link.set(Some(section)),
                    }
                }
            });
        });
    }

    let on_navigate = use_callback({
        let portfolio = portfolio.clone();
        move |section: Section| {
            let portfolio = portfolio.clone();
            portfolio.navigator().set_active_link(section);
            spawn(async move {
                portfolio.navigator().navigate_to(section.key()).await;
            });
        }
    });

    let on_keydown = {
        let portfolio = portfolio.clone();
        move |event: KeyboardEvent| {
            if event.key() == Key::Escape {
                let portfolio = portfolio.clone();
                spawn(async move {
                    portfolio.modal().close().await;
                });
            }
        }
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "app-shell",
            tabindex: "0",
            autofocus: true,
            onkeydown: on_keydown,

            TransitionOverlay { active: overlay_active() }
            NavHeader {
                active: active_link(),
                on_navigate: move |section| on_navigate.call(section),
            }

            main { class: "sections",
                section {
                    id: "home",
                    class: if visible() == Some(Section::Home) { "section active" } else { "section" },
                    Home {}
                }
                section {
                    id: "tps",
                    class: if visible() == Some(Section::Tps) { "section active" } else { "section" },
                    Works {}
                }
                section {
                    id: "services",
                    class: if visible() == Some(Section::Services) { "section active" } else { "section" },
                    Services {}
                }
                section {
                    id: "contact",
                    class: if visible() == Some(Section::Contact) { "section active" } else { "section" },
                    Contact {}
                }
            }

            MediaModalHost {}
            ToastHost {}
        }
    }
}
