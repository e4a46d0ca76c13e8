//! Media modal host - the lightbox for project renders.
//!
//! Mirrors the core modal snapshot into a signal and applies the two
//! webview side effects the core cannot reach: the body scroll lock and
//! pausing a video before teardown. Clicking the backdrop closes;
//! clicks inside the content do not.

use dioxus::document;
use dioxus::prelude::*;
use portfolio_core::{ModalContent, ModalEvent, ModalPhase};

use crate::context::use_portfolio;

#[component]
pub fn MediaModalHost() -> Element {
    let portfolio = use_portfolio();
    let mut snapshot = use_signal(|| portfolio.modal().snapshot());

    {
        let portfolio = portfolio.clone();
        use_effect(move || {
            let portfolio = portfolio.clone();
            spawn(async move {
                let mut events = portfolio.modal().subscribe();
                while let Ok(event) = events.recv().await {
                    match event {
                        ModalEvent::ScrollLock { locked } => {
                            let overflow = if locked { "hidden" } else { "auto" };
                            let _ = document::eval(&format!(
                                "document.body.style.overflow = '{}';",
                                overflow
                            ));
                        }
                        ModalEvent::VideoHalted => {
                            let _ = document::eval(
                                "const v = document.querySelector('.modal-video'); \
                                 if (v) { v.pause(); v.currentTime = 0; }",
                            );
                        }
                        _ => {}
                    }
                    snapshot.set(portfolio.modal().snapshot());
                }
            });
        });
    }

    let close = use_callback({
        let portfolio = portfolio.clone();
        move |_: ()| {
            let portfolio = portfolio.clone();
            spawn(async move {
                portfolio.modal().close().await;
            });
        }
    });

    let view = snapshot();
    let title = view.title.clone().unwrap_or_default();

    let media = match &view.content {
        ModalContent::Empty => rsx! {},
        ModalContent::Image { data_uri, fallback } => rsx! {
            img {
                class: if *fallback { "modal-image fallback" } else { "modal-image" },
                src: "{data_uri}",
                alt: "{title}",
            }
        },
        ModalContent::Video { data_uri } => rsx! {
            video {
                class: "modal-video",
                src: "{data_uri}",
                controls: true,
                autoplay: true,
            }
        },
        ModalContent::VideoError { attempted } => rsx! {
            div { class: "modal-error",
                span { class: "modal-error-icon", "⚠" }
                h4 { "Video Not Available" }
                p { "The video file could not be loaded." }
                p { "Check that the file exists in the project assets:" }
                p { code { "{attempted}" } }
                button { class: "btn", onclick: move |_| close.call(()), "Close" }
            }
        },
    };

    rsx! {
        div {
            class: if view.phase != ModalPhase::Closed { "render-modal active" } else { "render-modal" },
            onclick: move |_| close.call(()),

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h3 { class: "modal-title", "{title}" }
                    button { class: "modal-close", onclick: move |_| close.call(()), "×" }
                }

                div { class: "modal-media",
                    if view.phase == ModalPhase::Loading {
                        div { class: "modal-loading",
                            div { class: "loading-spinner" }
                            p { "Loading media..." }
                        }
                    }
                    {media}
                }
            }
        }
    }
}
