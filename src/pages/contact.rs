//! Contact section - channels with copy-to-clipboard and open actions.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::{ContactChannel, NotificationLevel};

use crate::context::use_portfolio;

#[component]
pub fn Contact() -> Element {
    let portfolio = use_portfolio();
    let channels = portfolio.content().channels.clone();

    rsx! {
        h2 { class: "section-title", "Contact" }
        p { class: "section-lead",
            "Have a project in mind? Reach out through any of these."
        }
        div { class: "contact-list",
            for channel in channels {
                ContactRow { key: "{channel.label}", channel: channel.clone() }
            }
        }
    }
}

#[component]
fn ContactRow(channel: ContactChannel) -> Element {
    let portfolio = use_portfolio();
    let mut copied = use_signal(|| false);

    let copy_value = use_callback({
        let portfolio = portfolio.clone();
        let channel = channel.clone();
        move |_: ()| {
            let portfolio = portfolio.clone();
            let label = channel.label.clone();
            let value = channel.value.clone();
            spawn(async move {
                match arboard::Clipboard::new() {
                    Ok(mut clipboard) => {
                        if clipboard.set_text(&value).is_ok() {
                            portfolio.notifier().notify(
                                format!("{} copied to clipboard", label),
                                NotificationLevel::Success,
                            );
                            copied.set(true);
                            tokio::time::sleep(Duration::from_secs(2)).await;
                            copied.set(false);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Clipboard not available: {}", e);
                        portfolio
                            .notifier()
                            .notify("Clipboard not available", NotificationLevel::Error);
                    }
                }
            });
        }
    });

    let open_channel = use_callback({
        let portfolio = portfolio.clone();
        let channel = channel.clone();
        move |_: ()| {
            let Some(href) = channel.href.clone() else {
                return;
            };
            portfolio.notifier().notify(
                format!("Opening {}...", channel.label),
                NotificationLevel::Info,
            );
            if let Err(e) = open::that(&href) {
                tracing::warn!("Failed to open {}: {}", href, e);
                portfolio
                    .notifier()
                    .notify("Could not open the link", NotificationLevel::Error);
            }
        }
    });

    rsx! {
        div { class: "contact-row",
            div { class: "contact-info",
                span { class: "contact-label", "{channel.label}" }
                span { class: "contact-value", "{channel.value}" }
            }
            div { class: "contact-actions",
                button {
                    class: "btn-outline",
                    onclick: move |_| copy_value.call(()),
                    if copied() { "Copied ✓" } else { "Copy" }
                }
                if channel.href.is_some() {
                    button {
                        class: "btn-outline",
                        onclick: move |_| open_channel.call(()),
                        "Open"
                    }
                }
            }
        }
    }
}
