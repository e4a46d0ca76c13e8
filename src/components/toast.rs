//! Toast host - renders the single notification slot.
//!
//! Subscribes to notifier events and mirrors the slot into a signal.
//! The slide-in runs as a mount animation; the `exiting` class drives
//! the slide-out before the core clears the slot.

use dioxus::prelude::*;
use portfolio_core::NotificationLevel;

use crate::context::use_portfolio;

fn level_glyph(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "i",
        NotificationLevel::Success => "✓",
        NotificationLevel::Warning => "⚠",
        NotificationLevel::Error => "✕",
    }
}

#[component]
pub fn ToastHost() -> Element {
    let portfolio = use_portfolio();
    let mut current = use_signal(|| portfolio.notifier().current());
    let mut exiting = use_signal(|| portfolio.notifier().is_exiting());

    {
        let portfolio = portfolio.clone();
        use_effect(move || {
            let portfolio = portfolio.clone();
            spawn(async move {
                let mut events = portfolio.notifier().subscribe();
                while let Ok(_event) = events.recv().await {
                    current.set(portfolio.notifier().current());
                    exiting.set(portfolio.notifier().is_exiting());
                }
            });
        });
    }

    let exit_class = if exiting() { " exiting" } else { "" };

    rsx! {
        if let Some(notification) = current() {
            div {
                key: "{notification.id}",
                class: "notification {notification.level}{exit_class}",
                span { class: "notification-icon", {level_glyph(notification.level)} }
                span { class: "notification-message", "{notification.message}" }
            }
        }
    }
}
