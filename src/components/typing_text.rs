//! Typing ticker line for the home hero.
//!
//! Drives the core [`TypingTicker`] on a timer task; each frame tells
//! the task how long to wait before the next character.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::typing::{TypingTicker, START_DELAY_MS};

#[component]
pub fn TypingText(phrases: Vec<String>) -> Element {
    let mut text = use_signal(String::new);

    use_effect(move || {
        let phrases = phrases.clone();
        spawn(async move {
            let mut ticker = TypingTicker::new(phrases);
            tokio::time::sleep(Duration::from_millis(START_DELAY_MS)).await;
            loop {
                let frame = ticker.tick();
                text.set(frame.text);
                tokio::time::sleep(Duration::from_millis(frame.next_delay_ms)).await;
            }
        });
    });

    rsx! {
        span { class: "typing-text", "{text()}" }
        span { class: "typing-caret" }
    }
}
