//! Navigator behavior: visibility swaps, timing, title mapping, overlap.
//!
//! All tests run under a paused clock; sleeps auto-advance, and
//! test-side sleeps act as checkpoints between the machine's timers.

use std::time::Duration;

use portfolio_core::navigator::{Navigator, SETTLE_DELAY_MS, SWAP_DELAY_MS};
use portfolio_core::{NavEvent, Section, BASE_TITLE};

async fn checkpoint(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn test_initial_state_shows_home_without_transition() {
    let nav = Navigator::new();
    assert_eq!(nav.visible(), Some(Section::Home));
    assert_eq!(nav.active_link(), Some(Section::Home));
    assert!(!nav.overlay_active());
}

#[tokio::test(start_paused = true)]
async fn test_navigation_swaps_after_the_fixed_delay() {
    let nav = Navigator::new();
    let worker = nav.clone();
    tokio::spawn(async move { worker.navigate_to("services").await });

    // Just before the swap the old section is still up, overlay active.
    checkpoint(SWAP_DELAY_MS - 1).await;
    assert_eq!(nav.visible(), Some(Section::Home));
    assert!(nav.overlay_active());

    // Just after the swap the target is visible, overlay still active.
    checkpoint(2).await;
    assert_eq!(nav.visible(), Some(Section::Services));
    assert!(nav.overlay_active());

    // After the settle delay the overlay drops.
    checkpoint(SETTLE_DELAY_MS).await;
    assert!(!nav.overlay_active());
}

#[tokio::test(start_paused = true)]
async fn test_navigation_emits_the_fixed_event_sequence() {
    let nav = Navigator::new();
    let mut events = nav.subscribe();
    let worker = nav.clone();
    tokio::spawn(async move { worker.navigate_to("services").await });

    assert_eq!(events.recv().await.unwrap(), NavEvent::OverlayShown);
    assert_eq!(
        events.recv().await.unwrap(),
        NavEvent::SectionShown {
            section: Some(Section::Services)
        }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        NavEvent::TitleChanged {
            title: "Services - Seif El Islam - Frontend & 3D Designer".to_string()
        }
    );
    assert_eq!(events.recv().await.unwrap(), NavEvent::ScrollToTop);
    assert_eq!(events.recv().await.unwrap(), NavEvent::OverlayHidden);
}

#[tokio::test(start_paused = true)]
async fn test_unknown_key_leaves_no_section_visible() {
    let nav = Navigator::new();
    let mut events = nav.subscribe();
    nav.navigate_to("blog").await;

    assert_eq!(nav.visible(), None);
    assert!(!nav.overlay_active());

    // Title falls back to the base title.
    let mut saw_title = false;
    while let Ok(event) = events.try_recv() {
        if let NavEvent::TitleChanged { title } = event {
            assert_eq!(title, BASE_TITLE);
            saw_title = true;
        }
    }
    assert!(saw_title);
}

#[tokio::test(start_paused = true)]
async fn test_set_active_link_is_idempotent() {
    let nav = Navigator::new();
    nav.set_active_link(Section::Contact);
    assert_eq!(nav.active_link(), Some(Section::Contact));
    nav.set_active_link(Section::Contact);
    assert_eq!(nav.active_link(), Some(Section::Contact));
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_navigations_last_write_wins() {
    let nav = Navigator::new();

    let first = nav.clone();
    tokio::spawn(async move { first.navigate_to("services").await });

    checkpoint(100).await;
    let second = nav.clone();
    tokio::spawn(async move { second.navigate_to("contact").await });

    // First swap lands at 500.
    checkpoint(450).await;
    assert_eq!(nav.visible(), Some(Section::Services));

    // Second swap lands at 600 and overwrites it.
    checkpoint(100).await;
    assert_eq!(nav.visible(), Some(Section::Contact));

    // After both sequences finish the later target stays.
    checkpoint(400).await;
    assert_eq!(nav.visible(), Some(Section::Contact));
    assert!(!nav.overlay_active());
}

#[tokio::test(start_paused = true)]
async fn test_navigating_back_home_restores_base_title() {
    let nav = Navigator::new();
    nav.navigate_to("tps").await;
    assert_eq!(nav.visible(), Some(Section::Tps));

    let mut events = nav.subscribe();
    nav.navigate_to("home").await;
    assert_eq!(nav.visible(), Some(Section::Home));

    let mut titles = Vec::new();
    while let Ok(event) = events.try_recv() {
        if let NavEvent::TitleChanged { title } = event {
            titles.push(title);
        }
    }
    assert_eq!(titles, vec![BASE_TITLE.to_string()]);
}
