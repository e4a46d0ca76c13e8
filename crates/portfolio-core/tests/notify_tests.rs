//! Notifier behavior: single slot, eviction, guarded expiry timers.

use std::time::Duration;

use portfolio_core::notify::{DISPLAY_MS, EXIT_MS};
use portfolio_core::{NotificationLevel, Notifier, NotifyEvent};

async fn checkpoint(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn test_rapid_posts_keep_exactly_one_notification() {
    let notifier = Notifier::new();
    let mut events = notifier.subscribe();

    let mut last_id = 0;
    for n in 0..5 {
        last_id = notifier.notify(format!("toast {}", n), NotificationLevel::Info);
        // One slot, always holding the latest.
        assert_eq!(notifier.current().map(|c| c.id), Some(last_id));
    }

    let mut posted = 0;
    let mut evicted = 0;
    while let Ok(event) = events.try_recv() {
        match event {
            NotifyEvent::Posted { .. } => posted += 1,
            NotifyEvent::Evicted { .. } => evicted += 1,
            other => panic!("unexpected event {:?}", other),
        }
    }
    assert_eq!(posted, 5);
    assert_eq!(evicted, 4);
}

#[tokio::test(start_paused = true)]
async fn test_notification_expires_after_display_and_exit_windows() {
    let notifier = Notifier::new();
    let mut events = notifier.subscribe();
    let id = notifier.notify("Image loaded successfully", NotificationLevel::Success);

    checkpoint(DISPLAY_MS - 1).await;
    assert!(notifier.current().is_some());
    assert!(!notifier.is_exiting());

    checkpoint(2).await;
    assert!(notifier.current().is_some());
    assert!(notifier.is_exiting());

    checkpoint(EXIT_MS).await;
    assert!(notifier.current().is_none());
    assert!(!notifier.is_exiting());

    assert!(matches!(
        events.try_recv(),
        Ok(NotifyEvent::Posted { .. })
    ));
    assert_eq!(events.try_recv().unwrap(), NotifyEvent::Exiting { id });
    assert_eq!(events.try_recv().unwrap(), NotifyEvent::Cleared { id });
}

#[tokio::test(start_paused = true)]
async fn test_evicted_notification_timers_never_touch_the_successor() {
    let notifier = Notifier::new();
    let mut events = notifier.subscribe();

    let first = notifier.notify("first", NotificationLevel::Info);
    checkpoint(DISPLAY_MS - 100).await;
    let second = notifier.notify("second", NotificationLevel::Warning);

    // The first toast's dwell timer fires now; it must be a no-op.
    checkpoint(200).await;
    assert_eq!(notifier.current().map(|c| c.id), Some(second));
    assert!(!notifier.is_exiting());

    // The second expires on its own schedule.
    checkpoint(DISPLAY_MS + EXIT_MS).await;
    assert!(notifier.current().is_none());

    let mut exited = Vec::new();
    while let Ok(event) = events.try_recv() {
        match event {
            NotifyEvent::Exiting { id } | NotifyEvent::Cleared { id } => exited.push(id),
            _ => {}
        }
    }
    assert!(!exited.contains(&first));
    assert!(exited.contains(&second));
}

#[tokio::test(start_paused = true)]
async fn test_ids_are_monotonic() {
    let notifier = Notifier::new();
    let a = notifier.notify("a", NotificationLevel::Info);
    let b = notifier.notify("b", NotificationLevel::Error);
    assert!(b > a);
}
