//! Notification Emitter - single-slot, auto-dismissing status toasts.
//!
//! Posting always evicts the current toast before installing the new
//! one, so stale nodes never accumulate. Expiry runs on the timer
//! queue: slide out after [`DISPLAY_MS`], removal [`EXIT_MS`] later.
//! Both steps re-check the notification id first; timers belonging to
//! an evicted toast never touch its successor.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::debug;

use crate::events::NotifyEvent;
use crate::types::{Notification, NotificationLevel};

/// How long a toast stays fully visible.
pub const DISPLAY_MS: u64 = 3000;

/// Length of the slide-out animation before removal.
pub const EXIT_MS: u64 = 300;

const EVENT_CAPACITY: usize = 64;

#[derive(Debug)]
struct NotifierState {
    current: Option<Notification>,
    exiting: bool,
}

/// Owns the single toast slot.
///
/// Cheap to clone; clones share the slot and the event channel.
#[derive(Clone)]
pub struct Notifier {
    state: Arc<Mutex<NotifierState>>,
    next_id: Arc<AtomicU64>,
    events: broadcast::Sender<NotifyEvent>,
}

impl Notifier {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(NotifierState {
                current: None,
                exiting: false,
            })),
            next_id: Arc::new(AtomicU64::new(0)),
            events,
        }
    }

    /// Subscribe to toast lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<NotifyEvent> {
        self.events.subscribe()
    }

    /// The toast currently on screen, if any.
    pub fn current(&self) -> Option<Notification> {
        self.state.lock().current.clone()
    }

    /// Whether the current toast is running its exit animation.
    pub fn is_exiting(&self) -> bool {
        self.state.lock().exiting
    }

    /// Post a toast, evicting whatever is on screen, and schedule its
    /// expiry. Returns the new toast's id.
    pub fn notify(&self, message: impl Into<String>, level: NotificationLevel) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let notification = Notification {
            id,
            message: message.into(),
            level,
        };
        debug!(id, %level, message = %notification.message, "notification posted");

        {
            let mut state = self.state.lock();
            if let Some(previous) = state.current.take() {
                let _ = self.events.send(NotifyEvent::Evicted { id: previous.id });
            }
            state.exiting = false;
            state.current = Some(notification.clone());
        }
        let _ = self.events.send(NotifyEvent::Posted { notification });

        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(DISPLAY_MS)).await;
            {
                let mut state = state.lock();
                if state.current.as_ref().map(|n| n.id) != Some(id) {
                    return;
                }
                state.exiting = true;
            }
            let _ = events.send(NotifyEvent::Exiting { id });

            tokio::time::sleep(std::time::Duration::from_millis(EXIT_MS)).await;
            {
                let mut state = state.lock();
                if state.current.as_ref().map(|n| n.id) != Some(id) {
                    return;
                }
                state.current = None;
                state.exiting = false;
            }
            let _ = events.send(NotifyEvent::Cleared { id });
        });

        id
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
