//! Section Navigator - drives the timed cross-fade between page sections.
//!
//! Exactly one section (or none, after an unknown key) is visible at a
//! time. A navigation runs a fixed three-step sequence: overlay on, swap
//! after [`SWAP_DELAY_MS`], overlay off after a further
//! [`SETTLE_DELAY_MS`]. Navigations are neither queued nor cancelled;
//! overlapping calls interleave on the timer queue and the last
//! visibility write wins.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::debug;

use crate::events::NavEvent;
use crate::types::{self, Section};

/// Delay between showing the overlay and swapping section visibility.
pub const SWAP_DELAY_MS: u64 = 500;

/// Delay between the swap and hiding the overlay again.
pub const SETTLE_DELAY_MS: u64 = 300;

/// Buffered events per subscriber before lagging.
const EVENT_CAPACITY: usize = 64;

#[derive(Debug)]
struct NavigatorState {
    visible: Option<Section>,
    active_link: Option<Section>,
    overlay_active: bool,
}

/// Tracks the visible section, the highlighted nav link and the
/// transition overlay.
///
/// Cheap to clone; clones share state and the event channel.
#[derive(Clone)]
pub struct Navigator {
    state: Arc<Mutex<NavigatorState>>,
    events: broadcast::Sender<NavEvent>,
}

impl Navigator {
    /// Starts on the home section with its nav link active and no
    /// transition running.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(NavigatorState {
                visible: Some(Section::Home),
                active_link: Some(Section::Home),
                overlay_active: false,
            })),
            events,
        }
    }

    /// Subscribe to navigation events.
    pub fn subscribe(&self) -> broadcast::Receiver<NavEvent> {
        self.events.subscribe()
    }

    /// The currently visible section, if any.
    pub fn visible(&self) -> Option<Section> {
        self.state.lock().visible
    }

    /// The nav link currently carrying the active highlight.
    pub fn active_link(&self) -> Option<Section> {
        self.state.lock().active_link
    }

    /// Whether the transition overlay is up.
    pub fn overlay_active(&self) -> bool {
        self.state.lock().overlay_active
    }

    /// Move the active highlight to `section`. Idempotent; at most one
    /// link is ever active.
    pub fn set_active_link(&self, section: Section) {
        self.state.lock().active_link = Some(section);
        let _ = self.events.send(NavEvent::LinkActivated { section });
    }

    /// Request that the section named by `key` become visible.
    ///
    /// Unknown keys still run the full transition but leave no section
    /// visible and fall back to the base window title. Callers spawn
    /// this; a second call while one is in flight starts an independent
    /// timer sequence and the last visibility write wins.
    pub async fn navigate_to(&self, key: &str) {
        let target = Section::from_key(key);
        if target.is_none() {
            debug!(key, "navigation to unknown section key");
        }

        self.state.lock().overlay_active = true;
        let _ = self.events.send(NavEvent::OverlayShown);

        tokio::time::sleep(std::time::Duration::from_millis(SWAP_DELAY_MS)).await;

        let title = {
            let mut state = self.state.lock();
            state.visible = target;
            types::document_title(target)
        };
        debug!(section = ?target, "section visibility swapped");
        let _ = self.events.send(NavEvent::SectionShown { section: target });
        let _ = self.events.send(NavEvent::TitleChanged { title });
        let _ = self.events.send(NavEvent::ScrollToTop);

        tokio::time::sleep(std::time::Duration::from_millis(SETTLE_DELAY_MS)).await;

        self.state.lock().overlay_active = false;
        let _ = self.events.send(NavEvent::OverlayHidden);
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
