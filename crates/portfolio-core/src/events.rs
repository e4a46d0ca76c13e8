//! Event streams emitted by the core state machines.
//!
//! Each machine owns a `tokio::sync::broadcast` channel; the UI mirrors
//! events into signals and applies the chrome side effects (window title,
//! scroll, body scroll lock). Tests subscribe to assert ordering and timing.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  NavEvent: one navigation's fixed sequence                 │
//! │  OverlayShown → SectionShown → TitleChanged → ScrollToTop  │
//! │               → OverlayHidden                              │
//! │                                                            │
//! │  ModalEvent: lightbox lifecycle                            │
//! │  Opened → {ContentReady | LoadFailed}                      │
//! │  CloseStarted → [VideoHalted] → ContentCleared             │
//! │                                                            │
//! │  NotifyEvent: single-slot toast lifecycle                  │
//! │  Posted → Exiting → Cleared   (or Evicted by a successor)  │
//! └────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{MediaRequest, Notification, Section};

/// Events emitted by [`crate::navigator::Navigator`] during a navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// The transition overlay became active
    OverlayShown,
    /// Visibility flags were swapped; `None` means no section is visible
    /// (the unknown-key fallback)
    SectionShown { section: Option<Section> },
    /// The window title should change
    TitleChanged { title: String },
    /// The viewport should scroll back to the top
    ScrollToTop,
    /// The transition overlay became inactive
    OverlayHidden,
    /// A nav link gained the active highlight
    LinkActivated { section: Section },
}

/// Events emitted by [`crate::modal::MediaModal`].
#[derive(Debug, Clone, PartialEq)]
pub enum ModalEvent {
    /// A request entered the loading phase
    Opened { request: MediaRequest },
    /// Page scroll lock changed
    ScrollLock { locked: bool },
    /// Media (or the image fallback) is ready to display
    ContentReady,
    /// A video failed to load; the error panel names the attempted source
    LoadFailed { source: String },
    /// Close began; the closing transition is running
    CloseStarted,
    /// A playing video must pause and seek back to zero
    VideoHalted,
    /// Modal content was torn down after the closing transition
    ContentCleared,
}

/// Events emitted by [`crate::notify::Notifier`].
#[derive(Debug, Clone, PartialEq)]
pub enum NotifyEvent {
    /// A new notification slid into view
    Posted { notification: Notification },
    /// A notification was removed early because a successor replaced it
    Evicted { id: u64 },
    /// The display window elapsed; the exit animation is running
    Exiting { id: u64 },
    /// The notification was removed after its exit animation
    Cleared { id: u64 },
}
