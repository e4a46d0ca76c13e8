//! Media Modal - the lightbox for project renders.
//!
//! Phases run `Closed → Loading → {Loaded, Failed} → Closed`. Every
//! load outcome posts exactly one toast; an image failure substitutes
//! the embedded fallback and still displays (soft success), a video
//! failure shows an inline error panel naming the attempted source.
//!
//! Only one request is active at a time. Opening while open overwrites:
//! each open bumps a sequence number, and a load that finishes after it
//! was superseded is discarded instead of clobbering the newer request.
//! The same guard keeps the deferred content teardown in `close` from
//! wiping a modal that was reopened during the closing transition.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::events::ModalEvent;
use crate::media::{LoadedMedia, MediaLoader, FALLBACK_IMAGE_URI};
use crate::notify::Notifier;
use crate::types::{MediaKind, MediaRequest, NotificationLevel};

/// How long the closing transition runs before content teardown.
pub const CLEAR_DELAY_MS: u64 = 300;

const EVENT_CAPACITY: usize = 64;

/// Lifecycle phase of the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Loading,
    Loaded,
    Failed,
}

/// What the modal body is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalContent {
    Empty,
    Image { data_uri: String, fallback: bool },
    Video { data_uri: String },
    /// Inline error panel for a video that would not load
    VideoError { attempted: String },
}

/// Point-in-time view of the modal, mirrored into UI signals.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSnapshot {
    pub phase: ModalPhase,
    /// Header line, e.g. "Modern Loft Interior - Render"
    pub title: Option<String>,
    pub content: ModalContent,
    pub scroll_locked: bool,
}

#[derive(Debug)]
struct ModalState {
    phase: ModalPhase,
    title: Option<String>,
    content: ModalContent,
    scroll_locked: bool,
    /// Bumped by every open/close; stale timers and loads check it
    seq: u64,
}

/// The lightbox state machine.
///
/// Cheap to clone; clones share state, loader and event channel.
#[derive(Clone)]
pub struct MediaModal {
    state: Arc<Mutex<ModalState>>,
    loader: Arc<dyn MediaLoader>,
    notifier: Notifier,
    events: broadcast::Sender<ModalEvent>,
}

impl MediaModal {
    pub fn new(loader: Arc<dyn MediaLoader>, notifier: Notifier) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(ModalState {
                phase: ModalPhase::Closed,
                title: None,
                content: ModalContent::Empty,
                scroll_locked: false,
                seq: 0,
            })),
            loader,
            notifier,
            events,
        }
    }

    /// Subscribe to modal lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<ModalEvent> {
        self.events.subscribe()
    }

    /// Current state, for rendering.
    pub fn snapshot(&self) -> ModalSnapshot {
        let state = self.state.lock();
        ModalSnapshot {
            phase: state.phase,
            title: state.title.clone(),
            content: state.content.clone(),
            scroll_locked: state.scroll_locked,
        }
    }

    /// Open the modal for `request`: show the loading placeholder, lock
    /// page scroll and resolve the media through the loader.
    pub async fn open(&self, request: MediaRequest) {
        let seq = {
            let mut state = self.state.lock();
            state.seq += 1;
            state.phase = ModalPhase::Loading;
            state.title = Some(format!("{} - {}", request.title, request.kind.render_label()));
            state.content = ModalContent::Empty;
            state.scroll_locked = true;
            state.seq
        };
        debug!(source = %request.source, kind = %request.kind, "modal opened");
        let _ = self.events.send(ModalEvent::Opened {
            request: request.clone(),
        });
        let _ = self.events.send(ModalEvent::ScrollLock { locked: true });

        let outcome = self.loader.load(&request).await;

        let mut state = self.state.lock();
        if state.seq != seq {
            debug!(source = %request.source, "load outcome discarded, request superseded");
            return;
        }

        match outcome {
            Ok(LoadedMedia::Image { data_uri }) => {
                state.phase = ModalPhase::Loaded;
                state.content = ModalContent::Image {
                    data_uri,
                    fallback: false,
                };
                drop(state);
                let _ = self.events.send(ModalEvent::ContentReady);
                self.notifier
                    .notify("Image loaded successfully", NotificationLevel::Success);
            }
            Ok(LoadedMedia::Video { data_uri }) => {
                state.phase = ModalPhase::Loaded;
                state.content = ModalContent::Video { data_uri };
                drop(state);
                let _ = self.events.send(ModalEvent::ContentReady);
                self.notifier
                    .notify("Video loaded successfully", NotificationLevel::Success);
            }
            Err(err) => match request.kind {
                MediaKind::Image => {
                    warn!(source = %request.source, error = %err, "image load failed, using fallback");
                    state.phase = ModalPhase::Loaded;
                    state.content = ModalContent::Image {
                        data_uri: FALLBACK_IMAGE_URI.to_string(),
                        fallback: true,
                    };
                    drop(state);
                    let _ = self.events.send(ModalEvent::ContentReady);
                    self.notifier.notify(
                        "Failed to load image. Showing fallback.",
                        NotificationLevel::Warning,
                    );
                }
                MediaKind::Video => {
                    warn!(source = %request.source, error = %err, "video load failed");
                    state.phase = ModalPhase::Failed;
                    state.content = ModalContent::VideoError {
                        attempted: request.source.clone(),
                    };
                    drop(state);
                    let _ = self.events.send(ModalEvent::LoadFailed {
                        source: request.source,
                    });
                    self.notifier.notify(
                        "Video file not found. Check the project assets.",
                        NotificationLevel::Error,
                    );
                }
            },
        }
    }

    /// Close the modal. Halts any video first, unlocks scroll right
    /// away and tears the content down once the closing transition has
    /// finished. No-op while closed.
    pub async fn close(&self) {
        let (seq, had_video) = {
            let mut state = self.state.lock();
            if state.phase == ModalPhase::Closed {
                return;
            }
            state.seq += 1;
            let had_video = matches!(state.content, ModalContent::Video { .. });
            state.phase = ModalPhase::Closed;
            state.scroll_locked = false;
            (state.seq, had_video)
        };
        debug!(had_video, "modal closing");
        let _ = self.events.send(ModalEvent::CloseStarted);
        if had_video {
            let _ = self.events.send(ModalEvent::VideoHalted);
        }
        let _ = self.events.send(ModalEvent::ScrollLock { locked: false });

        tokio::time::sleep(std::time::Duration::from_millis(CLEAR_DELAY_MS)).await;

        let mut state = self.state.lock();
        if state.seq != seq {
            return;
        }
        state.title = None;
        state.content = ModalContent::Empty;
        drop(state);
        let _ = self.events.send(ModalEvent::ContentCleared);
    }
}
