//! Media modal behavior: load outcomes, fallback policy, close
//! sequencing and the overwrite-on-reopen guard.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use portfolio_core::modal::CLEAR_DELAY_MS;
use portfolio_core::{
    LoadedMedia, MediaKind, MediaLoader, MediaModal, MediaRequest, ModalContent, ModalEvent,
    ModalPhase, NotificationLevel, Notifier, NotifyEvent, PortfolioError, PortfolioResult,
    FALLBACK_IMAGE_URI,
};

/// Scripted loader: sources under `slow/` take 2s, sources containing
/// `missing` fail, everything else resolves in 10ms.
struct StubLoader;

#[async_trait]
impl MediaLoader for StubLoader {
    async fn load(&self, request: &MediaRequest) -> PortfolioResult<LoadedMedia> {
        let delay = if request.source.starts_with("slow/") {
            2000
        } else {
            10
        };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        if request.source.contains("missing") {
            return Err(PortfolioError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "stub: not found",
            )));
        }
        Ok(match request.kind {
            MediaKind::Image => LoadedMedia::Image {
                data_uri: format!("data:image/png;base64,{}", request.source),
            },
            MediaKind::Video => LoadedMedia::Video {
                data_uri: format!("data:video/mp4;base64,{}", request.source),
            },
        })
    }
}

fn modal() -> (MediaModal, Notifier) {
    let notifier = Notifier::new();
    (
        MediaModal::new(Arc::new(StubLoader), notifier.clone()),
        notifier,
    )
}

fn image_request(source: &str) -> MediaRequest {
    MediaRequest {
        title: "Modern Loft Interior".to_string(),
        kind: MediaKind::Image,
        source: source.to_string(),
    }
}

fn video_request(source: &str) -> MediaRequest {
    MediaRequest {
        title: "Product Turntable".to_string(),
        kind: MediaKind::Video,
        source: source.to_string(),
    }
}

fn drain_posted(events: &mut tokio::sync::broadcast::Receiver<NotifyEvent>) -> Vec<NotificationLevel> {
    let mut levels = Vec::new();
    while let Ok(event) = events.try_recv() {
        if let NotifyEvent::Posted { notification } = event {
            levels.push(notification.level);
        }
    }
    levels
}

#[tokio::test(start_paused = true)]
async fn test_image_load_success_reaches_loaded_with_one_toast() {
    let (modal, notifier) = modal();
    let mut toasts = notifier.subscribe();

    modal.open(image_request("renders/tp1.png")).await;

    let snapshot = modal.snapshot();
    assert_eq!(snapshot.phase, ModalPhase::Loaded);
    assert_eq!(
        snapshot.title.as_deref(),
        Some("Modern Loft Interior - Render")
    );
    assert!(matches!(
        snapshot.content,
        ModalContent::Image { fallback: false, .. }
    ));
    assert!(snapshot.scroll_locked);
    assert_eq!(drain_posted(&mut toasts), vec![NotificationLevel::Success]);
}

#[tokio::test(start_paused = true)]
async fn test_image_load_failure_substitutes_the_fallback() {
    let (modal, notifier) = modal();
    let mut toasts = notifier.subscribe();

    modal.open(image_request("renders/missing.png")).await;

    let snapshot = modal.snapshot();
    // Never left in Loading: the fallback displays as a soft success.
    assert_eq!(snapshot.phase, ModalPhase::Loaded);
    match snapshot.content {
        ModalContent::Image { data_uri, fallback } => {
            assert!(fallback);
            assert_eq!(data_uri, FALLBACK_IMAGE_URI);
        }
        other => panic!("expected fallback image, got {:?}", other),
    }
    assert_eq!(drain_posted(&mut toasts), vec![NotificationLevel::Warning]);
}

#[tokio::test(start_paused = true)]
async fn test_video_load_failure_shows_error_panel_without_fallback() {
    let (modal, notifier) = modal();
    let mut toasts = notifier.subscribe();
    let mut events = modal.subscribe();

    modal.open(video_request("renders/missing.mp4")).await;

    let snapshot = modal.snapshot();
    assert_eq!(snapshot.phase, ModalPhase::Failed);
    assert_eq!(
        snapshot.content,
        ModalContent::VideoError {
            attempted: "renders/missing.mp4".to_string()
        }
    );
    assert_eq!(drain_posted(&mut toasts), vec![NotificationLevel::Error]);

    let mut saw_failure = false;
    while let Ok(event) = events.try_recv() {
        assert!(!matches!(event, ModalEvent::ContentReady));
        if let ModalEvent::LoadFailed { source } = event {
            assert_eq!(source, "renders/missing.mp4");
            saw_failure = true;
        }
    }
    assert!(saw_failure);
}

#[tokio::test(start_paused = true)]
async fn test_close_halts_video_before_clearing_content() {
    let (modal, _notifier) = modal();
    modal.open(video_request("renders/tp2.mp4")).await;

    let mut events = modal.subscribe();
    modal.close().await;

    assert_eq!(events.try_recv().unwrap(), ModalEvent::CloseStarted);
    assert_eq!(events.try_recv().unwrap(), ModalEvent::VideoHalted);
    assert_eq!(
        events.try_recv().unwrap(),
        ModalEvent::ScrollLock { locked: false }
    );
    assert_eq!(events.try_recv().unwrap(), ModalEvent::ContentCleared);

    let snapshot = modal.snapshot();
    assert_eq!(snapshot.phase, ModalPhase::Closed);
    assert_eq!(snapshot.content, ModalContent::Empty);
    assert!(snapshot.title.is_none());
    assert!(!snapshot.scroll_locked);
}

#[tokio::test(start_paused = true)]
async fn test_close_unlocks_scroll_before_content_teardown() {
    let (modal, _notifier) = modal();
    modal.open(image_request("renders/tp1.png")).await;
    assert!(modal.snapshot().scroll_locked);

    let worker = modal.clone();
    tokio::spawn(async move { worker.close().await });

    // Mid closing transition: scroll already restored, content still up
    // for the fade-out.
    tokio::time::sleep(Duration::from_millis(CLEAR_DELAY_MS - 100)).await;
    let snapshot = modal.snapshot();
    assert!(!snapshot.scroll_locked);
    assert_eq!(snapshot.phase, ModalPhase::Closed);
    assert!(matches!(snapshot.content, ModalContent::Image { .. }));

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(modal.snapshot().content, ModalContent::Empty);
}

#[tokio::test(start_paused = true)]
async fn test_close_while_closed_is_a_no_op() {
    let (modal, _notifier) = modal();
    let mut events = modal.subscribe();
    modal.close().await;
    assert!(events.try_recv().is_err());
    assert_eq!(modal.snapshot().phase, ModalPhase::Closed);
}

#[tokio::test(start_paused = true)]
async fn test_reopen_during_close_survives_the_deferred_teardown() {
    let (modal, _notifier) = modal();
    modal.open(image_request("renders/tp1.png")).await;

    let worker = modal.clone();
    tokio::spawn(async move { worker.close().await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Reopen before the close's teardown timer fires.
    modal.open(video_request("renders/tp2.mp4")).await;

    // Well past the teardown deadline the reopened content must survive.
    tokio::time::sleep(Duration::from_millis(CLEAR_DELAY_MS + 100)).await;
    let snapshot = modal.snapshot();
    assert_eq!(snapshot.phase, ModalPhase::Loaded);
    assert!(matches!(snapshot.content, ModalContent::Video { .. }));
    assert!(snapshot.scroll_locked);
}

#[tokio::test(start_paused = true)]
async fn test_superseded_load_is_discarded() {
    let (modal, notifier) = modal();
    let mut toasts = notifier.subscribe();

    let slow = modal.clone();
    tokio::spawn(async move { slow.open(image_request("slow/tp1.png")).await });
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Overwrite while the first load is still in flight.
    modal.open(video_request("renders/tp2.mp4")).await;
    assert!(matches!(
        modal.snapshot().content,
        ModalContent::Video { .. }
    ));

    // Let the slow load finish; its outcome must be dropped.
    tokio::time::sleep(Duration::from_millis(2500)).await;
    let snapshot = modal.snapshot();
    assert_eq!(snapshot.phase, ModalPhase::Loaded);
    assert!(matches!(snapshot.content, ModalContent::Video { .. }));
    assert_eq!(drain_posted(&mut toasts), vec![NotificationLevel::Success]);
}
