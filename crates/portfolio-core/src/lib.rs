//! Portfolio core library
//!
//! State machines behind the portfolio desktop app: section navigation
//! with a timed cross-fade, a media lightbox with per-kind failure
//! recovery, and single-slot toast notifications.
//!
//! ## Overview
//!
//! - **Navigator**: exactly one section visible at a time; navigation
//!   runs overlay → swap → settle on fixed delays, updates the window
//!   title and scrolls back to the top. Overlapping navigations are
//!   neither queued nor cancelled; the last visibility write wins.
//! - **MediaModal**: `Closed → Loading → {Loaded, Failed} → Closed`.
//!   Images that fail to load fall back to an embedded placeholder;
//!   videos that fail show an inline error panel. Every outcome posts
//!   exactly one toast.
//! - **Notifier**: one toast at a time, evict-before-post, auto-expiry
//!   on the timer queue.
//!
//! Everything is in-memory; nothing persists between runs. The UI layer
//! subscribes to each machine's broadcast events and mirrors them into
//! signals.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use portfolio_core::{FsMediaLoader, Portfolio, PortfolioContent};
//!
//! let portfolio = Portfolio::new(
//!     PortfolioContent::builtin(),
//!     Arc::new(FsMediaLoader::new("assets")),
//! );
//!
//! let mut events = portfolio.navigator().subscribe();
//! portfolio.navigator().navigate_to("services").await;
//! ```

pub mod content;
pub mod engine;
pub mod error;
pub mod events;
pub mod media;
pub mod modal;
pub mod navigator;
pub mod notify;
pub mod types;
pub mod typing;

// Re-exports
pub use content::{ContactChannel, MediaSource, PortfolioContent, PracticalWork, Profile, Service};
pub use engine::Portfolio;
pub use error::{PortfolioError, PortfolioResult};
pub use events::{ModalEvent, NavEvent, NotifyEvent};
pub use media::{FsMediaLoader, LoadedMedia, MediaLoader, FALLBACK_IMAGE_URI};
pub use modal::{MediaModal, ModalContent, ModalPhase, ModalSnapshot};
pub use navigator::Navigator;
pub use notify::Notifier;
pub use types::{
    document_title, MediaKind, MediaRequest, Notification, NotificationLevel, Section, BASE_TITLE,
};
